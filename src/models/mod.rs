//! Data structures for a ranking session: participants, pairings, session state.

mod pairing;
mod participant;
mod session;

pub use pairing::{MatchRecord, PairSide, Pairing};
pub use participant::{Participant, ParticipantId, Rating};
pub use session::{Session, SessionError, SessionPhase};
