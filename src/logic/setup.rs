//! Name entry: parse the roster and start the session (NameEntry -> InRound).

use crate::logic::pairing::generate_pairings;
use crate::models::{Participant, Session, SessionError, SessionPhase};
use rand::Rng;

/// Split comma-separated input into trimmed, non-empty names.
pub fn parse_names(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}

/// Start the session from comma-separated names: every name becomes a
/// participant at the configured initial rating, round 1 is paired.
///
/// Input with no usable names is rejected and leaves the session untouched.
pub fn start_session<R: Rng + ?Sized>(
    session: &mut Session,
    raw_names: &str,
    rng: &mut R,
) -> Result<(), SessionError> {
    if session.phase != SessionPhase::NameEntry {
        return Err(SessionError::InvalidState);
    }
    let names = parse_names(raw_names);
    if names.is_empty() {
        return Err(SessionError::InvalidRoster);
    }

    let initial_rating = session.config.initial_rating;
    session.participants = names
        .into_iter()
        .map(|name| Participant::new(name, initial_rating))
        .collect();
    session.round = 1;
    session.total_rounds = session.config.total_rounds;
    session.history.clear();
    // Leave NameEntry before pairing so generate_pairings accepts the session.
    session.phase = SessionPhase::InRound;
    log::info!(
        "Session started with {} participant(s), {} round(s)",
        session.participants.len(),
        session.total_rounds
    );

    generate_pairings(session, rng)
}
