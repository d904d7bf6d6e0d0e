//! Participant data structure.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a participant (used in pairings and lookups).
pub type ParticipantId = Uuid;

/// Elo rating. No floor is enforced, so it may go negative.
pub type Rating = i64;

/// A named participant in a ranking session.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    pub rating: Rating,
    pub wins: u32,
    pub losses: u32,
    /// Rounds spent unpaired because of an odd roster.
    pub byes: u32,
}

impl Participant {
    /// Create a new participant with the given name and starting rating.
    pub fn new(name: impl Into<String>, rating: Rating) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            rating,
            wins: 0,
            losses: 0,
            byes: 0,
        }
    }

    /// Record a win for this participant.
    pub fn add_win(&mut self) {
        self.wins += 1;
    }

    /// Record a loss for this participant.
    pub fn add_loss(&mut self) {
        self.losses += 1;
    }

    /// Record that this participant sat out one round.
    pub fn record_bye(&mut self) {
        self.byes += 1;
    }
}
