//! Pairing, PairSide, and MatchRecord for one-on-one matches.

use crate::models::participant::{ParticipantId, Rating};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which side of a pairing won the match.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairSide {
    #[default]
    First,
    Second,
}

/// One match-up of two distinct participants within a round.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Pairing {
    pub first: ParticipantId,
    pub second: ParticipantId,
}

impl Pairing {
    pub fn new(first: ParticipantId, second: ParticipantId) -> Self {
        Self { first, second }
    }

    pub fn contains(&self, id: ParticipantId) -> bool {
        self.first == id || self.second == id
    }

    /// (winner, loser) ids when `side` wins.
    pub fn outcome(&self, side: PairSide) -> (ParticipantId, ParticipantId) {
        match side {
            PairSide::First => (self.first, self.second),
            PairSide::Second => (self.second, self.first),
        }
    }
}

/// A decided match with the ratings it moved.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub round: u32,
    pub winner: ParticipantId,
    pub loser: ParticipantId,
    pub winner_before: Rating,
    pub winner_after: Rating,
    pub loser_before: Rating,
    pub loser_after: Rating,
    pub decided_at: DateTime<Utc>,
}

impl MatchRecord {
    /// Points gained by the winner (negative would mean a loss of points).
    pub fn winner_delta(&self) -> Rating {
        self.winner_after - self.winner_before
    }

    pub fn loser_delta(&self) -> Rating {
        self.loser_after - self.loser_before
    }
}
