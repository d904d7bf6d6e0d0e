//! Session, SessionPhase, and SessionError.

use crate::config::RankerConfig;
use crate::models::pairing::{MatchRecord, Pairing};
use crate::models::participant::{Participant, ParticipantId};
use serde::{Deserialize, Serialize};

/// Errors that can occur during session operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SessionError {
    /// The name input produced no usable participant names.
    InvalidRoster,
    /// A winner or loser is not in the roster.
    UnknownParticipant(ParticipantId),
    /// The same participant was given as both winner and loser.
    SelfMatch(ParticipantId),
    /// Session is not in a phase that allows this action.
    InvalidState,
    /// Extending would push the round count past `u32::MAX`.
    TooManyRounds,
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::InvalidRoster => write!(f, "Enter at least one name"),
            SessionError::UnknownParticipant(id) => write!(f, "Participant {} not found", id),
            SessionError::SelfMatch(_) => write!(f, "A participant cannot play against themselves"),
            SessionError::InvalidState => write!(f, "Invalid state for this action"),
            SessionError::TooManyRounds => write!(f, "Too many rounds"),
        }
    }
}

impl std::error::Error for SessionError {}

/// Current phase of the session.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    /// Waiting for the roster; no participants yet.
    #[default]
    NameEntry,
    /// Pairings of the current round are being decided.
    InRound,
    /// Every pairing of the round has a result; waiting to advance.
    RoundComplete,
    /// All rounds played; leaderboard available.
    Finished,
}

/// Full ranking session: roster, current round, pairings, and history.
///
/// Fields are only mutated through the session operations in [`crate::logic`]
/// and the methods below.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Session {
    pub(crate) config: RankerConfig,
    /// Roster in pairing order (reshuffled every round).
    pub(crate) participants: Vec<Participant>,
    pub(crate) pairings: Vec<Pairing>,
    /// Participant left out of the current round, if the roster is odd.
    pub(crate) bye: Option<ParticipantId>,
    pub(crate) pairing_index: usize,
    pub(crate) round: u32,
    pub(crate) total_rounds: u32,
    pub(crate) phase: SessionPhase,
    pub(crate) history: Vec<MatchRecord>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(RankerConfig::default())
    }
}

impl Session {
    /// Create a new session in NameEntry with no participants.
    pub fn new(config: RankerConfig) -> Self {
        Self {
            total_rounds: config.total_rounds,
            config,
            participants: Vec::new(),
            pairings: Vec::new(),
            bye: None,
            pairing_index: 0,
            round: 1,
            phase: SessionPhase::NameEntry,
            history: Vec::new(),
        }
    }

    pub fn config(&self) -> &RankerConfig {
        &self.config
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn total_rounds(&self) -> u32 {
        self.total_rounds
    }

    pub fn pairing_index(&self) -> usize {
        self.pairing_index
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn pairings(&self) -> &[Pairing] {
        &self.pairings
    }

    pub fn bye(&self) -> Option<ParticipantId> {
        self.bye
    }

    /// Decided matches since the roster was entered, oldest first.
    pub fn history(&self) -> &[MatchRecord] {
        &self.history
    }

    /// The pairing waiting for a result (None outside InRound).
    pub fn current_pairing(&self) -> Option<&Pairing> {
        if self.phase != SessionPhase::InRound {
            return None;
        }
        self.pairings.get(self.pairing_index)
    }

    pub fn participant(&self, id: ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    pub(crate) fn participant_index(&self, id: ParticipantId) -> Result<usize, SessionError> {
        self.participants
            .iter()
            .position(|p| p.id == id)
            .ok_or(SessionError::UnknownParticipant(id))
    }

    /// Participants sorted by rating, highest first (only once Finished).
    ///
    /// Equal ratings keep their current roster order, i.e. the order of the
    /// most recent shuffle.
    pub fn leaderboard(&self) -> Result<Vec<Participant>, SessionError> {
        if self.phase != SessionPhase::Finished {
            return Err(SessionError::InvalidState);
        }
        let mut ranked = self.participants.clone();
        ranked.sort_by(|a, b| b.rating.cmp(&a.rating));
        Ok(ranked)
    }

    /// Restart at round 1 with the same roster. Ratings, win/loss counters and
    /// history are kept, and the last generated pairings are played again,
    /// including the bye, which counts as sat out once more.
    pub fn restart(&mut self) -> Result<(), SessionError> {
        self.rewind()?;
        if let Some(id) = self.bye {
            if let Some(p) = self.participants.iter_mut().find(|p| p.id == id) {
                p.record_bye();
            }
        }
        Ok(())
    }

    /// Back to round 1 of the current pairings without touching any counters.
    pub(crate) fn rewind(&mut self) -> Result<(), SessionError> {
        if self.phase == SessionPhase::NameEntry {
            return Err(SessionError::InvalidState);
        }
        self.round = 1;
        self.pairing_index = 0;
        self.phase = if self.pairings.is_empty() {
            SessionPhase::RoundComplete
        } else {
            SessionPhase::InRound
        };
        log::info!(
            "Session restarted with {} participant(s), {} round(s)",
            self.participants.len(),
            self.total_rounds
        );
        Ok(())
    }

    /// Throw away the roster and go back to name entry.
    pub fn return_to_name_entry(&mut self) {
        let config = self.config.clone();
        *self = Self::new(config);
    }
}
