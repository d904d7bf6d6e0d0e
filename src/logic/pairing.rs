//! Round pairing: shuffle the roster and split it into one-on-one matches.

use crate::models::{Pairing, Session, SessionError, SessionPhase};
use rand::seq::SliceRandom;
use rand::Rng;

/// Generate pairings for the current round.
///
/// 1. Shuffle the roster (uniform permutation from `rng`).
/// 2. Pair neighbours: positions 0-1, 2-3, ...
/// 3. With an odd roster the last participant gets a bye (no rating change).
///
/// Resets the pairing index. If nobody could be paired (single participant)
/// the round is immediately complete.
pub fn generate_pairings<R: Rng + ?Sized>(
    session: &mut Session,
    rng: &mut R,
) -> Result<(), SessionError> {
    if !matches!(session.phase, SessionPhase::InRound | SessionPhase::RoundComplete) {
        return Err(SessionError::InvalidState);
    }

    session.participants.shuffle(rng);

    session.pairings = session
        .participants
        .chunks_exact(2)
        .map(|chunk| Pairing::new(chunk[0].id, chunk[1].id))
        .collect();

    session.bye = match session.participants.chunks_exact(2).remainder() {
        [left_out] => Some(left_out.id),
        _ => None,
    };
    if let Some(id) = session.bye {
        if let Some(p) = session.participants.iter_mut().find(|p| p.id == id) {
            p.record_bye();
        }
    }

    session.pairing_index = 0;
    session.phase = if session.pairings.is_empty() {
        SessionPhase::RoundComplete
    } else {
        SessionPhase::InRound
    };

    log::debug!(
        "Round {}: {} pairing(s), bye: {:?}",
        session.round,
        session.pairings.len(),
        session.bye
    );
    Ok(())
}
