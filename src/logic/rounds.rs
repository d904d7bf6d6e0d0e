//! Match results and round progression.

use crate::logic::pairing::generate_pairings;
use crate::logic::rating::compute_updated_ratings_with;
use crate::models::{
    MatchRecord, PairSide, ParticipantId, Session, SessionError, SessionPhase,
};
use chrono::Utc;
use rand::Rng;

/// Record one decided match: update both ratings by id and move to the next
/// pairing. When the last pairing of the round is decided the session becomes
/// RoundComplete.
///
/// Unknown ids and self-matches are rejected without changing anything.
pub fn record_result(
    session: &mut Session,
    winner: ParticipantId,
    loser: ParticipantId,
) -> Result<(), SessionError> {
    if session.phase != SessionPhase::InRound {
        return Err(SessionError::InvalidState);
    }
    let (winner_idx, loser_idx) = match (
        session.participant_index(winner),
        session.participant_index(loser),
    ) {
        (Ok(w), Ok(l)) => (w, l),
        (Err(e), _) | (_, Err(e)) => {
            log::warn!("Rejected result in round {}: {}", session.round, e);
            return Err(e);
        }
    };
    if winner_idx == loser_idx {
        log::warn!("Rejected self-match for {}", winner);
        return Err(SessionError::SelfMatch(winner));
    }

    let winner_before = session.participants[winner_idx].rating;
    let loser_before = session.participants[loser_idx].rating;
    let (winner_after, loser_after) =
        compute_updated_ratings_with(winner_before, loser_before, &session.config.elo);

    let w = &mut session.participants[winner_idx];
    w.rating = winner_after;
    w.add_win();
    let l = &mut session.participants[loser_idx];
    l.rating = loser_after;
    l.add_loss();

    session.history.push(MatchRecord {
        round: session.round,
        winner,
        loser,
        winner_before,
        winner_after,
        loser_before,
        loser_after,
        decided_at: Utc::now(),
    });
    log::debug!(
        "Round {}: {} -> {} beat {} -> {}",
        session.round,
        winner_before,
        winner_after,
        loser_before,
        loser_after
    );

    session.pairing_index += 1;
    if session.pairing_index >= session.pairings.len() {
        session.pairing_index = session.pairings.len();
        session.phase = SessionPhase::RoundComplete;
    }
    Ok(())
}

/// Record the result of the current pairing, with `side` as the winner.
pub fn decide_current_pairing(session: &mut Session, side: PairSide) -> Result<(), SessionError> {
    let pairing = *session.current_pairing().ok_or(SessionError::InvalidState)?;
    let (winner, loser) = pairing.outcome(side);
    record_result(session, winner, loser)
}

/// Move on once every pairing of the round is decided: pair the next round,
/// or finish the session after the last one. Does nothing while pairings are
/// still open or after the session is finished.
pub fn advance_if_round_complete<R: Rng + ?Sized>(
    session: &mut Session,
    rng: &mut R,
) -> Result<SessionPhase, SessionError> {
    match session.phase {
        SessionPhase::NameEntry => return Err(SessionError::InvalidState),
        SessionPhase::InRound | SessionPhase::Finished => return Ok(session.phase),
        SessionPhase::RoundComplete => {}
    }

    if session.round < session.total_rounds {
        session.round += 1;
        session.pairing_index = 0;
        log::info!("Starting round {} of {}", session.round, session.total_rounds);
        generate_pairings(session, rng)?;
    } else {
        session.phase = SessionPhase::Finished;
        log::info!(
            "Session finished after {} round(s), {} match(es) decided",
            session.total_rounds,
            session.history.len()
        );
    }
    Ok(session.phase)
}

/// Add `extra_rounds` to a finished session and replay from round 1 with the
/// same roster and accumulated ratings. Fresh pairings are drawn for the
/// first replayed round.
pub fn extend_session<R: Rng + ?Sized>(
    session: &mut Session,
    extra_rounds: u32,
    rng: &mut R,
) -> Result<(), SessionError> {
    if session.phase != SessionPhase::Finished {
        return Err(SessionError::InvalidState);
    }
    session.total_rounds = session
        .total_rounds
        .checked_add(extra_rounds)
        .ok_or(SessionError::TooManyRounds)?;
    session.rewind()?;
    generate_pairings(session, rng)
}
