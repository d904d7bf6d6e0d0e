//! Elo rating update for a single decided match.
//!
//! The scale divisor defaults to 10, not the 400 of standard Elo. With 10 a
//! gap of only 10 points already means 10:1 odds, so ratings swing fast. This
//! is kept on purpose for parity with existing sessions; set `ELO_DIVISOR=400`
//! for conventional behavior.

use crate::models::Rating;
use serde::{Deserialize, Serialize};

/// Maximum points exchanged per match.
pub const DEFAULT_K_FACTOR: f64 = 32.0;

/// Rating gap that corresponds to 10:1 odds.
pub const DEFAULT_DIVISOR: f64 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EloParams {
    pub k_factor: f64,
    pub divisor: f64,
}

impl Default for EloParams {
    fn default() -> Self {
        Self {
            k_factor: DEFAULT_K_FACTOR,
            divisor: DEFAULT_DIVISOR,
        }
    }
}

/// Probability that a player rated `rating` beats one rated `opponent`.
pub fn expected_score(rating: Rating, opponent: Rating, params: &EloParams) -> f64 {
    1.0 / (1.0 + 10f64.powf((opponent as f64 - rating as f64) / params.divisor))
}

/// New (winner, loser) ratings with the default K-factor and divisor.
pub fn compute_updated_ratings(winner: Rating, loser: Rating) -> (Rating, Rating) {
    compute_updated_ratings_with(winner, loser, &EloParams::default())
}

/// New (winner, loser) ratings.
///
/// Results are truncated toward zero, not rounded: 1015.9 becomes 1015 and
/// -3.9 becomes -3. Because of that the exchange is not exactly zero-sum; the
/// two deltas may differ by one point.
pub fn compute_updated_ratings_with(
    winner: Rating,
    loser: Rating,
    params: &EloParams,
) -> (Rating, Rating) {
    let expected_winner = expected_score(winner, loser, params);
    let expected_loser = 1.0 - expected_winner;

    let new_winner = winner as f64 + params.k_factor * (1.0 - expected_winner);
    let new_loser = loser as f64 + params.k_factor * (0.0 - expected_loser);

    (new_winner.trunc() as Rating, new_loser.trunc() as Rating)
}
