//! Session business logic: rating updates, setup, pairing, and round progression.

mod pairing;
mod rating;
mod rounds;
mod setup;

pub use pairing::generate_pairings;
pub use rating::{
    compute_updated_ratings, compute_updated_ratings_with, expected_score, EloParams,
    DEFAULT_DIVISOR, DEFAULT_K_FACTOR,
};
pub use rounds::{advance_if_round_complete, decide_current_pairing, extend_session, record_result};
pub use setup::{parse_names, start_session};
