//! Casual Elo ranker: library with models, rating logic, and session flow.

pub mod config;
pub mod export;
pub mod logic;
pub mod models;

pub use config::RankerConfig;
pub use export::{save_leaderboard, write_leaderboard_csv, write_leaderboard_json, ExportFormat};
pub use logic::{
    advance_if_round_complete, compute_updated_ratings, compute_updated_ratings_with,
    decide_current_pairing, expected_score, extend_session, generate_pairings, parse_names,
    record_result, start_session, EloParams,
};
pub use models::{
    MatchRecord, PairSide, Pairing, Participant, ParticipantId, Rating, Session, SessionError,
    SessionPhase,
};
