//! Leaderboard export as CSV or JSON.

use crate::models::{Participant, Rating};
use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// File format for [`save_leaderboard`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExportFormat {
    Csv,
    Json,
}

/// One leaderboard line; rank is 1-based in the given order.
#[derive(Debug, Serialize)]
struct LeaderboardRow<'a> {
    rank: usize,
    name: &'a str,
    rating: Rating,
    wins: u32,
    losses: u32,
    byes: u32,
}

fn rows(leaderboard: &[Participant]) -> impl Iterator<Item = LeaderboardRow<'_>> {
    leaderboard.iter().enumerate().map(|(i, p)| LeaderboardRow {
        rank: i + 1,
        name: &p.name,
        rating: p.rating,
        wins: p.wins,
        losses: p.losses,
        byes: p.byes,
    })
}

/// Write the leaderboard as CSV with a header row.
pub fn write_leaderboard_csv<W: Write>(writer: W, leaderboard: &[Participant]) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows(leaderboard) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write the leaderboard as a pretty-printed JSON array.
pub fn write_leaderboard_json<W: Write>(
    writer: W,
    leaderboard: &[Participant],
) -> serde_json::Result<()> {
    let rows: Vec<_> = rows(leaderboard).collect();
    serde_json::to_writer_pretty(writer, &rows)
}

/// Create (or truncate) `path` and write the leaderboard to it.
pub fn save_leaderboard(
    path: impl AsRef<Path>,
    format: ExportFormat,
    leaderboard: &[Participant],
) -> io::Result<()> {
    let file = File::create(path)?;
    match format {
        ExportFormat::Csv => write_leaderboard_csv(file, leaderboard).map_err(io::Error::other),
        ExportFormat::Json => write_leaderboard_json(file, leaderboard).map_err(io::Error::other),
    }
}
