//! Terminal front end: enter names, pick winners, read the leaderboard.
//! Run with: cargo run --bin ranker
//! Override constants with env: ELO_INITIAL_RATING, ELO_K_FACTOR, ELO_DIVISOR,
//! ELO_ROUNDS, ELO_EXTEND_ROUNDS. Log level via RUST_LOG (default info).

use elo_ranker::{
    advance_if_round_complete, decide_current_pairing, extend_session, save_leaderboard,
    start_session, ExportFormat, PairSide, Participant, RankerConfig, Session, SessionPhase,
};
use std::io::{self, BufRead, Write};

fn main() -> io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = RankerConfig::from_env();
    log::info!(
        "Starting ranker: initial rating {}, K {}, divisor {}, {} round(s)",
        config.initial_rating,
        config.elo.k_factor,
        config.elo.divisor,
        config.total_rounds
    );

    let mut session = Session::new(config);
    let mut rng = rand::thread_rng();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let prompt = match session.phase() {
            // Also drains empty rounds (a single participant) without prompting.
            SessionPhase::RoundComplete => {
                if let Err(e) = advance_if_round_complete(&mut session, &mut rng) {
                    println!("{}", e);
                }
                continue;
            }
            SessionPhase::NameEntry => "Enter names separated by commas:".to_string(),
            SessionPhase::InRound => match_prompt(&session),
            SessionPhase::Finished => {
                print_leaderboard(&session);
                format!(
                    "[r] restart  [m] play {} more rounds  [n] new names  [csv <path>]  [json <path>]  [q] quit",
                    session.config().extend_rounds
                )
            }
        };
        println!("{}", prompt);
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let input = line.trim();
        if input.eq_ignore_ascii_case("q") {
            break;
        }

        let result = match session.phase() {
            SessionPhase::NameEntry => start_session(&mut session, input, &mut rng),
            SessionPhase::InRound => match input {
                "1" => decide_current_pairing(&mut session, PairSide::First),
                "2" => decide_current_pairing(&mut session, PairSide::Second),
                _ => {
                    println!("Type 1 or 2 to pick the winner");
                    Ok(())
                }
            },
            SessionPhase::Finished => {
                handle_finished_command(&mut session, input, &mut rng);
                Ok(())
            }
            SessionPhase::RoundComplete => Ok(()),
        };
        if let Err(e) = result {
            println!("{}", e);
        }
    }

    Ok(())
}

fn handle_finished_command(
    session: &mut Session,
    input: &str,
    rng: &mut rand::rngs::ThreadRng,
) {
    let (command, arg) = match input.split_once(char::is_whitespace) {
        Some((c, a)) => (c, a.trim()),
        None => (input, ""),
    };
    let outcome = match command {
        "r" => session.restart(),
        "m" => {
            let extra = session.config().extend_rounds;
            extend_session(session, extra, rng)
        }
        "n" => {
            session.return_to_name_entry();
            Ok(())
        }
        "csv" if !arg.is_empty() => {
            export(session, ExportFormat::Csv, arg);
            Ok(())
        }
        "json" if !arg.is_empty() => {
            export(session, ExportFormat::Json, arg);
            Ok(())
        }
        _ => {
            println!("Unknown command");
            Ok(())
        }
    };
    if let Err(e) = outcome {
        println!("{}", e);
    }
}

/// Failures are reported and the session carries on.
fn export(session: &Session, format: ExportFormat, path: &str) {
    let leaderboard = match session.leaderboard() {
        Ok(l) => l,
        Err(e) => {
            println!("{}", e);
            return;
        }
    };
    match save_leaderboard(path, format, &leaderboard) {
        Ok(()) => {
            log::info!("Wrote {:?} leaderboard to {}", format, path);
            println!("Saved {}", path);
        }
        Err(e) => {
            log::warn!("Could not write {}: {}", path, e);
            println!("Could not write {}: {}", path, e);
        }
    }
}

fn match_prompt(session: &Session) -> String {
    let name = |id| {
        session
            .participant(id)
            .map(|p: &Participant| format!("{} ({})", p.name, p.rating))
            .unwrap_or_default()
    };
    let mut out = format!("Round {} of {}", session.round(), session.total_rounds());
    if let Some(id) = session.bye() {
        out.push_str(&format!("  (sitting out: {})", name(id)));
    }
    if let Some(pairing) = session.current_pairing() {
        out.push_str(&format!(
            "\n  [1] {}\n  [2] {}",
            name(pairing.first),
            name(pairing.second)
        ));
    }
    out
}

fn print_leaderboard(session: &Session) {
    let Ok(leaderboard) = session.leaderboard() else {
        return;
    };
    println!("\nFinal Elo Leaderboard");
    println!("{:<4} {:<24} {:>8} {:>5} {:>5}", "#", "Name", "Rating", "W", "L");
    println!("{}", "-".repeat(50));
    for (i, p) in leaderboard.iter().enumerate() {
        println!(
            "{:<4} {:<24} {:>8} {:>5} {:>5}",
            i + 1,
            p.name,
            p.rating,
            p.wins,
            p.losses
        );
    }
    println!();
}
