//! Plays a batch of games in the terminal, with a random mover standing in
//! for the human.
//!
//! ```text
//! RUST_LOG=noughts=info cargo run -p noughts --example self_play [config.toml]
//! ```

use anyhow::{Context, Result};
use noughts::{GameConfig, Phase, Session, available_moves};
use rand::Rng;
use tracing::info;
use tracing_subscriber::EnvFilter;

const GAMES: u32 = 10;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => GameConfig::from_file(&path)
            .with_context(|| format!("loading config from {}", path))?,
        None => GameConfig::default(),
    };
    let mut rng = config.rng();
    info!(seed = rng.seed(), difficulty = %config.difficulty(), "Starting self-play");

    let mut session = Session::new(config);
    for game in 1..=GAMES {
        loop {
            match session.phase() {
                Phase::HumanToMove => {
                    let moves = available_moves(session.board());
                    let index = moves[rng.random_range(0..moves.len())];
                    session.play_human(index)?;
                }
                Phase::ComputerToMove => {
                    session.play_computer(&mut rng)?;
                }
                Phase::Terminal(outcome) => {
                    println!("Game {}: {}\n{}\n", game, outcome, session.board());
                    break;
                }
            }
        }
        session.reset();
    }

    let tally = session.tally();
    info!(
        human_wins = tally.human_wins,
        computer_wins = tally.computer_wins,
        draws = tally.draws,
        "Self-play finished"
    );
    Ok(())
}
