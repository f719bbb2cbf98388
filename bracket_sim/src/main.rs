//! Double-elimination tournament simulator.
//!
//! Registers a field of players, creates a tournament through the
//! [`TournamentManager`] and plays it out with seeded random scores.

mod config;
mod logging;

use std::collections::HashMap;

use anyhow::{Error, bail};
use bracket_engine::{
    bracket::playable_matches,
    tournament::{TournamentConfig, TournamentDetails, TournamentManager, TournamentStatus},
};
use chrono::Utc;
use config::{CliOverrides, SimConfig};
use ctrlc::set_handler;
use log::info;
use pico_args::Arguments;
use rand::{Rng, SeedableRng, rngs::StdRng};

const HELP: &str = "\
Simulate a double-elimination tournament

USAGE:
  bracket_sim [OPTIONS]

OPTIONS:
  --players    N           Number of players, a power of two  [default: env SIM_PLAYERS or 8]
  --seed       S           RNG seed for reproducible runs     [default: env SIM_SEED or random]
  --max-score  M           Highest simulated score            [default: env SIM_MAX_SCORE or 21]
  --title      TITLE       Tournament title                   [default: env SIM_TITLE or \"Simulated Open\"]

FLAGS:
  --json                   Print the final bracket as JSON
  -h, --help               Print help information

ENVIRONMENT:
  RUST_LOG                 Log filter (e.g., debug, bracket_engine=debug)
  SIM_JSON                 Set to true to print the final bracket as JSON
  (A .env file in the working directory is loaded if present)
";

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let overrides = CliOverrides {
        players: pargs.opt_value_from_str("--players")?,
        seed: pargs.opt_value_from_str("--seed")?,
        max_score: pargs.opt_value_from_str("--max-score")?,
        title: pargs.opt_value_from_str("--title")?,
        json: pargs.contains("--json"),
    };

    let remaining = pargs.finish();
    if !remaining.is_empty() {
        bail!("Unexpected arguments: {remaining:?}");
    }

    // Catching signals for exit.
    set_handler(|| std::process::exit(130))?;

    logging::init();

    let config = SimConfig::from_env(overrides)?;
    config.validate()?;

    let details = simulate(&config).await?;

    let names: HashMap<&str, &str> = details
        .tournament
        .players
        .iter()
        .map(|p| (p.id.as_str(), p.display_name.as_str()))
        .collect();
    let champion = details
        .tournament
        .winner
        .as_deref()
        .and_then(|id| names.get(id).copied())
        .unwrap_or("unknown");

    if config.json {
        println!("{}", serde_json::to_string_pretty(&details)?);
    } else {
        println!("Champion of {}: {}", details.tournament.title, champion);
    }

    Ok(())
}

/// Play a whole tournament and return its final state
async fn simulate(config: &SimConfig) -> Result<TournamentDetails, Error> {
    let seed = config.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);

    info!(
        "Simulating {} with {} players (seed {})",
        config.title, config.players, seed
    );

    let manager = TournamentManager::in_memory();

    let mut player_ids = Vec::with_capacity(config.players);
    for i in 1..=config.players {
        let player = manager.create_player(&format!("Player {i:02}")).await?;
        player_ids.push(player.id);
    }

    let tournament = TournamentConfig::new(config.title.clone(), Utc::now().date_naive(), player_ids);
    let mut details = manager.create_tournament(tournament).await?;
    let tournament_id = details.tournament.id.clone();

    let names: HashMap<String, String> = details
        .tournament
        .players
        .iter()
        .map(|p| (p.id.clone(), p.display_name.clone()))
        .collect();

    while details.tournament.status == TournamentStatus::Active {
        // Everything playable right now is independent of everything else
        let batch: Vec<String> = playable_matches(&details.tournament.matches)
            .into_iter()
            .map(|m| m.id.clone())
            .collect();
        if batch.is_empty() {
            bail!("Tournament {tournament_id} has no playable match but is not completed");
        }

        for match_id in batch {
            let (score_a, score_b) = random_score(&mut rng, config.max_score);
            details = manager
                .submit_score(&tournament_id, &match_id, score_a, score_b)
                .await?;

            let winner = details
                .tournament
                .matches
                .iter()
                .find(|m| m.id == match_id)
                .and_then(|m| m.winner.as_ref())
                .and_then(|id| names.get(id))
                .map_or("unknown", String::as_str);
            logging::log_match_result(&tournament_id, &match_id, score_a, score_b, winner);
        }

        logging::log_progress(
            &tournament_id,
            details.progress.played,
            details.progress.total,
            details.progress.percent,
        );
    }

    Ok(details)
}

/// Two distinct scores in `0..=max_score`
fn random_score(rng: &mut impl Rng, max_score: u32) -> (u32, u32) {
    let a = rng.random_range(0..=max_score);
    let mut b = rng.random_range(0..max_score);
    if b >= a {
        b += 1;
    }
    (a, b)
}
