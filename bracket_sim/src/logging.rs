//! Structured logging configuration.
//!
//! Records emitted through the `log` facade by the engine are picked up by
//! the same subscriber.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize structured logging
///
/// The level defaults to `info` and can be changed through `RUST_LOG`.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    tracing::debug!("Structured logging initialized");
}

/// Log a scored match with structured data
///
/// # Arguments
///
/// * `tournament_id` - Tournament the match belongs to
/// * `match_id` - Scored match
/// * `score_a` - Score of the player in slot A
/// * `score_b` - Score of the player in slot B
/// * `winner` - Display name of the winner
pub fn log_match_result(
    tournament_id: &str,
    match_id: &str,
    score_a: u32,
    score_b: u32,
    winner: &str,
) {
    tracing::info!(
        tournament_id = tournament_id,
        match_id = match_id,
        score_a = score_a,
        score_b = score_b,
        "{} wins {}-{}",
        winner,
        score_a.max(score_b),
        score_a.min(score_b)
    );
}

/// Log tournament progress after a batch of results
pub fn log_progress(tournament_id: &str, played: u32, total: u32, percent: u32) {
    tracing::info!(
        tournament_id = tournament_id,
        played = played,
        total = total,
        "Progress {}%",
        percent
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_match_result() {
        // Just ensure it doesn't panic
        log_match_result("t1", "t1_main_r1_0", 11, 9, "Player 01");
        log_match_result("t1", "t1_grand_final_1", 3, 21, "Player 02");
    }

    #[test]
    fn test_log_progress() {
        log_progress("t1", 0, 6, 0);
        log_progress("t1", 6, 6, 100);
    }
}
