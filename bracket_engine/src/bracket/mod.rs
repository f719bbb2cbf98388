//! Double-elimination bracket engine.
//!
//! This module provides:
//! - Deterministic match identifiers
//! - Main bracket generation with standard seeding
//! - Loser bracket generation and main → loser drop routing
//! - The grand final
//! - Result propagation and completion detection
//! - Progress reporting
//!
//! Everything here is a pure function over an explicit match set. Callers
//! that share a match set between tasks must serialize score submissions
//! per tournament themselves.
//!
//! ## Example
//!
//! ```
//! use bracket_engine::bracket::{Player, apply_result, compute_progress, generate_bracket};
//!
//! let players: Vec<Player> = (1..=4)
//!     .map(|i| Player::new(format!("p{i}"), format!("Player {i}"), i))
//!     .collect();
//!
//! let matches = generate_bracket(&players, "t1")?;
//! assert_eq!(matches.len(), 6);
//!
//! let result = apply_result(&matches, "t1_main_r1_0", 11, 9)?;
//! assert_eq!(compute_progress(&result.updated_matches).played, 1);
//! # Ok::<(), bracket_engine::bracket::BracketError>(())
//! ```

pub mod errors;
pub mod grand_final;
pub mod ids;
pub mod layout;
pub mod loser_bracket;
pub mod main_bracket;
pub mod models;
pub mod progress;
pub mod propagation;

pub use errors::{BracketError, BracketResult};
pub use grand_final::generate_grand_final;
pub use ids::{grand_final_id, match_id};
pub use layout::{BracketSize, LoserRoundKind};
pub use loser_bracket::{generate_loser_bracket, generate_loser_routing};
pub use main_bracket::generate_main_bracket;
pub use models::{
    BracketKind, LoserRoute, Match, MatchId, Player, PlayerId, Progress, PropagationResult, Slot,
    SlotRef,
};
pub use progress::compute_progress;
pub use propagation::{apply_result, playable_matches, reset_matches};

/// Generate the complete `2n - 2` match set: main bracket, loser bracket,
/// then the grand final.
///
/// # Errors
///
/// Returns [`BracketError::InvalidPlayerCount`] for an unsupported number of
/// players.
pub fn generate_bracket(players: &[Player], tournament_id: &str) -> BracketResult<Vec<Match>> {
    let mut matches = generate_main_bracket(players, tournament_id)?;
    matches.extend(generate_loser_bracket(players.len(), tournament_id)?);
    matches.extend(generate_grand_final(tournament_id));
    Ok(matches)
}

/// Sort for display: main, loser, grand final, then by round and slot
pub fn sort_matches(matches: &mut [Match]) {
    matches.sort_by_key(|m| (m.bracket, m.round, m.slot_index));
}
