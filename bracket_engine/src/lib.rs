//! # Bracket Engine
//!
//! Double-elimination tournament brackets for power-of-two fields.
//!
//! The engine builds the full match graph up front (main bracket, loser
//! bracket and a single grand final) and then advances players through it
//! one result at a time.
//!
//! ## Architecture
//!
//! A tournament with `n` players has exactly `2n - 2` matches:
//!
//! - **Main bracket**: `n - 1` matches, seeded 1 vs `n`, 2 vs `n - 1`, ...
//! - **Loser bracket**: `n - 2` matches in `2(log2 n - 1)` rounds, fed by
//!   main-bracket losers
//! - **Grand final**: main-bracket champion vs loser-bracket champion
//!
//! Every match stores where its winner goes and, in the main bracket, where
//! its loser drops. Scoring a match locks it and writes both players forward.
//!
//! ## Core Modules
//!
//! - [`bracket`]: generation, propagation and progress, all pure functions
//! - [`tournament`]: player registry, storage seam and a manager that
//!   serializes score submissions per tournament
//!
//! ## Example
//!
//! ```
//! use bracket_engine::{Player, apply_result, generate_bracket};
//!
//! let players: Vec<Player> = (1..=8)
//!     .map(|i| Player::new(format!("p{i}"), format!("Player {i}"), i))
//!     .collect();
//!
//! let matches = generate_bracket(&players, "spring")?;
//! let result = apply_result(&matches, "spring_main_r1_0", 3, 1)?;
//! assert!(!result.tournament_complete);
//! # Ok::<(), bracket_engine::BracketError>(())
//! ```

/// Bracket generation, result propagation and progress.
pub mod bracket;
pub use bracket::{
    BracketError, BracketKind, BracketResult, LoserRoute, Match, MatchId, Player, PlayerId,
    Progress, PropagationResult, Slot, SlotRef, apply_result, compute_progress, generate_bracket,
    generate_grand_final, generate_loser_bracket, generate_loser_routing, generate_main_bracket,
};

/// Tournament records, storage and the scoring manager.
pub mod tournament;
pub use tournament::{TournamentError, TournamentManager, TournamentResult};
