//! Tournament module: the collaborators around the bracket engine.
//!
//! This module provides:
//! - Player registration
//! - Tournament creation with full bracket generation
//! - Score submission, serialized per tournament
//! - Reset, listing and deletion
//!
//! ## Example
//!
//! ```
//! use bracket_engine::tournament::{TournamentConfig, TournamentManager, TournamentStatus};
//! use chrono::NaiveDate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let manager = TournamentManager::in_memory();
//!
//!     let mut ids = Vec::new();
//!     for name in ["Ada", "Brook", "Cyd", "Dana"] {
//!         ids.push(manager.create_player(name).await?.id);
//!     }
//!
//!     let date = NaiveDate::from_ymd_opt(2026, 10, 16).ok_or("bad date")?;
//!     let details = manager
//!         .create_tournament(TournamentConfig::new("Club Night", date, ids))
//!         .await?;
//!
//!     let id = details.tournament.id.clone();
//!     let first = format!("{id}_main_r1_0");
//!     let details = manager.submit_score(&id, &first, 11, 9).await?;
//!
//!     assert_eq!(details.tournament.status, TournamentStatus::Active);
//!     assert_eq!(details.progress.played, 1);
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod manager;
pub mod models;
pub mod store;

pub use errors::{TournamentError, TournamentResult};
pub use manager::TournamentManager;
pub use models::{
    RegisteredPlayer, Tournament, TournamentConfig, TournamentDetails, TournamentId,
    TournamentStatus,
};
pub use store::{InMemoryStore, TournamentStore};
