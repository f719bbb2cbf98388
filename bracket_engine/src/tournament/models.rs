//! Tournament data models.

use crate::bracket::{Match, Player, PlayerId, Progress, compute_progress, sort_matches};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Tournament ID type
pub type TournamentId = String;

/// Longest accepted tournament title, in characters
pub const MAX_TITLE_LEN: usize = 100;

/// Minimum players in a double-elimination bracket
pub const MIN_PLAYERS: usize = 4;

/// Tournament state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TournamentStatus {
    /// Matches are being played
    Active,
    /// Grand final has a winner
    Completed,
}

impl std::fmt::Display for TournamentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentStatus::Active => write!(f, "active"),
            TournamentStatus::Completed => write!(f, "completed"),
        }
    }
}

/// Registered player, independent of any tournament
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredPlayer {
    pub id: PlayerId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Tournament creation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentConfig {
    /// Tournament title
    pub title: String,
    /// Venue
    pub location: Option<String>,
    /// Day the tournament is played
    pub date: NaiveDate,
    /// Registered player IDs in seed order (first is seed 1)
    pub player_ids: Vec<PlayerId>,
}

impl TournamentConfig {
    /// Create a configuration without a location
    pub fn new(title: impl Into<String>, date: NaiveDate, player_ids: Vec<PlayerId>) -> Self {
        Self {
            title: title.into(),
            location: None,
            date,
            player_ids,
        }
    }

    /// Set the venue
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err("Title is required".to_string());
        }

        if title.chars().count() > MAX_TITLE_LEN {
            return Err(format!("Title must be at most {MAX_TITLE_LEN} characters"));
        }

        let count = self.player_ids.len();
        if count < MIN_PLAYERS {
            return Err(format!("At least {MIN_PLAYERS} players are required"));
        }

        if !count.is_power_of_two() {
            return Err("Player count must be a power of two (4, 8, 16, 32...)".to_string());
        }

        let unique: HashSet<&PlayerId> = self.player_ids.iter().collect();
        if unique.len() != count {
            return Err("A player cannot be entered twice".to_string());
        }

        Ok(())
    }
}

/// Stored tournament with its bracket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub title: String,
    pub location: Option<String>,
    pub date: NaiveDate,
    pub status: TournamentStatus,
    /// Champion, once completed
    pub winner: Option<PlayerId>,
    /// Entrants with their seeds
    pub players: Vec<Player>,
    pub matches: Vec<Match>,
    pub created_at: DateTime<Utc>,
}

/// Tournament plus derived progress, as returned to readers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentDetails {
    #[serde(flatten)]
    pub tournament: Tournament,
    pub progress: Progress,
}

impl From<Tournament> for TournamentDetails {
    fn from(mut tournament: Tournament) -> Self {
        sort_matches(&mut tournament.matches);
        let progress = compute_progress(&tournament.matches);
        Self {
            tournament,
            progress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn ids(count: usize) -> Vec<PlayerId> {
        (1..=count).map(|i| format!("p{i}")).collect()
    }

    #[test]
    fn test_valid_config() {
        let config = TournamentConfig::new("Club Night", date(), ids(8)).with_location("Hall B");
        assert!(config.validate().is_ok());
        assert_eq!(config.location.as_deref(), Some("Hall B"));
    }

    #[test]
    fn test_config_rejects_blank_title() {
        let config = TournamentConfig::new("   ", date(), ids(4));
        assert_eq!(config.validate().unwrap_err(), "Title is required");
    }

    #[test]
    fn test_config_rejects_long_title() {
        let config = TournamentConfig::new("x".repeat(101), date(), ids(4));
        assert!(config.validate().is_err());

        let config = TournamentConfig::new("x".repeat(100), date(), ids(4));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_rejects_bad_player_counts() {
        assert!(TournamentConfig::new("T", date(), ids(2)).validate().is_err());
        assert!(TournamentConfig::new("T", date(), ids(6)).validate().is_err());
        assert!(TournamentConfig::new("T", date(), ids(16)).validate().is_ok());
    }

    #[test]
    fn test_config_rejects_duplicates() {
        let mut players = ids(4);
        players[3] = "p1".to_string();
        let err = TournamentConfig::new("T", date(), players).validate().unwrap_err();
        assert!(err.contains("twice"));
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&TournamentStatus::Completed).unwrap();
        assert_eq!(json, "\"completed\"");
        assert_eq!(TournamentStatus::Active.to_string(), "active");
    }
}
