//! Tournament error types.

use super::models::TournamentId;
use crate::bracket::{BracketError, PlayerId};
use thiserror::Error;

/// Tournament errors
#[derive(Debug, Error)]
pub enum TournamentError {
    /// Tournament not found
    #[error("Tournament not found: {0}")]
    NotFound(TournamentId),

    /// Creation request failed validation
    #[error("Invalid tournament configuration: {0}")]
    InvalidConfig(String),

    /// Player ID is not registered
    #[error("Unknown player: {0}")]
    UnknownPlayer(PlayerId),

    /// Player name failed validation
    #[error("Invalid player name: {0}")]
    InvalidPlayerName(String),

    /// Bracket generation or scoring rejected the request
    #[error(transparent)]
    Bracket(#[from] BracketError),

    /// Storage backend failure
    #[error("Storage error: {0}")]
    Storage(String),
}

impl TournamentError {
    /// Get a client-safe error message
    ///
    /// Storage errors and internal ids are not exposed.
    pub fn client_message(&self) -> String {
        match self {
            TournamentError::NotFound(_) => "Tournament not found".to_string(),
            TournamentError::UnknownPlayer(_) => "Some players do not exist".to_string(),
            TournamentError::Bracket(err) => err.client_message(),
            TournamentError::Storage(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        }
    }
}

/// Result type for tournament operations
pub type TournamentResult<T> = Result<T, TournamentError>;
