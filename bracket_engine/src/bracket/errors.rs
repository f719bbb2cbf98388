//! Bracket engine error types.

use super::models::{MatchId, Slot};
use thiserror::Error;

/// Errors raised by bracket generation and result propagation.
///
/// Every variant is a local validation failure. None of them are transient,
/// so callers should surface them as-is rather than retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BracketError {
    /// Player count is not a power of two or is below four
    #[error("Invalid player count {count}: must be a power of two and at least 4")]
    InvalidPlayerCount { count: usize },

    /// Bracket size cannot be laid out as a double-elimination bracket
    #[error("Unsupported bracket size {count}: must be a power of two and at least 4")]
    UnsupportedBracketSize { count: usize },

    /// Match id is not part of the match set
    #[error("Match not found: {0}")]
    MatchNotFound(MatchId),

    /// Match is still waiting on a feeding match
    #[error("Both players must be assigned before scoring match {0}")]
    PlayersNotAssigned(MatchId),

    /// Match already has a result
    #[error("Match {0} is locked")]
    MatchLocked(MatchId),

    /// Scores are equal
    #[error("Tied score {score}-{score} is not allowed")]
    TiedScore { score: u32 },

    /// Propagation would overwrite a player already sitting in a slot
    #[error("Slot {slot} of match {match_id} is already occupied")]
    SlotOccupied { match_id: MatchId, slot: Slot },

    /// A main-bracket match has no loser destination
    #[error("Malformed bracket: match {match_id} has no loser target")]
    MalformedBracket { match_id: MatchId },
}

impl BracketError {
    /// Message suitable for showing to the person who submitted the request
    pub fn client_message(&self) -> String {
        match self {
            BracketError::InvalidPlayerCount { .. } | BracketError::UnsupportedBracketSize { .. } => {
                "The number of players must be a power of two (4, 8, 16, 32...)".to_string()
            }
            BracketError::MatchNotFound(_) => "Match not found".to_string(),
            BracketError::PlayersNotAssigned(_) => {
                "Both players must be known before a score can be entered".to_string()
            }
            BracketError::MatchLocked(_) => "This match already has a result".to_string(),
            BracketError::TiedScore { .. } => "Scores cannot be equal".to_string(),
            // Corrupted bracket state, nothing the submitter can fix
            BracketError::SlotOccupied { .. } | BracketError::MalformedBracket { .. } => {
                "Internal bracket error".to_string()
            }
        }
    }
}

/// Result type for bracket operations
pub type BracketResult<T> = Result<T, BracketError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_names_match() {
        let err = BracketError::MatchLocked("t1_main_r1_0".to_string());
        assert_eq!(err.to_string(), "Match t1_main_r1_0 is locked");
    }

    #[test]
    fn test_client_message_hides_internal_state() {
        let err = BracketError::SlotOccupied {
            match_id: "t1_loser_r1_0".to_string(),
            slot: Slot::A,
        };
        let msg = err.client_message();
        assert!(!msg.contains("t1_loser_r1_0"));
        assert_eq!(msg, "Internal bracket error");
    }

    #[test]
    fn test_tied_score_display() {
        let err = BracketError::TiedScore { score: 10 };
        assert_eq!(err.to_string(), "Tied score 10-10 is not allowed");
        assert_eq!(err.client_message(), "Scores cannot be equal");
    }
}
