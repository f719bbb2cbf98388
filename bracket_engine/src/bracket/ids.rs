//! Deterministic match identifiers.
//!
//! Ids have the form `{tournament}_main_r{round}_{slot}` and
//! `{tournament}_loser_r{round}_{slot}`. The grand final is always
//! `{tournament}_grand_final_1`.

use super::models::{BracketKind, MatchId};

/// Build the id of a match.
///
/// Distinct `(bracket, round, slot_index)` triples never collide within one
/// tournament. `round` and `slot_index` are ignored for the grand final.
pub fn match_id(tournament_id: &str, bracket: BracketKind, round: u32, slot_index: u32) -> MatchId {
    match bracket {
        BracketKind::Main => format!("{tournament_id}_main_r{round}_{slot_index}"),
        BracketKind::Loser => format!("{tournament_id}_loser_r{round}_{slot_index}"),
        BracketKind::GrandFinal => grand_final_id(tournament_id),
    }
}

/// Id of the tournament's single grand final
pub fn grand_final_id(tournament_id: &str) -> MatchId {
    format!("{tournament_id}_grand_final_1")
}
