//! Grand final generation.

use super::{
    ids::grand_final_id,
    models::{BracketKind, Match},
};

/// Generate the single terminal match.
///
/// Slot A is filled by the main-bracket champion and slot B by the
/// loser-bracket champion, both through propagation.
pub fn generate_grand_final(tournament_id: &str) -> Vec<Match> {
    vec![Match::new(
        grand_final_id(tournament_id),
        BracketKind::GrandFinal,
        1,
        0,
    )]
}
