//! Loser bracket generation and the main → loser routing table.
//!
//! See [`layout`](super::layout) for the round structure.

use super::{
    errors::{BracketError, BracketResult},
    ids::match_id,
    layout::BracketSize,
    models::{BracketKind, LoserRoute, Match},
};
use log::debug;

/// Generate the `n - 2` loser-bracket matches for an `n` player bracket.
///
/// All slots start empty. Winner targets are wired to the next loser round,
/// and the last loser match feeds slot B of the grand final.
///
/// # Errors
///
/// Returns [`BracketError::UnsupportedBracketSize`] unless `player_count` is
/// a power of two and at least 4.
pub fn generate_loser_bracket(player_count: usize, tournament_id: &str) -> BracketResult<Vec<Match>> {
    let size = BracketSize::new(player_count).ok_or(BracketError::UnsupportedBracketSize {
        count: player_count,
    })?;

    let mut matches = Vec::with_capacity(size.loser_match_count() as usize);

    for round in 1..=size.loser_rounds() {
        for slot_index in 0..size.loser_matches_in_round(round) {
            matches.push(
                Match::new(
                    match_id(tournament_id, BracketKind::Loser, round, slot_index),
                    BracketKind::Loser,
                    round,
                    slot_index,
                )
                .with_winner_target(size.loser_winner_target(tournament_id, round, slot_index)),
            );
        }
    }

    debug!(
        "Generated {} loser bracket matches in {} rounds for tournament {}",
        matches.len(),
        size.loser_rounds(),
        tournament_id
    );

    Ok(matches)
}

/// Build the loser drop-in table for a generated main bracket.
///
/// Returns one route per main-bracket match, read from the loser targets set
/// at generation time. Non-main matches in the input are ignored.
///
/// # Errors
///
/// - [`BracketError::UnsupportedBracketSize`] if the main matches do not form
///   a `2^k` bracket with `k >= 2`
/// - [`BracketError::MalformedBracket`] if a main match has no loser target
pub fn generate_loser_routing(main_matches: &[Match]) -> BracketResult<Vec<LoserRoute>> {
    let main: Vec<&Match> = main_matches
        .iter()
        .filter(|m| m.bracket == BracketKind::Main)
        .collect();

    let player_count = main.iter().filter(|m| m.round == 1).count() * 2;
    let size = BracketSize::new(player_count)
        .filter(|size| size.main_match_count() as usize == main.len())
        .ok_or(BracketError::UnsupportedBracketSize {
            count: player_count,
        })?;

    let routes = main
        .into_iter()
        .map(|m| {
            let target = m
                .loser_target
                .as_ref()
                .ok_or_else(|| BracketError::MalformedBracket {
                    match_id: m.id.clone(),
                })?;
            Ok(LoserRoute {
                from_match_id: m.id.clone(),
                to_match_id: target.match_id.clone(),
                to_slot: target.slot,
            })
        })
        .collect::<BracketResult<Vec<_>>>()?;

    debug!(
        "Built {} loser routes for a {} player bracket",
        routes.len(),
        size.players()
    );

    Ok(routes)
}
