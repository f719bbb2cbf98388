//! Result propagation state machine.
//!
//! A match moves from *pending* (slots still empty) to *ready* (both players
//! known) to *locked* (score entered). Locking a match forwards its winner
//! along `winner_target` and, for main-bracket matches, its loser along
//! `loser_target`. The tournament is complete once the grand final locks.

use super::{
    errors::{BracketError, BracketResult},
    models::{BracketKind, Match, MatchId, PlayerId, PropagationResult, SlotRef},
};
use log::debug;

/// Enter a score for one match and propagate the outcome.
///
/// The input set is left untouched; the returned result owns a new match set
/// in which at most three matches differ: the scored match and its winner
/// and loser destinations.
///
/// # Errors
///
/// Checked in order:
/// 1. [`BracketError::MatchNotFound`] if `match_id` is not in `matches`
/// 2. [`BracketError::PlayersNotAssigned`] if either slot is empty
/// 3. [`BracketError::MatchLocked`] if the match already has a result
/// 4. [`BracketError::TiedScore`] if `score_a == score_b`
///
/// A destination missing from the set fails with `MatchNotFound`, and a
/// destination slot that is already filled fails with `SlotOccupied`.
pub fn apply_result(
    matches: &[Match],
    match_id: &str,
    score_a: u32,
    score_b: u32,
) -> BracketResult<PropagationResult> {
    let index = position(matches, match_id)?;
    let scored = &matches[index];

    let (Some(player_a), Some(player_b)) = (&scored.player_a, &scored.player_b) else {
        return Err(BracketError::PlayersNotAssigned(scored.id.clone()));
    };

    if scored.locked {
        return Err(BracketError::MatchLocked(scored.id.clone()));
    }

    if score_a == score_b {
        return Err(BracketError::TiedScore { score: score_a });
    }

    let (winner, loser) = if score_a > score_b {
        (player_a.clone(), player_b.clone())
    } else {
        (player_b.clone(), player_a.clone())
    };

    let winner_target = scored.winner_target.clone();
    let loser_target = match scored.bracket {
        BracketKind::Main => scored.loser_target.clone(),
        BracketKind::Loser | BracketKind::GrandFinal => None,
    };

    let mut updated = matches.to_vec();
    let mut changed = vec![scored.id.clone()];

    {
        let m = &mut updated[index];
        m.score = Some((score_a, score_b));
        m.winner = Some(winner.clone());
        m.loser = Some(loser.clone());
        m.locked = true;
    }

    if let Some(target) = winner_target {
        changed.push(seat(&mut updated, &target, winner.clone())?);
    }

    if let Some(target) = loser_target {
        changed.push(seat(&mut updated, &target, loser.clone())?);
    }

    debug!(
        "Match {} scored {}-{}: {} beat {}",
        match_id, score_a, score_b, winner, loser
    );

    let champion = updated
        .iter()
        .find(|m| m.bracket == BracketKind::GrandFinal)
        .and_then(|gf| gf.winner.clone());

    Ok(PropagationResult {
        updated_matches: updated,
        changed,
        tournament_complete: champion.is_some(),
        winner: champion,
    })
}

/// Return every match to its post-generation state.
///
/// Scores, winners, losers and locks are cleared, and so is every slot
/// outside main round 1. Routing pointers are kept.
pub fn reset_matches(matches: &[Match]) -> Vec<Match> {
    matches
        .iter()
        .map(|m| {
            let mut m = m.clone();
            m.score = None;
            m.winner = None;
            m.loser = None;
            m.locked = false;
            if !(m.bracket == BracketKind::Main && m.round == 1) {
                m.player_a = None;
                m.player_b = None;
            }
            m
        })
        .collect()
}

/// Matches that can take a score right now
pub fn playable_matches(matches: &[Match]) -> Vec<&Match> {
    let mut playable: Vec<&Match> = matches.iter().filter(|m| m.is_playable()).collect();
    playable.sort_by_key(|m| (m.bracket, m.round, m.slot_index));
    playable
}

fn position(matches: &[Match], match_id: &str) -> BracketResult<usize> {
    matches
        .iter()
        .position(|m| m.id == match_id)
        .ok_or_else(|| BracketError::MatchNotFound(match_id.to_string()))
}

/// Put `player` into the target slot, returning the id of the match written
fn seat(matches: &mut [Match], target: &SlotRef, player: PlayerId) -> BracketResult<MatchId> {
    let index = position(matches, &target.match_id)?;
    let slot = matches[index].player_mut(target.slot);

    if slot.is_some() {
        return Err(BracketError::SlotOccupied {
            match_id: target.match_id.clone(),
            slot: target.slot,
        });
    }

    *slot = Some(player);
    Ok(target.match_id.clone())
}
