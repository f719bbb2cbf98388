//! Main (winners) bracket generation.

use super::{
    errors::{BracketError, BracketResult},
    ids::match_id,
    layout::BracketSize,
    models::{BracketKind, Match, Player},
};
use log::debug;

/// Generate every main-bracket match with standard seeding.
///
/// Seed 1 plays seed `n`, seed 2 plays seed `n - 1`, and so on, so the top
/// seeds can only meet in later rounds. Only round 1 has players; every
/// match already carries its winner and loser destinations.
///
/// # Errors
///
/// Returns [`BracketError::InvalidPlayerCount`] unless the player count is a
/// power of two and at least 4.
pub fn generate_main_bracket(players: &[Player], tournament_id: &str) -> BracketResult<Vec<Match>> {
    let size = BracketSize::new(players.len()).ok_or(BracketError::InvalidPlayerCount {
        count: players.len(),
    })?;

    let mut seeded: Vec<&Player> = players.iter().collect();
    seeded.sort_by_key(|p| p.seed);

    let mut matches = Vec::with_capacity(size.main_match_count() as usize);

    for round in 1..=size.main_rounds() {
        for slot_index in 0..size.main_matches_in_round(round) {
            let mut m = Match::new(
                match_id(tournament_id, BracketKind::Main, round, slot_index),
                BracketKind::Main,
                round,
                slot_index,
            )
            .with_winner_target(size.main_winner_target(tournament_id, round, slot_index))
            .with_loser_target(size.main_loser_target(tournament_id, round, slot_index));

            if round == 1 {
                let high = seeded[slot_index as usize];
                let low = seeded[seeded.len() - 1 - slot_index as usize];
                m = m.with_players(high.id.clone(), low.id.clone());
            }

            matches.push(m);
        }
    }

    debug!(
        "Generated {} main bracket matches for tournament {}",
        matches.len(),
        tournament_id
    );

    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bracket::models::{Slot, SlotRef};

    fn players(count: u32) -> Vec<Player> {
        (1..=count)
            .map(|i| Player::new(format!("player-{i}"), format!("Player {i}"), i))
            .collect()
    }

    #[test]
    fn test_four_player_bracket() {
        let matches = generate_main_bracket(&players(4), "t1").unwrap();
        assert_eq!(matches.len(), 3);

        assert_eq!(matches[0].id, "t1_main_r1_0");
        assert_eq!(matches[0].player_a.as_deref(), Some("player-1"));
        assert_eq!(matches[0].player_b.as_deref(), Some("player-4"));

        assert_eq!(matches[1].id, "t1_main_r1_1");
        assert_eq!(matches[1].player_a.as_deref(), Some("player-2"));
        assert_eq!(matches[1].player_b.as_deref(), Some("player-3"));

        assert_eq!(matches[2].id, "t1_main_r2_0");
        assert!(matches[2].player_a.is_none());
        assert!(matches[2].player_b.is_none());
    }

    #[test]
    fn test_seeding_ignores_input_order() {
        let mut shuffled = players(8);
        shuffled.reverse();
        shuffled.swap(1, 5);

        let matches = generate_main_bracket(&shuffled, "t").unwrap();
        let round1: Vec<_> = matches.iter().filter(|m| m.round == 1).collect();
        assert_eq!(round1.len(), 4);

        for (i, m) in round1.iter().enumerate() {
            assert_eq!(m.player_a, Some(format!("player-{}", i + 1)));
            assert_eq!(m.player_b, Some(format!("player-{}", 8 - i)));
        }
    }

    #[test]
    fn test_winner_targets() {
        let matches = generate_main_bracket(&players(8), "t").unwrap();
        assert_eq!(matches.len(), 7);

        let r1_3 = matches.iter().find(|m| m.id == "t_main_r1_3").unwrap();
        assert_eq!(r1_3.winner_target, Some(SlotRef::new("t_main_r2_1", Slot::B)));

        let r2_0 = matches.iter().find(|m| m.id == "t_main_r2_0").unwrap();
        assert_eq!(r2_0.winner_target, Some(SlotRef::new("t_main_r3_0", Slot::A)));

        let final_match = matches.iter().find(|m| m.round == 3).unwrap();
        assert_eq!(
            final_match.winner_target,
            Some(SlotRef::new("t_grand_final_1", Slot::A))
        );
    }

    #[test]
    fn test_every_match_has_loser_target() {
        let matches = generate_main_bracket(&players(16), "t").unwrap();
        assert!(matches.iter().all(|m| m.loser_target.is_some()));
    }

    #[test]
    fn test_invalid_player_count() {
        for count in [0, 2, 3, 5, 6, 12] {
            let err = generate_main_bracket(&players(count), "t").unwrap_err();
            assert_eq!(err, BracketError::InvalidPlayerCount { count: count as usize });
        }
    }
}
