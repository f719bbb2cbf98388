/// Property-based tests for bracket generation and propagation using proptest
///
/// These tests play randomly scored tournaments of random size and check
/// that the bracket always terminates with a single champion.
use bracket_engine::bracket::{
    BracketError, BracketKind, Match, Player, apply_result, compute_progress, generate_bracket,
    playable_matches,
};
use proptest::prelude::*;
use std::collections::HashMap;

// Strategy to generate a valid bracket size exponent (4..=128 players)
fn exponent_strategy() -> impl Strategy<Value = u32> {
    2u32..=7
}

// Strategy to generate a long enough stream of non-tied scores
fn score_stream_strategy() -> impl Strategy<Value = Vec<(u32, u32)>> {
    prop::collection::vec((0u32..30, 0u32..30), 254)
        .prop_map(|scores| {
            scores
                .into_iter()
                .map(|(a, b)| if a == b { (a + 1, b) } else { (a, b) })
                .collect()
        })
}

fn create_players(count: u32) -> Vec<Player> {
    (1..=count)
        .map(|i| Player::new(format!("p{i}"), format!("Player {i}"), i))
        .collect()
}

// Play the bracket picking the `pick`-th playable match each time
fn play(
    mut matches: Vec<Match>,
    scores: &[(u32, u32)],
    picks: &[usize],
) -> (Vec<Match>, Vec<String>, usize) {
    let mut champions = Vec::new();
    let mut submitted = 0;

    for (i, &(a, b)) in scores.iter().enumerate() {
        let next = {
            let playable = playable_matches(&matches);
            if playable.is_empty() {
                break;
            }
            playable[picks[i % picks.len()] % playable.len()].id.clone()
        };

        let result = apply_result(&matches, &next, a, b).unwrap();
        submitted += 1;
        if let Some(champion) = result.winner.clone() {
            champions.push(champion);
        }
        matches = result.updated_matches;
    }

    (matches, champions, submitted)
}

proptest! {
    // Each case plays up to 254 results over a 254-match set
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_random_tournament_terminates(
        k in exponent_strategy(),
        scores in score_stream_strategy(),
        picks in prop::collection::vec(0usize..64, 1..16),
    ) {
        let n = 1u32 << k;
        let matches = generate_bracket(&create_players(n), "t").unwrap();
        let (matches, champions, submitted) = play(matches, &scores, &picks);

        // 2n - 2 results end the tournament, whatever the order
        prop_assert_eq!(submitted as u32, 2 * n - 2);
        prop_assert_eq!(champions.len(), 1);

        let progress = compute_progress(&matches);
        prop_assert_eq!(progress.played, progress.total);
        prop_assert_eq!(progress.percent, 100);

        let gf = matches.iter().find(|m| m.bracket == BracketKind::GrandFinal).unwrap();
        prop_assert_eq!(gf.winner.as_ref(), Some(&champions[0]));
    }

    #[test]
    fn test_no_player_loses_three_times(
        k in exponent_strategy(),
        scores in score_stream_strategy(),
        picks in prop::collection::vec(0usize..64, 1..16),
    ) {
        let n = 1u32 << k;
        let matches = generate_bracket(&create_players(n), "t").unwrap();
        let (matches, champions, _) = play(matches, &scores, &picks);

        let mut losses: HashMap<&str, u32> = HashMap::new();
        for m in &matches {
            if let Some(loser) = &m.loser {
                *losses.entry(loser.as_str()).or_default() += 1;
            }
        }

        prop_assert!(losses.values().all(|&count| count <= 2));
        prop_assert!(losses.get(champions[0].as_str()).copied().unwrap_or(0) <= 1);

        // Everyone but the champion is eliminated
        let eliminated = losses.keys().filter(|p| **p != champions[0]).count();
        prop_assert_eq!(eliminated as u32, n - 1);
    }

    #[test]
    fn test_locked_match_rejects_any_rescore(
        a in 0u32..50,
        b in 0u32..50,
        slot in 0usize..4,
    ) {
        let matches = generate_bracket(&create_players(8), "t").unwrap();
        let id = format!("t_main_r1_{slot}");
        let played = apply_result(&matches, &id, 21, 3).unwrap().updated_matches;

        let err = apply_result(&played, &id, a, b).unwrap_err();
        prop_assert_eq!(err, BracketError::MatchLocked(id));
    }

    #[test]
    fn test_apply_result_changes_at_most_three_matches(
        k in exponent_strategy(),
        slot in 0u32..64,
        a in 0u32..30,
        b in 0u32..30,
    ) {
        prop_assume!(a != b);
        let n = 1u32 << k;
        let id = format!("t_main_r1_{}", slot % (n / 2));

        let matches = generate_bracket(&create_players(n), "t").unwrap();
        let result = apply_result(&matches, &id, a, b).unwrap();

        let differing = matches
            .iter()
            .zip(&result.updated_matches)
            .filter(|(before, after)| before != after)
            .count();
        prop_assert_eq!(differing, 3);
        prop_assert_eq!(result.changed.len(), 3);
    }
}
