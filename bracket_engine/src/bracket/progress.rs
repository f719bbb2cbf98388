//! Tournament progress.

use super::models::{Match, Progress};

/// Count played matches and the rounded completion percentage.
///
/// A match counts as played once it has a winner. The percentage rounds half
/// up and is 0 for an empty set.
pub fn compute_progress(matches: &[Match]) -> Progress {
    let total = saturating_u32(matches.len());
    let played = saturating_u32(matches.iter().filter(|m| m.winner.is_some()).count());

    let percent = if total == 0 {
        0
    } else {
        // round(100 * played / total) in integer arithmetic
        ((200 * u64::from(played) + u64::from(total)) / (2 * u64::from(total))) as u32
    };

    Progress {
        played,
        total,
        percent,
    }
}

// Counts past u32::MAX clamp rather than wrap
fn saturating_u32(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bracket::models::BracketKind;

    fn set(total: usize, played: usize) -> Vec<Match> {
        (0..total)
            .map(|i| {
                let mut m = Match::new(format!("m{i}"), BracketKind::Main, 1, i as u32);
                if i < played {
                    m.winner = Some("p".to_string());
                    m.locked = true;
                }
                m
            })
            .collect()
    }

    #[test]
    fn test_empty_set() {
        assert_eq!(
            compute_progress(&[]),
            Progress {
                played: 0,
                total: 0,
                percent: 0
            }
        );
    }

    #[test]
    fn test_rounds_instead_of_truncating() {
        assert_eq!(
            compute_progress(&set(3, 1)),
            Progress {
                played: 1,
                total: 3,
                percent: 33
            }
        );
        assert_eq!(compute_progress(&set(3, 2)).percent, 67);
        assert_eq!(compute_progress(&set(8, 1)).percent, 13);
    }

    #[test]
    fn test_complete() {
        let progress = compute_progress(&set(6, 6));
        assert_eq!(progress.played, 6);
        assert_eq!(progress.percent, 100);
    }

    #[test]
    fn test_counts_clamp_instead_of_wrapping() {
        assert_eq!(saturating_u32(14), 14);
        assert_eq!(saturating_u32(usize::MAX), u32::MAX);
    }
}
