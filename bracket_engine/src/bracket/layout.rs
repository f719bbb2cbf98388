//! Double-elimination topology for a `2^k` player bracket.
//!
//! For `n = 2^k` players the main bracket has `k` rounds with `n / 2^r`
//! matches in round `r`. The loser bracket has `2(k - 1)` rounds:
//!
//! - round 1 (opening): `n / 4` matches, fed pairwise by main round 1 losers
//! - round `2j` (drop-in): main round `j + 1` losers enter slot B, the
//!   winner of loser round `2j - 1` at the same index enters slot A
//! - round `2j + 1` (advancement): loser-bracket winners only, merged
//!   pairwise like the main bracket
//!
//! Each drop-in round has exactly as many matches as the main round feeding
//! it, so a main-bracket loser lands at the same slot index it left.

use super::{
    ids::{grand_final_id, match_id},
    models::{BracketKind, Slot, SlotRef},
};

/// Role of a loser-bracket round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoserRoundKind {
    /// Both slots filled by main round 1 losers
    Opening,
    /// Slot A from the previous loser round, slot B from the main bracket
    DropIn,
    /// Both slots filled by loser-bracket winners
    Advancement,
}

/// Validated bracket size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BracketSize {
    players: u32,
    main_rounds: u32,
}

impl BracketSize {
    /// `None` unless `players` is a power of two and at least 4
    pub fn new(players: usize) -> Option<Self> {
        let players = u32::try_from(players).ok()?;
        if players < 4 || !players.is_power_of_two() {
            return None;
        }

        Some(Self {
            players,
            main_rounds: players.trailing_zeros(),
        })
    }

    /// Number of players
    pub fn players(&self) -> u32 {
        self.players
    }

    /// Rounds in the main bracket, `log2(players)`
    pub fn main_rounds(&self) -> u32 {
        self.main_rounds
    }

    /// Rounds in the loser bracket, `2(k - 1)`
    pub fn loser_rounds(&self) -> u32 {
        2 * (self.main_rounds - 1)
    }

    pub fn main_matches_in_round(&self, round: u32) -> u32 {
        self.players >> round
    }

    /// Loser rounds come in pairs of equal size: `n/4, n/4, n/8, n/8, ...`
    pub fn loser_matches_in_round(&self, round: u32) -> u32 {
        self.players >> (round.div_ceil(2) + 1)
    }

    pub fn loser_round_kind(&self, round: u32) -> LoserRoundKind {
        if round == 1 {
            LoserRoundKind::Opening
        } else if round % 2 == 0 {
            LoserRoundKind::DropIn
        } else {
            LoserRoundKind::Advancement
        }
    }

    /// Total main-bracket matches, `n - 1`
    pub fn main_match_count(&self) -> u32 {
        self.players - 1
    }

    /// Total loser-bracket matches, `n - 2`
    pub fn loser_match_count(&self) -> u32 {
        self.players - 2
    }

    /// Where the winner of a main-bracket match goes
    pub fn main_winner_target(&self, tournament_id: &str, round: u32, slot_index: u32) -> SlotRef {
        if round == self.main_rounds {
            SlotRef::new(grand_final_id(tournament_id), Slot::A)
        } else {
            SlotRef::new(
                match_id(tournament_id, BracketKind::Main, round + 1, slot_index / 2),
                Slot::from_parity(slot_index),
            )
        }
    }

    /// Where the loser of a main-bracket match drops into the loser bracket
    pub fn main_loser_target(&self, tournament_id: &str, round: u32, slot_index: u32) -> SlotRef {
        if round == 1 {
            SlotRef::new(
                match_id(tournament_id, BracketKind::Loser, 1, slot_index / 2),
                Slot::from_parity(slot_index),
            )
        } else {
            SlotRef::new(
                match_id(tournament_id, BracketKind::Loser, 2 * (round - 1), slot_index),
                Slot::B,
            )
        }
    }

    /// Where the winner of a loser-bracket match goes
    pub fn loser_winner_target(&self, tournament_id: &str, round: u32, slot_index: u32) -> SlotRef {
        if round == self.loser_rounds() {
            return SlotRef::new(grand_final_id(tournament_id), Slot::B);
        }

        if round % 2 == 1 {
            // Odd rounds feed a drop-in round: this winner meets a fresh drop
            // at the same index
            SlotRef::new(
                match_id(tournament_id, BracketKind::Loser, round + 1, slot_index),
                Slot::A,
            )
        } else {
            SlotRef::new(
                match_id(tournament_id, BracketKind::Loser, round + 1, slot_index / 2),
                Slot::from_parity(slot_index),
            )
        }
    }
}
