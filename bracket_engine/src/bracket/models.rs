//! Bracket data models: players, matches and propagation output.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Player ID type
pub type PlayerId = String;

/// Match ID type
pub type MatchId = String;

/// Player entered into a bracket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Player ID
    pub id: PlayerId,
    /// Name shown in the bracket
    pub display_name: String,
    /// 1-based seed, only used for round-1 pairings
    pub seed: u32,
}

impl Player {
    /// Create a new player
    pub fn new(id: impl Into<PlayerId>, display_name: impl Into<String>, seed: u32) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            seed,
        }
    }
}

/// Which part of the double-elimination bracket a match belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BracketKind {
    Main,
    Loser,
    GrandFinal,
}

impl fmt::Display for BracketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BracketKind::Main => write!(f, "main"),
            BracketKind::Loser => write!(f, "loser"),
            BracketKind::GrandFinal => write!(f, "grand_final"),
        }
    }
}

/// One of the two positions in a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Slot {
    A,
    B,
}

impl Slot {
    /// Slot an even/odd slot index feeds into when two matches merge
    pub fn from_parity(slot_index: u32) -> Self {
        if slot_index % 2 == 0 { Slot::A } else { Slot::B }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::A => write!(f, "A"),
            Slot::B => write!(f, "B"),
        }
    }
}

/// Pointer to a slot of a downstream match
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotRef {
    pub match_id: MatchId,
    pub slot: Slot,
}

impl SlotRef {
    pub fn new(match_id: impl Into<MatchId>, slot: Slot) -> Self {
        Self {
            match_id: match_id.into(),
            slot,
        }
    }
}

/// A single match in the bracket graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// Unique key, stable for the tournament's lifetime
    pub id: MatchId,
    /// Bracket this match belongs to
    pub bracket: BracketKind,
    /// Bracket-relative round (1-indexed)
    pub round: u32,
    /// Position within the round (0-indexed), display ordering only
    pub slot_index: u32,
    pub player_a: Option<PlayerId>,
    pub player_b: Option<PlayerId>,
    /// (score A, score B) once a result is entered
    pub score: Option<(u32, u32)>,
    pub winner: Option<PlayerId>,
    pub loser: Option<PlayerId>,
    /// Set together with the winner; a locked match takes no more scores
    pub locked: bool,
    /// Where the winner goes. `None` only for the grand final.
    pub winner_target: Option<SlotRef>,
    /// Where the loser drops. Main bracket only.
    pub loser_target: Option<SlotRef>,
}

impl Match {
    /// Create an empty, unscored match
    pub fn new(id: impl Into<MatchId>, bracket: BracketKind, round: u32, slot_index: u32) -> Self {
        Self {
            id: id.into(),
            bracket,
            round,
            slot_index,
            player_a: None,
            player_b: None,
            score: None,
            winner: None,
            loser: None,
            locked: false,
            winner_target: None,
            loser_target: None,
        }
    }

    /// Seed both players
    pub fn with_players(mut self, player_a: PlayerId, player_b: PlayerId) -> Self {
        self.player_a = Some(player_a);
        self.player_b = Some(player_b);
        self
    }

    /// Set the winner destination
    pub fn with_winner_target(mut self, target: SlotRef) -> Self {
        self.winner_target = Some(target);
        self
    }

    /// Set the loser destination
    pub fn with_loser_target(mut self, target: SlotRef) -> Self {
        self.loser_target = Some(target);
        self
    }

    /// Player currently sitting in `slot`
    pub fn player(&self, slot: Slot) -> Option<&PlayerId> {
        match slot {
            Slot::A => self.player_a.as_ref(),
            Slot::B => self.player_b.as_ref(),
        }
    }

    pub(crate) fn player_mut(&mut self, slot: Slot) -> &mut Option<PlayerId> {
        match slot {
            Slot::A => &mut self.player_a,
            Slot::B => &mut self.player_b,
        }
    }

    /// Whether both players are known
    pub fn has_both_players(&self) -> bool {
        self.player_a.is_some() && self.player_b.is_some()
    }

    /// Whether a result can be entered right now
    pub fn is_playable(&self) -> bool {
        self.has_both_players() && !self.locked
    }

    /// Whether this is the tournament's terminal match
    pub fn is_terminal(&self) -> bool {
        self.winner_target.is_none()
    }
}

/// Loser drop-in route for one main-bracket match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoserRoute {
    pub from_match_id: MatchId,
    pub to_match_id: MatchId,
    pub to_slot: Slot,
}

/// Output of one [`apply_result`](super::propagation::apply_result) call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropagationResult {
    /// Full match set after the result was applied
    pub updated_matches: Vec<Match>,
    /// IDs of the matches that differ from the input set, scored match first
    pub changed: Vec<MatchId>,
    /// Whether the grand final now has a winner
    pub tournament_complete: bool,
    /// Tournament champion, set only when complete
    pub winner: Option<PlayerId>,
}

impl PropagationResult {
    /// Matches that need to be written back to storage
    pub fn changed_matches(&self) -> impl Iterator<Item = &Match> {
        self.updated_matches
            .iter()
            .filter(|m| self.changed.contains(&m.id))
    }
}

/// Played/total counts for a match set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub played: u32,
    pub total: u32,
    /// 0..=100
    pub percent: u32,
}
