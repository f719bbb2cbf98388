//! Storage seam for tournaments, matches and players.
//!
//! The engine never touches storage. [`TournamentManager`](super::TournamentManager)
//! talks to a [`TournamentStore`], so a database-backed store can replace the
//! in-memory one without changing the manager.

use super::{
    errors::{TournamentError, TournamentResult},
    models::{RegisteredPlayer, Tournament, TournamentId, TournamentStatus},
};
use crate::bracket::{Match, PlayerId};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Trait for tournament persistence
#[async_trait]
pub trait TournamentStore: Send + Sync {
    /// Register a player
    async fn insert_player(&self, player: RegisteredPlayer) -> TournamentResult<()>;

    /// All registered players
    async fn players(&self) -> TournamentResult<Vec<RegisteredPlayer>>;

    /// Persist a newly created tournament with its full match set
    async fn insert_tournament(&self, tournament: Tournament) -> TournamentResult<()>;

    /// Load a tournament with its matches
    async fn load_tournament(&self, id: &str) -> TournamentResult<Option<Tournament>>;

    /// Overwrite the given matches (matched by id) and set status and
    /// champion, as one write
    ///
    /// Either everything is stored or nothing is.
    async fn save_result(
        &self,
        id: &str,
        matches: Vec<Match>,
        status: TournamentStatus,
        winner: Option<PlayerId>,
    ) -> TournamentResult<()>;

    /// Delete a tournament, returning whether it existed
    async fn delete_tournament(&self, id: &str) -> TournamentResult<bool>;

    /// All tournaments, newest first
    async fn list_tournaments(&self) -> TournamentResult<Vec<Tournament>>;
}

/// Store that keeps everything in process memory
#[derive(Default)]
pub struct InMemoryStore {
    players: RwLock<HashMap<PlayerId, RegisteredPlayer>>,
    tournaments: RwLock<HashMap<TournamentId, Tournament>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TournamentStore for InMemoryStore {
    async fn insert_player(&self, player: RegisteredPlayer) -> TournamentResult<()> {
        self.players.write().await.insert(player.id.clone(), player);
        Ok(())
    }

    async fn players(&self) -> TournamentResult<Vec<RegisteredPlayer>> {
        Ok(self.players.read().await.values().cloned().collect())
    }

    async fn insert_tournament(&self, tournament: Tournament) -> TournamentResult<()> {
        let mut tournaments = self.tournaments.write().await;
        if tournaments.contains_key(&tournament.id) {
            return Err(TournamentError::Storage(format!(
                "tournament {} already exists",
                tournament.id
            )));
        }
        tournaments.insert(tournament.id.clone(), tournament);
        Ok(())
    }

    async fn load_tournament(&self, id: &str) -> TournamentResult<Option<Tournament>> {
        Ok(self.tournaments.read().await.get(id).cloned())
    }

    async fn save_result(
        &self,
        id: &str,
        matches: Vec<Match>,
        status: TournamentStatus,
        winner: Option<PlayerId>,
    ) -> TournamentResult<()> {
        let mut tournaments = self.tournaments.write().await;
        let tournament = tournaments
            .get_mut(id)
            .ok_or_else(|| TournamentError::NotFound(id.to_string()))?;

        // Check every id first so a bad batch writes nothing
        let mut positions = Vec::with_capacity(matches.len());
        for m in &matches {
            let index = tournament
                .matches
                .iter()
                .position(|existing| existing.id == m.id)
                .ok_or_else(|| {
                    TournamentError::Storage(format!("match {} is not part of {}", m.id, id))
                })?;
            positions.push(index);
        }

        for (index, m) in positions.into_iter().zip(matches) {
            tournament.matches[index] = m;
        }
        tournament.status = status;
        tournament.winner = winner;

        Ok(())
    }

    async fn delete_tournament(&self, id: &str) -> TournamentResult<bool> {
        Ok(self.tournaments.write().await.remove(id).is_some())
    }

    async fn list_tournaments(&self) -> TournamentResult<Vec<Tournament>> {
        let mut tournaments: Vec<Tournament> =
            self.tournaments.read().await.values().cloned().collect();
        tournaments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(tournaments)
    }
}
