//! Tournament manager: creation, scoring and reset on top of a store.

use super::{
    errors::{TournamentError, TournamentResult},
    models::{
        RegisteredPlayer, Tournament, TournamentConfig, TournamentDetails, TournamentId,
        TournamentStatus,
    },
    store::{InMemoryStore, TournamentStore},
};
use crate::bracket::{self, Player, PlayerId};
use chrono::Utc;
use log::{info, warn};
use std::{collections::HashMap, sync::Arc};
use tokio::sync::Mutex;
use uuid::Uuid;

/// Longest accepted player name, in characters
pub const MAX_PLAYER_NAME_LEN: usize = 50;

/// Tournament manager
///
/// Score submissions and resets for the same tournament run one at a time:
/// each holds that tournament's lock from load to store. Different
/// tournaments proceed in parallel.
#[derive(Clone)]
pub struct TournamentManager {
    store: Arc<dyn TournamentStore>,

    /// Per-tournament write locks
    locks: Arc<Mutex<HashMap<TournamentId, Arc<Mutex<()>>>>>,
}

impl TournamentManager {
    /// Create a new tournament manager
    pub fn new(store: Arc<dyn TournamentStore>) -> Self {
        Self {
            store,
            locks: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Manager backed by an [`InMemoryStore`]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryStore::new()))
    }

    /// Register a new player
    pub async fn create_player(&self, name: &str) -> TournamentResult<RegisteredPlayer> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TournamentError::InvalidPlayerName(
                "Name is required".to_string(),
            ));
        }
        if name.chars().count() > MAX_PLAYER_NAME_LEN {
            return Err(TournamentError::InvalidPlayerName(format!(
                "Name must be at most {MAX_PLAYER_NAME_LEN} characters"
            )));
        }

        let player = RegisteredPlayer {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            created_at: Utc::now(),
        };
        self.store.insert_player(player.clone()).await?;

        Ok(player)
    }

    /// All registered players, sorted by name
    pub async fn list_players(&self) -> TournamentResult<Vec<RegisteredPlayer>> {
        let mut players = self.store.players().await?;
        players.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(players)
    }

    /// Create a tournament and generate its full bracket
    ///
    /// Players are seeded in the order of `config.player_ids`.
    pub async fn create_tournament(
        &self,
        config: TournamentConfig,
    ) -> TournamentResult<TournamentDetails> {
        config.validate().map_err(TournamentError::InvalidConfig)?;

        let registered: HashMap<PlayerId, RegisteredPlayer> = self
            .store
            .players()
            .await?
            .into_iter()
            .map(|p| (p.id.clone(), p))
            .collect();

        let players = config
            .player_ids
            .iter()
            .enumerate()
            .map(|(index, id)| {
                let player = registered
                    .get(id)
                    .ok_or_else(|| TournamentError::UnknownPlayer(id.clone()))?;
                Ok(Player::new(id.clone(), player.name.clone(), index as u32 + 1))
            })
            .collect::<TournamentResult<Vec<_>>>()?;

        let id = Uuid::new_v4().to_string();
        let matches = bracket::generate_bracket(&players, &id)?;

        let tournament = Tournament {
            id: id.clone(),
            title: config.title.trim().to_string(),
            location: config.location,
            date: config.date,
            status: TournamentStatus::Active,
            winner: None,
            players,
            matches,
            created_at: Utc::now(),
        };

        self.store.insert_tournament(tournament.clone()).await?;

        info!(
            "Created tournament {} ({}) with {} players and {} matches",
            id,
            tournament.title,
            tournament.players.len(),
            tournament.matches.len()
        );

        Ok(tournament.into())
    }

    /// Get a tournament with its progress
    pub async fn get_tournament(&self, id: &str) -> TournamentResult<TournamentDetails> {
        Ok(self.load(id).await?.into())
    }

    /// List all tournaments, newest first
    pub async fn list_tournaments(&self) -> TournamentResult<Vec<TournamentDetails>> {
        Ok(self
            .store
            .list_tournaments()
            .await?
            .into_iter()
            .map(TournamentDetails::from)
            .collect())
    }

    /// Enter a match result and propagate it
    ///
    /// Only the matches touched by propagation are written back, in the same
    /// store write as the status. When the grand final is decided the
    /// tournament is marked completed with its champion.
    pub async fn submit_score(
        &self,
        tournament_id: &str,
        match_id: &str,
        score_a: u32,
        score_b: u32,
    ) -> TournamentResult<TournamentDetails> {
        let lock = self.tournament_lock(tournament_id).await;
        let _guard = lock.lock().await;

        let tournament = self.load_locked(tournament_id).await?;

        let result = bracket::apply_result(&tournament.matches, match_id, score_a, score_b)
            .inspect_err(|e| {
                warn!(
                    "Rejected score {}-{} for match {} in tournament {}: {}",
                    score_a, score_b, match_id, tournament_id, e
                );
            })?;

        let changed = result.changed_matches().cloned().collect();
        let status = if result.tournament_complete {
            TournamentStatus::Completed
        } else {
            TournamentStatus::Active
        };
        self.store
            .save_result(tournament_id, changed, status, result.winner.clone())
            .await?;

        if result.tournament_complete {
            info!(
                "Tournament {} completed, champion {}",
                tournament_id,
                result.winner.as_deref().unwrap_or("unknown")
            );
        }

        Ok(self.load(tournament_id).await?.into())
    }

    /// Clear every result and return the bracket to its generated state
    pub async fn reset_tournament(&self, tournament_id: &str) -> TournamentResult<TournamentDetails> {
        let lock = self.tournament_lock(tournament_id).await;
        let _guard = lock.lock().await;

        let tournament = self.load_locked(tournament_id).await?;
        let matches = bracket::reset_matches(&tournament.matches);

        self.store
            .save_result(tournament_id, matches, TournamentStatus::Active, None)
            .await?;

        info!("Reset tournament {}", tournament_id);

        Ok(self.load(tournament_id).await?.into())
    }

    /// Delete a tournament
    pub async fn delete_tournament(&self, tournament_id: &str) -> TournamentResult<()> {
        let lock = self.tournament_lock(tournament_id).await;
        let _guard = lock.lock().await;

        let existed = self.store.delete_tournament(tournament_id).await?;
        self.locks.lock().await.remove(tournament_id);

        if !existed {
            return Err(TournamentError::NotFound(tournament_id.to_string()));
        }
        info!("Deleted tournament {}", tournament_id);

        Ok(())
    }

    async fn load(&self, id: &str) -> TournamentResult<Tournament> {
        self.store
            .load_tournament(id)
            .await?
            .ok_or_else(|| TournamentError::NotFound(id.to_string()))
    }

    /// Load while holding the tournament's lock; an unknown id drops its
    /// lock entry again
    async fn load_locked(&self, id: &str) -> TournamentResult<Tournament> {
        let loaded = self.load(id).await;
        if let Err(TournamentError::NotFound(_)) = &loaded {
            self.locks.lock().await.remove(id);
        }
        loaded
    }

    async fn tournament_lock(&self, id: &str) -> Arc<Mutex<()>> {
        self.locks
            .lock()
            .await
            .entry(id.to_string())
            .or_default()
            .clone()
    }
}
