//! In-memory room directory.
//!
//! The directory map and each room's game are guarded separately: a
//! room operation holds the directory lock only long enough to resolve
//! the room's own mutex, so unrelated rooms never contend with each
//! other.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use marubatsu_shared::time::Clock;

use crate::domain::{
    ClientId, GameState, Mark, MoveOutcome, RepositoryError, RoomId, RoomRepository, RoomSummary,
};

struct RoomEntry {
    game: Arc<Mutex<GameState>>,
    created_at: i64,
}

/// In-memory `RoomRepository` implementation.
///
/// Rooms are created lazily on first join and never evicted.
pub struct InMemoryRoomRepository {
    rooms: Mutex<HashMap<RoomId, RoomEntry>>,
    clock: Arc<dyn Clock>,
}

impl InMemoryRoomRepository {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            rooms: Mutex::new(HashMap::new()),
            clock,
        }
    }

    /// Resolve an existing room's game handle without creating one.
    async fn resolve(&self, room_id: &RoomId) -> Result<Arc<Mutex<GameState>>, RepositoryError> {
        let rooms = self.rooms.lock().await;
        rooms
            .get(room_id)
            .map(|entry| entry.game.clone())
            .ok_or_else(|| RepositoryError::RoomNotFound(room_id.as_str().to_string()))
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn join_room(
        &self,
        room_id: RoomId,
        client_id: ClientId,
    ) -> (Option<Mark>, GameState) {
        let game = {
            let mut rooms = self.rooms.lock().await;
            let entry = rooms.entry(room_id.clone()).or_insert_with(|| {
                tracing::info!("Room '{}' created", room_id.as_str());
                RoomEntry {
                    game: Arc::new(Mutex::new(GameState::new())),
                    created_at: self.clock.now_millis(),
                }
            });
            entry.game.clone()
        };

        let mut game = game.lock().await;
        let mark = game.assign_mark(client_id);
        (mark, game.clone())
    }

    async fn apply_move(
        &self,
        room_id: &RoomId,
        client_id: &ClientId,
        index: usize,
    ) -> Result<MoveOutcome, RepositoryError> {
        let game = self.resolve(room_id).await?;
        let mut game = game.lock().await;
        let rejected = game.apply_move(client_id, index).err();
        Ok(MoveOutcome {
            state: game.clone(),
            rejected,
        })
    }

    async fn reset_game(&self, room_id: &RoomId) -> Result<GameState, RepositoryError> {
        let game = self.resolve(room_id).await?;
        let mut game = game.lock().await;
        game.reset();
        Ok(game.clone())
    }

    async fn remove_player(
        &self,
        room_id: &RoomId,
        client_id: &ClientId,
    ) -> Result<GameState, RepositoryError> {
        let game = self.resolve(room_id).await?;
        let mut game = game.lock().await;
        game.remove_player(client_id);
        Ok(game.clone())
    }

    async fn get_game(&self, room_id: &RoomId) -> Option<GameState> {
        let game = self.resolve(room_id).await.ok()?;
        let game = game.lock().await;
        Some(game.clone())
    }

    async fn list_rooms(&self) -> Vec<RoomSummary> {
        let entries: Vec<(RoomId, Arc<Mutex<GameState>>, i64)> = {
            let rooms = self.rooms.lock().await;
            rooms
                .iter()
                .map(|(id, entry)| (id.clone(), entry.game.clone(), entry.created_at))
                .collect()
        };

        let mut summaries = Vec::with_capacity(entries.len());
        for (id, game, created_at) in entries {
            let game = game.lock().await;
            summaries.push(RoomSummary {
                id,
                player_count: game.player_count(),
                created_at,
            });
        }
        // Sort by room id for consistent ordering
        summaries.sort_by(|a, b| a.id.as_str().cmp(b.id.as_str()));
        summaries
    }
}
