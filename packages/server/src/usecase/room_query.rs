//! UseCase: read-only room queries for the HTTP API.

use std::sync::Arc;

use crate::domain::{GameState, RoomId, RoomRepository, RoomSummary};

/// Read-only view over the room directory.
pub struct RoomQueryUseCase {
    repository: Arc<dyn RoomRepository>,
}

impl RoomQueryUseCase {
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// Summaries of every room, sorted by room id.
    pub async fn list_rooms(&self) -> Vec<RoomSummary> {
        self.repository.list_rooms().await
    }

    /// Snapshot of one room's game, if the room exists.
    pub async fn room_detail(&self, room_id: &RoomId) -> Option<GameState> {
        self.repository.get_game(room_id).await
    }
}
