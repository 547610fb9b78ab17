//! Room directory interface.
//!
//! The domain layer defines the data-access interface it needs; the
//! infrastructure layer provides the concrete implementation (dependency
//! inversion). The usecase layer depends only on this trait.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use super::error::{MoveError, RepositoryError};
use super::game::GameState;
use super::value_object::{ClientId, Mark, RoomId};

/// Outcome of a move request against an existing room.
///
/// A rejected move leaves the game untouched but still yields the
/// (unchanged) snapshot: the session handler broadcasts room state
/// whether or not the move was accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Snapshot of the game after the request was handled.
    pub state: GameState,
    /// Why the move was a no-op, if it was rejected.
    pub rejected: Option<MoveError>,
}

/// Summary of one room, for the HTTP listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomSummary {
    pub id: RoomId,
    pub player_count: usize,
    /// Unix timestamp in UTC (milliseconds) of lazy room creation.
    pub created_at: i64,
}

/// Directory of rooms, each holding exactly one game.
///
/// Rooms are created lazily on first join and never evicted; a room
/// whose last member left persists empty in memory.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Join `client_id` to `room_id`, creating the room (with a fresh
    /// game) if it does not exist yet. Returns the granted mark, if
    /// any, and the post-join snapshot. Never fails.
    async fn join_room(&self, room_id: RoomId, client_id: ClientId)
    -> (Option<Mark>, GameState);

    /// Apply a move in an existing room. `RoomNotFound` if the room
    /// does not exist; this operation never creates rooms implicitly.
    async fn apply_move(
        &self,
        room_id: &RoomId,
        client_id: &ClientId,
        index: usize,
    ) -> Result<MoveOutcome, RepositoryError>;

    /// Reset an existing room's game, preserving player assignments.
    async fn reset_game(&self, room_id: &RoomId) -> Result<GameState, RepositoryError>;

    /// Remove a client's player slot from an existing room.
    async fn remove_player(
        &self,
        room_id: &RoomId,
        client_id: &ClientId,
    ) -> Result<GameState, RepositoryError>;

    /// Snapshot of an existing room's game.
    async fn get_game(&self, room_id: &RoomId) -> Option<GameState>;

    /// Summaries of every room in the directory.
    async fn list_rooms(&self) -> Vec<RoomSummary>;
}
