//! HTTP API response DTOs.

use serde::Serialize;

/// One row of `GET /api/rooms`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomSummaryDto {
    pub id: String,
    #[serde(rename = "playerCount")]
    pub player_count: usize,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// Response of `GET /api/rooms/{room_id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomDetailDto {
    pub id: String,
    pub board: Vec<String>,
    #[serde(rename = "currentPlayer")]
    pub current_player: String,
    pub winner: Option<String>,
    #[serde(rename = "playerCount")]
    pub player_count: usize,
}
