//! Wire protocol for the Marubatsu game server.
//!
//! All messages are JSON text frames with a `type` discriminator.
//! Client-to-server events parse into the tagged [`ClientEvent`] enum;
//! anything that does not match one of its variants is malformed and
//! must be ignored by the server (no error message type exists in the
//! protocol).

use serde::{Deserialize, Serialize};

/// Client-to-server events.
///
/// Exactly three request kinds exist:
///
/// - `{"type":"join-room","roomId":"<string>"}`
/// - `{"type":"make-move","index":<integer 0-8>}`
/// - `{"type":"reset-game"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ClientEvent {
    /// Join (or lazily create) the named room.
    JoinRoom {
        #[serde(rename = "roomId")]
        room_id: String,
    },
    /// Place the sender's mark on the given cell.
    MakeMove { index: usize },
    /// Clear the board, keeping player assignments.
    ResetGame,
}

/// Discriminator for server-to-client messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MessageType {
    PlayerAssigned,
    GameState,
}

/// Sent only to the joining connection, immediately after a join.
///
/// `player` is `"X"`, `"O"`, or `null` when both slots are taken
/// (the connection joins as a spectator).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerAssignedMessage {
    pub r#type: MessageType,
    pub player: Option<String>,
}

/// Full room state, broadcast to every member after each event.
///
/// `board` always holds exactly 9 strings, each `""`, `"X"` or `"O"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStateMessage {
    pub r#type: MessageType,
    pub board: Vec<String>,
    #[serde(rename = "currentPlayer")]
    pub current_player: String,
    pub winner: Option<String>,
    #[serde(rename = "playerCount")]
    pub player_count: usize,
}
