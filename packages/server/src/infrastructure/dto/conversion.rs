//! Conversion logic between domain state and wire/API DTOs.

use marubatsu_shared::protocol::{GameStateMessage, MessageType, PlayerAssignedMessage};
use marubatsu_shared::time::timestamp_to_rfc3339;

use crate::domain::{GameState, Mark, RoomId, RoomSummary};

use super::http::{RoomDetailDto, RoomSummaryDto};

fn board_to_strings(state: &GameState) -> Vec<String> {
    state
        .board
        .iter()
        .map(|cell| cell.map_or_else(String::new, |mark| mark.as_str().to_string()))
        .collect()
}

// ========================================
// Domain -> WebSocket wire messages
// ========================================

impl From<&GameState> for GameStateMessage {
    fn from(state: &GameState) -> Self {
        Self {
            r#type: MessageType::GameState,
            board: board_to_strings(state),
            current_player: state.current_player.as_str().to_string(),
            winner: state.winner.map(|mark| mark.as_str().to_string()),
            player_count: state.player_count(),
        }
    }
}

/// The direct reply to a joining connection.
pub fn player_assigned_message(mark: Option<Mark>) -> PlayerAssignedMessage {
    PlayerAssignedMessage {
        r#type: MessageType::PlayerAssigned,
        player: mark.map(|m| m.as_str().to_string()),
    }
}

// ========================================
// Domain -> HTTP DTOs
// ========================================

impl From<RoomSummary> for RoomSummaryDto {
    fn from(summary: RoomSummary) -> Self {
        Self {
            id: summary.id.into_string(),
            player_count: summary.player_count,
            created_at: timestamp_to_rfc3339(summary.created_at),
        }
    }
}

impl RoomDetailDto {
    pub fn from_game(room_id: &RoomId, state: &GameState) -> Self {
        Self {
            id: room_id.as_str().to_string(),
            board: board_to_strings(state),
            current_player: state.current_player.as_str().to_string(),
            winner: state.winner.map(|mark| mark.as_str().to_string()),
            player_count: state.player_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ClientId;

    fn client(id: &str) -> ClientId {
        ClientId::new(id.to_string()).unwrap()
    }

    #[test]
    fn test_fresh_game_to_game_state_message() {
        // given:
        let state = GameState::new();

        // when:
        let msg = GameStateMessage::from(&state);

        // then:
        assert_eq!(msg.board, vec![String::new(); 9]);
        assert_eq!(msg.current_player, "X");
        assert_eq!(msg.winner, None);
        assert_eq!(msg.player_count, 0);
    }

    #[test]
    fn test_in_progress_game_to_game_state_message() {
        // given: alice (X) played cell 4
        let mut state = GameState::new();
        assert_eq!(state.assign_mark(client("alice")), Some(Mark::X));
        assert_eq!(state.assign_mark(client("bob")), Some(Mark::O));
        state.apply_move(&client("alice"), 4).unwrap();

        // when:
        let msg = GameStateMessage::from(&state);

        // then:
        assert_eq!(msg.board[4], "X");
        assert_eq!(msg.current_player, "O");
        assert_eq!(msg.winner, None);
        assert_eq!(msg.player_count, 2);
    }

    #[test]
    fn test_player_assigned_message_with_mark() {
        // given / when:
        let msg = player_assigned_message(Some(Mark::O));

        // then:
        assert_eq!(msg.player, Some("O".to_string()));
    }

    #[test]
    fn test_player_assigned_message_for_spectator() {
        // given / when:
        let msg = player_assigned_message(None);

        // then:
        assert_eq!(msg.player, None);
    }

    #[test]
    fn test_room_summary_to_dto_renders_rfc3339() {
        // given:
        let summary = RoomSummary {
            id: RoomId::new("r1".to_string()).unwrap(),
            player_count: 2,
            created_at: 1672531200000,
        };

        // when:
        let dto = RoomSummaryDto::from(summary);

        // then:
        assert_eq!(dto.id, "r1");
        assert_eq!(dto.player_count, 2);
        assert!(dto.created_at.starts_with("2023-01-01T00:00:00"));
    }

    #[test]
    fn test_room_detail_from_game() {
        // given:
        let room_id = RoomId::new("r1".to_string()).unwrap();
        let mut state = GameState::new();
        assert_eq!(state.assign_mark(client("alice")), Some(Mark::X));

        // when:
        let dto = RoomDetailDto::from_game(&room_id, &state);

        // then:
        assert_eq!(dto.id, "r1");
        assert_eq!(dto.board.len(), 9);
        assert_eq!(dto.current_player, "X");
        assert_eq!(dto.player_count, 1);
    }
}
