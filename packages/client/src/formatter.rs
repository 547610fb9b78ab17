//! Rendering of server messages for terminal display.

use marubatsu_shared::protocol::GameStateMessage;

/// Message formatter for client display
pub struct MessageFormatter;

impl MessageFormatter {
    /// Format the board as a 3x3 grid. Empty cells show their index so
    /// the player knows what to pass to `/move`.
    pub fn format_board(board: &[String]) -> String {
        let cell = |index: usize| -> String {
            match board.get(index).map(String::as_str) {
                Some("") | None => index.to_string(),
                Some(mark) => mark.to_string(),
            }
        };

        let mut output = String::new();
        for row in 0..3 {
            let base = row * 3;
            output.push_str(&format!(
                " {} | {} | {}\n",
                cell(base),
                cell(base + 1),
                cell(base + 2)
            ));
            if row < 2 {
                output.push_str("---+---+---\n");
            }
        }
        output
    }

    /// Format a full game-state update: board, then either the winner
    /// or whose turn it is, then the player count.
    pub fn format_game_state(state: &GameStateMessage) -> String {
        let status = match &state.winner {
            Some(winner) => format!("{} wins! Type /reset to play again.", winner),
            None => format!("{} to move", state.current_player),
        };
        format!(
            "\n{}\n{} ({} player{} in room)\n",
            Self::format_board(&state.board),
            status,
            state.player_count,
            if state.player_count == 1 { "" } else { "s" }
        )
    }

    /// Format the player-assigned reply received after a join
    pub fn format_assignment(player: Option<&str>) -> String {
        match player {
            Some(mark) => format!("\nYou are playing as {}.\n", mark),
            None => "\nBoth seats are taken; you are watching as a spectator.\n".to_string(),
        }
    }

    /// Format a raw text message (when parsing fails)
    pub fn format_raw_message(text: &str) -> String {
        format!("\n← Received: {}\n", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marubatsu_shared::protocol::MessageType;

    fn state(board: Vec<&str>, current: &str, winner: Option<&str>, count: usize) -> GameStateMessage {
        GameStateMessage {
            r#type: MessageType::GameState,
            board: board.into_iter().map(String::from).collect(),
            current_player: current.to_string(),
            winner: winner.map(String::from),
            player_count: count,
        }
    }

    #[test]
    fn test_empty_board_shows_cell_indices() {
        // given:
        let board = vec![String::new(); 9];

        // when:
        let result = MessageFormatter::format_board(&board);

        // then:
        assert!(result.contains(" 0 | 1 | 2"));
        assert!(result.contains(" 3 | 4 | 5"));
        assert!(result.contains(" 6 | 7 | 8"));
    }

    #[test]
    fn test_marks_replace_indices_on_the_board() {
        // given:
        let board = vec!["X", "", "", "", "O", "", "", "", ""];
        let board: Vec<String> = board.into_iter().map(String::from).collect();

        // when:
        let result = MessageFormatter::format_board(&board);

        // then:
        assert!(result.contains(" X | 1 | 2"));
        assert!(result.contains(" 3 | O | 5"));
    }

    #[test]
    fn test_game_state_shows_turn_while_in_progress() {
        // given:
        let msg = state(vec![""; 9], "O", None, 2);

        // when:
        let result = MessageFormatter::format_game_state(&msg);

        // then:
        assert!(result.contains("O to move"));
        assert!(result.contains("2 players in room"));
    }

    #[test]
    fn test_game_state_announces_the_winner() {
        // given:
        let msg = state(vec!["X", "X", "X", "O", "O", "", "", "", ""], "O", Some("X"), 2);

        // when:
        let result = MessageFormatter::format_game_state(&msg);

        // then:
        assert!(result.contains("X wins!"));
        assert!(!result.contains("to move"));
    }

    #[test]
    fn test_singular_player_count() {
        // given:
        let msg = state(vec![""; 9], "X", None, 1);

        // when:
        let result = MessageFormatter::format_game_state(&msg);

        // then:
        assert!(result.contains("1 player in room"));
    }

    #[test]
    fn test_assignment_with_mark() {
        // given / when:
        let result = MessageFormatter::format_assignment(Some("X"));

        // then:
        assert!(result.contains("playing as X"));
    }

    #[test]
    fn test_assignment_as_spectator() {
        // given / when:
        let result = MessageFormatter::format_assignment(None);

        // then:
        assert!(result.contains("spectator"));
    }
}
