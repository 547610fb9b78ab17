//! The game engine: pure state transitions over one room's game.
//!
//! This module contains no I/O. Every transition either mutates the
//! state and succeeds, or leaves it untouched and reports why, which is
//! what makes the move-validation rules easy to test in isolation.

use std::collections::HashMap;

use super::error::MoveError;
use super::value_object::{ClientId, Mark};

/// Number of cells on the board. The board length is invariant.
pub const BOARD_CELLS: usize = 9;

/// The 8 winning lines, checked in a fixed order: rows, then columns,
/// then diagonals. The order is deterministic for testability; only one
/// mark can legally complete a line.
const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// State of one room's game.
///
/// A drawn game is not distinguished from one still in progress: both
/// keep `winner` empty, and a full board simply rejects further moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// 9 cells, row-major, empty or holding a player's mark.
    pub board: [Option<Mark>; BOARD_CELLS],
    /// Whose turn it is. Stops advancing once a winner is found.
    pub current_player: Mark,
    /// Assigned players by connection. At most one client holds `X` and
    /// at most one holds `O`; further joiners are spectators.
    pub players: HashMap<ClientId, Mark>,
    pub winner: Option<Mark>,
}

impl GameState {
    /// Fresh game: empty board, `X` to move, no players, no winner.
    pub fn new() -> Self {
        Self {
            board: [None; BOARD_CELLS],
            current_player: Mark::X,
            players: HashMap::new(),
            winner: None,
        }
    }

    /// Evaluate the winning lines and return the mark occupying the
    /// first fully-matched one, if any.
    pub fn check_winner(board: &[Option<Mark>; BOARD_CELLS]) -> Option<Mark> {
        WINNING_LINES.iter().find_map(|line| {
            let first = board[line[0]]?;
            (board[line[1]] == Some(first) && board[line[2]] == Some(first)).then_some(first)
        })
    }

    /// Assign a mark to a joining client: `X` if unheld, else `O` if
    /// unheld, else no mark (the client observes as a spectator).
    ///
    /// A granted mark is recorded in the player mapping. A client that
    /// already holds a mark re-runs the policy against the marks held
    /// at that moment, exactly like a fresh joiner.
    pub fn assign_mark(&mut self, client_id: ClientId) -> Option<Mark> {
        let x_taken = self.players.values().any(|m| *m == Mark::X);
        let o_taken = self.players.values().any(|m| *m == Mark::O);

        let mark = if !x_taken {
            Mark::X
        } else if !o_taken {
            Mark::O
        } else {
            return None;
        };

        self.players.insert(client_id, mark);
        Some(mark)
    }

    /// Apply a move for `client_id` at `index`.
    ///
    /// Validation order: the client must be an assigned player, it must
    /// be their turn, the index must be in range, the cell must be
    /// empty, and the game must not already have a winner. On success
    /// the cell is marked and the winner recomputed; the turn only
    /// flips when no winner was produced.
    pub fn apply_move(&mut self, client_id: &ClientId, index: usize) -> Result<(), MoveError> {
        let mark = *self
            .players
            .get(client_id)
            .ok_or(MoveError::NotAPlayer)?;
        if mark != self.current_player {
            return Err(MoveError::NotYourTurn);
        }
        let cell = *self
            .board
            .get(index)
            .ok_or(MoveError::OutOfRange(index))?;
        if cell.is_some() {
            return Err(MoveError::CellOccupied(index));
        }
        if self.winner.is_some() {
            return Err(MoveError::GameOver);
        }

        self.board[index] = Some(mark);
        self.winner = Self::check_winner(&self.board);
        if self.winner.is_none() {
            self.current_player = self.current_player.opponent();
        }
        Ok(())
    }

    /// Clear the board and winner and hand the turn back to `X`.
    /// Player assignments survive the reset.
    pub fn reset(&mut self) {
        self.board = [None; BOARD_CELLS];
        self.current_player = Mark::X;
        self.winner = None;
    }

    /// Remove a client's player slot, freeing its mark for a future
    /// joiner. Board, turn and winner are untouched. No-op for
    /// spectators and unknown clients.
    pub fn remove_player(&mut self, client_id: &ClientId) {
        self.players.remove(client_id);
    }

    /// Current size of the player mapping (0, 1, or 2).
    pub fn player_count(&self) -> usize {
        self.players.len()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
