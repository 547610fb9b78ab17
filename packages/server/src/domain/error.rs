//! Error types for the domain layer.
//!
//! Nothing here is fatal to the process, and none of these errors are
//! ever surfaced to a client: the protocol has no error message type,
//! so every failure is handled as a local silent rejection.

use thiserror::Error;

/// Validation failure for a client-supplied identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValueError {
    #[error("identifier must not be empty")]
    Empty,
    #[error("identifier is too long ({0} bytes)")]
    TooLong(usize),
}

/// Why a move request was rejected.
///
/// Variants are ordered by the validation sequence: player assignment,
/// turn, index range, cell occupancy, game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("mover is not an assigned player of this room")]
    NotAPlayer,
    #[error("it is not this player's turn")]
    NotYourTurn,
    #[error("cell index {0} is out of range")]
    OutOfRange(usize),
    #[error("cell {0} is already occupied")]
    CellOccupied(usize),
    #[error("the game already has a winner")]
    GameOver,
}

/// Repository-level failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("room '{0}' does not exist")]
    RoomNotFound(String),
}

/// Failures while delivering a message to a connected client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessagePushError {
    #[error("client '{0}' is not connected")]
    ClientNotFound(String),
    #[error("failed to push message: {0}")]
    PushFailed(String),
}
