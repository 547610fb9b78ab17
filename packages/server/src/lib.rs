//! Marubatsu game server library.
//!
//! A room server for turn-based two-player tic-tac-toe: clients connect
//! over WebSocket, join named rooms, and every room event is broadcast
//! back to all room members.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
