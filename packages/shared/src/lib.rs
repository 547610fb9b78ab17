//! Shared library for the Marubatsu tic-tac-toe application.
//!
//! Holds the wire protocol spoken between server and client, plus the
//! logging and time utilities both binaries use.

pub mod logger;
pub mod protocol;
pub mod time;
