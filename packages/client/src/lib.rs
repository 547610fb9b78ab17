//! CLI game client for the Marubatsu tic-tac-toe server.

mod command;
mod error;
mod formatter;
mod runner;
mod session;
mod ui;

pub use runner::run_client;
