//! UI layer: the axum server, its handlers, and shutdown handling.

mod handler;
mod server;
mod signal;
mod state;

pub use server::Server;
pub use state::AppState;
