//! Interactive tic-tac-toe client.
//!
//! Connects to a Marubatsu game server, joins a room, and plays from
//! the terminal with `/join`, `/move` and `/reset` commands.
//! Automatically reconnects on disconnection (max 5 attempts with
//! 5 second interval).
//!
//! Run with:
//! ```not_rust
//! cargo run --bin marubatsu-client -- --room r1
//! cargo run --bin marubatsu-client -- -c alice -r r1
//! ```

use clap::Parser;
use uuid::Uuid;

use marubatsu_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "client")]
#[command(about = "Interactive tic-tac-toe client", long_about = None)]
struct Args {
    /// Client ID identifying this connection (random when omitted)
    #[arg(short = 'c', long)]
    client_id: Option<String>,

    /// WebSocket server URL
    #[arg(short = 'u', long, default_value = "ws://127.0.0.1:8080/ws")]
    url: String,

    /// Room to join on connect (otherwise use /join at the prompt)
    #[arg(short = 'r', long)]
    room: Option<String>,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();
    let client_id = args
        .client_id
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    // Run the client
    if let Err(e) = marubatsu_client::run_client(args.url, client_id, args.room).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
