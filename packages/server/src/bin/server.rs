//! Real-time tic-tac-toe WebSocket server.
//!
//! Hosts game rooms: the first two clients to join a room play as X
//! and O, later joiners watch. Every room event is broadcast to all
//! room members as a full state snapshot.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin marubatsu-server
//! cargo run --bin marubatsu-server -- --host 0.0.0.0 --port 3000
//! ```

use std::sync::Arc;

use clap::Parser;

use marubatsu_server::{
    infrastructure::{
        message_pusher::WebSocketMessagePusher,
        repository::{InMemoryMembershipIndex, InMemoryRoomRepository},
    },
    ui::Server,
    usecase::{
        ConnectClientUseCase, DisconnectClientUseCase, JoinRoomUseCase, MakeMoveUseCase,
        ResetGameUseCase, RoomQueryUseCase,
    },
};
use marubatsu_shared::{logger::setup_logger, time::SystemClock};

#[derive(Parser, Debug)]
#[command(name = "server")]
#[command(about = "Real-time tic-tac-toe WebSocket server", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value = "8080")]
    port: u16,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let args = Args::parse();

    // Initialize dependencies in order:
    // 1. Repository + MembershipIndex
    // 2. MessagePusher
    // 3. UseCases
    // 4. Server

    // 1. Create the room directory and the membership index
    let repository = Arc::new(InMemoryRoomRepository::new(Arc::new(SystemClock)));
    let membership = Arc::new(InMemoryMembershipIndex::new());

    // 2. Create MessagePusher (WebSocket implementation)
    let message_pusher = Arc::new(WebSocketMessagePusher::new());

    // 3. Create UseCases
    let connect_client_usecase = Arc::new(ConnectClientUseCase::new(message_pusher.clone()));
    let join_room_usecase = Arc::new(JoinRoomUseCase::new(
        repository.clone(),
        membership.clone(),
        message_pusher.clone(),
    ));
    let make_move_usecase = Arc::new(MakeMoveUseCase::new(
        repository.clone(),
        membership.clone(),
        message_pusher.clone(),
    ));
    let reset_game_usecase = Arc::new(ResetGameUseCase::new(
        repository.clone(),
        membership.clone(),
        message_pusher.clone(),
    ));
    let disconnect_client_usecase = Arc::new(DisconnectClientUseCase::new(
        repository.clone(),
        membership.clone(),
        message_pusher.clone(),
    ));
    let room_query_usecase = Arc::new(RoomQueryUseCase::new(repository.clone()));

    // 4. Create and run the server
    let server = Server::new(
        connect_client_usecase,
        join_room_usecase,
        make_move_usecase,
        reset_game_usecase,
        disconnect_client_usecase,
        room_query_usecase,
    );
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
