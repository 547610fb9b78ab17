//! Server construction and execution.

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::usecase::{
    ConnectClientUseCase, DisconnectClientUseCase, JoinRoomUseCase, MakeMoveUseCase,
    ResetGameUseCase, RoomQueryUseCase,
};

use super::{
    handler::{
        http::{get_room_detail, get_rooms, health_check},
        websocket::websocket_handler,
    },
    signal::shutdown_signal,
    state::AppState,
};

/// The WebSocket game server: holds the wired usecases and runs the
/// axum app until shutdown.
pub struct Server {
    state: Arc<AppState>,
}

impl Server {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        connect_client_usecase: Arc<ConnectClientUseCase>,
        join_room_usecase: Arc<JoinRoomUseCase>,
        make_move_usecase: Arc<MakeMoveUseCase>,
        reset_game_usecase: Arc<ResetGameUseCase>,
        disconnect_client_usecase: Arc<DisconnectClientUseCase>,
        room_query_usecase: Arc<RoomQueryUseCase>,
    ) -> Self {
        Self {
            state: Arc::new(AppState {
                connect_client_usecase,
                join_room_usecase,
                make_move_usecase,
                reset_game_usecase,
                disconnect_client_usecase,
                room_query_usecase,
            }),
        }
    }

    /// Run the server until Ctrl+C or SIGTERM.
    ///
    /// # Arguments
    ///
    /// * `host` - The host address to bind to (e.g., "127.0.0.1")
    /// * `port` - The port number to bind to (e.g., 8080)
    pub async fn run(self, host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        let app = Router::new()
            .route("/ws", get(websocket_handler))
            .route("/api/health", get(health_check))
            .route("/api/rooms", get(get_rooms))
            .route("/api/rooms/{room_id}", get(get_room_detail))
            .layer(TraceLayer::new_for_http())
            .with_state(self.state);

        let bind_addr = format!("{}:{}", host, port);
        let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

        tracing::info!("Game server listening on {}", listener.local_addr()?);
        tracing::info!("Connect to: ws://{}/ws", bind_addr);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        // Set up graceful shutdown signal handler
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}
