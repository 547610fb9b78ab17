//! Server state shared across handlers.

use std::sync::Arc;

use crate::usecase::{
    ConnectClientUseCase, DisconnectClientUseCase, JoinRoomUseCase, MakeMoveUseCase,
    ResetGameUseCase, RoomQueryUseCase,
};

/// Shared application state: the usecases the handlers dispatch to.
pub struct AppState {
    pub connect_client_usecase: Arc<ConnectClientUseCase>,
    pub join_room_usecase: Arc<JoinRoomUseCase>,
    pub make_move_usecase: Arc<MakeMoveUseCase>,
    pub reset_game_usecase: Arc<ResetGameUseCase>,
    pub disconnect_client_usecase: Arc<DisconnectClientUseCase>,
    pub room_query_usecase: Arc<RoomQueryUseCase>,
}
