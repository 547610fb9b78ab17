//! UseCase layer: one struct per session event.
//!
//! Each usecase holds the domain interfaces it needs behind `Arc<dyn>`
//! and returns the post-event snapshot plus the broadcast target list;
//! the UI layer serializes the outbound message once and hands it back
//! to the usecase's broadcast method for fan-out.

mod connect_client;
mod disconnect_client;
mod error;
mod join_room;
mod make_move;
mod reset_game;
mod room_query;

pub use connect_client::ConnectClientUseCase;
pub use disconnect_client::DisconnectClientUseCase;
pub use error::RequestError;
pub use join_room::{JoinOutcome, JoinRoomUseCase};
pub use make_move::MakeMoveUseCase;
pub use reset_game::ResetGameUseCase;
pub use room_query::RoomQueryUseCase;
