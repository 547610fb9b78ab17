//! Domain layer: value objects, the pure game engine, and the traits
//! the rest of the server depends on.
//!
//! The traits ([`RoomRepository`], [`MembershipIndex`], [`MessagePusher`])
//! are defined here and implemented by the infrastructure layer, so the
//! usecase layer never depends on a concrete store or transport.

mod error;
mod game;
mod membership;
mod message_pusher;
mod repository;
mod value_object;

pub use error::{MessagePushError, MoveError, RepositoryError, ValueError};
pub use game::{BOARD_CELLS, GameState};
pub use membership::MembershipIndex;
pub use message_pusher::{MessagePusher, PusherChannel};
pub use repository::{MoveOutcome, RoomRepository, RoomSummary};
pub use value_object::{ClientId, Mark, RoomId};

#[cfg(test)]
pub use membership::MockMembershipIndex;
#[cfg(test)]
pub use message_pusher::MockMessagePusher;
#[cfg(test)]
pub use repository::MockRoomRepository;
