//! Membership index interface: which room each connection is in.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use super::value_object::{ClientId, RoomId};

/// Mapping from connection to the room it last joined.
///
/// A connection belongs to at most one room at a time: joining a new
/// room silently abandons the old one, without notifying the old
/// room's members.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MembershipIndex: Send + Sync {
    /// Associate `client_id` with `room_id`, overwriting any prior
    /// association.
    async fn set_room(&self, client_id: ClientId, room_id: RoomId);

    /// The room `client_id` currently belongs to, if any.
    async fn get_room(&self, client_id: &ClientId) -> Option<RoomId>;

    /// Drop the association (on disconnect). No-op if absent.
    async fn clear(&self, client_id: &ClientId);

    /// Every connection currently associated with `room_id`. Feeds the
    /// broadcast dispatcher.
    async fn members_of(&self, room_id: &RoomId) -> Vec<ClientId>;
}
