//! UseCase: client disconnection.

use std::sync::Arc;

use crate::domain::{
    ClientId, GameState, MembershipIndex, MessagePushError, MessagePusher, RoomRepository,
};

/// Tears down a departed connection: frees its player slot (if any),
/// clears its membership, and unregisters its send handle.
///
/// Disconnects mid-game leave the room usable by the remaining player;
/// only the departing client's symbol slot is freed, the game itself is
/// not reset.
pub struct DisconnectClientUseCase {
    repository: Arc<dyn RoomRepository>,
    membership: Arc<dyn MembershipIndex>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl DisconnectClientUseCase {
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        membership: Arc<dyn MembershipIndex>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            membership,
            message_pusher,
        }
    }

    /// Execute the teardown. When the client was in a room, returns the
    /// updated snapshot and the remaining members it should be
    /// broadcast to; `None` when there is nothing to announce.
    pub async fn execute(&self, client_id: &ClientId) -> Option<(GameState, Vec<ClientId>)> {
        let announcement = match self.membership.get_room(client_id).await {
            Some(room_id) => {
                let state = match self.repository.remove_player(&room_id, client_id).await {
                    Ok(state) => Some(state),
                    Err(e) => {
                        tracing::warn!(
                            "Failed to remove player '{}' on disconnect: {}",
                            client_id.as_str(),
                            e
                        );
                        None
                    }
                };
                self.membership.clear(client_id).await;
                let remaining = self.membership.members_of(&room_id).await;
                state.map(|state| (state, remaining))
            }
            None => None,
        };

        self.message_pusher.unregister_client(client_id).await;
        announcement
    }

    /// Broadcast the serialized room state to the remaining members.
    pub async fn broadcast_state(
        &self,
        targets: Vec<ClientId>,
        message: &str,
    ) -> Result<(), MessagePushError> {
        self.message_pusher.broadcast(targets, message).await
    }
}
