//! UseCase: client connection.

use std::sync::Arc;

use crate::domain::{ClientId, MessagePusher, PusherChannel};

/// Registers a freshly connected client's send handle. The client has
/// no room membership until it sends a join request.
pub struct ConnectClientUseCase {
    message_pusher: Arc<dyn MessagePusher>,
}

impl ConnectClientUseCase {
    pub fn new(message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self { message_pusher }
    }

    /// Register the connection in the registry. Re-registering an id
    /// overwrites the prior handle.
    pub async fn execute(&self, client_id: ClientId, sender: PusherChannel) {
        self.message_pusher.register_client(client_id, sender).await;
    }
}
