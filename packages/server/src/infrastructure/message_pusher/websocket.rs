//! WebSocket-backed `MessagePusher` implementation.
//!
//! The UI layer accepts the WebSocket connection and creates the
//! `UnboundedSender` for it; this registry only stores the senders and
//! performs delivery, keeping connection setup and message pushing
//! separate.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{ClientId, MessagePushError, MessagePusher, PusherChannel};

/// Registry of connected clients' WebSocket senders.
pub struct WebSocketMessagePusher {
    clients: Mutex<HashMap<ClientId, PusherChannel>>,
}

impl WebSocketMessagePusher {
    pub fn new() -> Self {
        Self {
            clients: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for WebSocketMessagePusher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessagePusher for WebSocketMessagePusher {
    async fn register_client(&self, client_id: ClientId, sender: PusherChannel) {
        let mut clients = self.clients.lock().await;
        // Overwriting drops any prior sender for this id, ending the
        // stale connection's pump task.
        clients.insert(client_id.clone(), sender);
        tracing::debug!("Client '{}' registered to MessagePusher", client_id.as_str());
    }

    async fn unregister_client(&self, client_id: &ClientId) {
        let mut clients = self.clients.lock().await;
        clients.remove(client_id);
        tracing::debug!(
            "Client '{}' unregistered from MessagePusher",
            client_id.as_str()
        );
    }

    async fn push_to(&self, client_id: &ClientId, content: &str) -> Result<(), MessagePushError> {
        let clients = self.clients.lock().await;

        if let Some(sender) = clients.get(client_id) {
            sender
                .send(content.to_string())
                .map_err(|e| MessagePushError::PushFailed(e.to_string()))?;
            tracing::debug!("Pushed message to client '{}'", client_id.as_str());
            Ok(())
        } else {
            Err(MessagePushError::ClientNotFound(
                client_id.as_str().to_string(),
            ))
        }
    }

    async fn broadcast(
        &self,
        targets: Vec<ClientId>,
        content: &str,
    ) -> Result<(), MessagePushError> {
        let clients = self.clients.lock().await;

        for target in targets {
            if let Some(sender) = clients.get(&target) {
                // Partial delivery failures are tolerated on broadcast
                if let Err(e) = sender.send(content.to_string()) {
                    tracing::warn!(
                        "Failed to push message to client '{}': {}",
                        target.as_str(),
                        e
                    );
                } else {
                    tracing::debug!("Broadcasted message to client '{}'", target.as_str());
                }
            } else {
                tracing::warn!(
                    "Client '{}' not found during broadcast, skipping",
                    target.as_str()
                );
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    fn client(id: &str) -> ClientId {
        ClientId::new(id.to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_push_to_success() {
        // given:
        let pusher = WebSocketMessagePusher::new();
        let (tx, mut rx) = mpsc::unbounded_channel();
        pusher.register_client(client("alice"), tx).await;

        // when:
        let result = pusher.push_to(&client("alice"), "Hello").await;

        // then:
        assert!(result.is_ok());
        assert_eq!(rx.recv().await, Some("Hello".to_string()));
    }

    #[tokio::test]
    async fn test_push_to_client_not_found() {
        // given:
        let pusher = WebSocketMessagePusher::new();

        // when:
        let result = pusher.push_to(&client("nonexistent"), "Hello").await;

        // then:
        assert!(matches!(
            result.unwrap_err(),
            MessagePushError::ClientNotFound(_)
        ));
    }

    #[tokio::test]
    async fn test_register_overwrites_prior_sender() {
        // given: alice registered once already
        let pusher = WebSocketMessagePusher::new();
        let (tx1, mut rx1) = mpsc::unbounded_channel();
        let (tx2, mut rx2) = mpsc::unbounded_channel();
        pusher.register_client(client("alice"), tx1).await;

        // when: a second registration for the same id
        pusher.register_client(client("alice"), tx2).await;
        pusher.push_to(&client("alice"), "Hello").await.unwrap();

        // then: only the newest sender receives; the old channel closed
        assert_eq!(rx2.recv().await, Some("Hello".to_string()));
        assert_eq!(rx1.recv().await, None);
    }

    #[tokio::test]
    async fn test_broadcast_success() {
        // given:
        let pusher = WebSocketMessagePusher::new();
        let (tx1, mut rx1) = mpsc::unbounded_channel();
        let (tx2, mut rx2) = mpsc::unbounded_channel();
        pusher.register_client(client("alice"), tx1).await;
        pusher.register_client(client("bob"), tx2).await;

        // when:
        let targets = vec![client("alice"), client("bob")];
        let result = pusher.broadcast(targets, "Broadcast message").await;

        // then:
        assert!(result.is_ok());
        assert_eq!(rx1.recv().await, Some("Broadcast message".to_string()));
        assert_eq!(rx2.recv().await, Some("Broadcast message".to_string()));
    }

    #[tokio::test]
    async fn test_broadcast_skips_missing_targets() {
        // given:
        let pusher = WebSocketMessagePusher::new();
        let (tx1, mut rx1) = mpsc::unbounded_channel();
        pusher.register_client(client("alice"), tx1).await;

        // when:
        let targets = vec![client("alice"), client("nonexistent")];
        let result = pusher.broadcast(targets, "Broadcast message").await;

        // then: broadcast tolerates missing targets
        assert!(result.is_ok());
        assert_eq!(rx1.recv().await, Some("Broadcast message".to_string()));
    }

    #[tokio::test]
    async fn test_broadcast_empty_targets() {
        // given:
        let pusher = WebSocketMessagePusher::new();

        // when / then:
        assert!(pusher.broadcast(vec![], "Message").await.is_ok());
    }

    #[tokio::test]
    async fn test_unregister_then_push_fails() {
        // given:
        let pusher = WebSocketMessagePusher::new();
        let (tx, _rx) = mpsc::unbounded_channel();
        pusher.register_client(client("alice"), tx).await;

        // when:
        pusher.unregister_client(&client("alice")).await;

        // then:
        assert!(pusher.push_to(&client("alice"), "Hello").await.is_err());
    }
}
