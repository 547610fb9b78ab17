//! Message delivery interface: the connection registry seen from the
//! usecase layer.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use tokio::sync::mpsc;

use super::error::MessagePushError;
use super::value_object::ClientId;

/// Per-connection send handle. The WebSocket write half sits behind an
/// unbounded channel so pushing never blocks event handling.
pub type PusherChannel = mpsc::UnboundedSender<String>;

/// Registry of connected clients and their send handles.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MessagePusher: Send + Sync {
    /// Register (or overwrite) a client's send handle.
    async fn register_client(&self, client_id: ClientId, sender: PusherChannel);

    /// Remove a client's send handle. No-op if absent.
    async fn unregister_client(&self, client_id: &ClientId);

    /// Deliver to one specific client.
    async fn push_to(&self, client_id: &ClientId, content: &str) -> Result<(), MessagePushError>;

    /// Best-effort fan-out: targets with a stale or missing handle are
    /// skipped, never raised. No ordering guarantee between recipients.
    async fn broadcast(&self, targets: Vec<ClientId>, content: &str)
    -> Result<(), MessagePushError>;
}
