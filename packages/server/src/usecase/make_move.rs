//! UseCase: applying a move.

use std::sync::Arc;

use crate::domain::{
    ClientId, MembershipIndex, MessagePushError, MessagePusher, MoveOutcome, RoomRepository,
};

use super::error::RequestError;

/// Resolves the mover's room and applies the move.
///
/// The room state is broadcast whether or not the move was accepted: a
/// rejected move produces a redundant broadcast of unchanged state.
/// Only a missing membership or missing room suppresses the broadcast
/// entirely.
pub struct MakeMoveUseCase {
    repository: Arc<dyn RoomRepository>,
    membership: Arc<dyn MembershipIndex>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl MakeMoveUseCase {
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

    /// Apply a move for `client_id` at `index`. Returns the outcome
    /// (snapshot plus optional rejection reason) and the broadcast
    /// targets, or a `RequestError` when the request must be dropped
    /// without any broadcast.
    pub async fn execute(
        &self,
        client_id: &ClientId,
        index: usize,
    ) -> Result<(MoveOutcome, Vec<ClientId>), RequestError> {
        let room_id = self
            .membership
            .get_room(client_id)
            .await
            .ok_or_else(|| RequestError::NoMembership(client_id.as_str().to_string()))?;

        let outcome = self.repository.apply_move(&room_id, client_id, index).await?;
        let members = self.membership.members_of(&room_id).await;

        Ok((outcome, members))
    }

    /// Broadcast the serialized room state to every member.
    pub async fn broadcast_state(
        &self,
        targets: Vec<ClientId>,
        message: &str,
    ) -> Result<(), MessagePushError> {
        self.message_pusher.broadcast(targets, message).await
    }
}
