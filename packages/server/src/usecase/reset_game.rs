//! UseCase: resetting a room's game.

use std::sync::Arc;

use crate::domain::{
    ClientId, GameState, MembershipIndex, MessagePushError, MessagePusher, RoomRepository,
};

use super::error::RequestError;

/// Resolves the requester's room and resets its game. Any room member
/// may reset, spectators included; player assignments survive.
pub struct ResetGameUseCase {
    repository: Arc<dyn RoomRepository>,
    membership: Arc<dyn MembershipIndex>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl ResetGameUseCase {
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

    /// Reset the requester's room. Returns the fresh snapshot and the
    /// broadcast targets, or a `RequestError` when the request must be
    /// dropped.
    pub async fn execute(
        &self,
        client_id: &ClientId,
    ) -> Result<(GameState, Vec<ClientId>), RequestError> {
        let room_id = self
            .membership
            .get_room(client_id)
            .await
            .ok_or_else(|| RequestError::NoMembership(client_id.as_str().to_string()))?;

        let state = self.repository.reset_game(&room_id).await?;
        let members = self.membership.members_of(&room_id).await;

        Ok((state, members))
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Mark, RoomId};
    use crate::infrastructure::message_pusher::WebSocketMessagePusher;
    use crate::infrastructure::repository::{InMemoryMembershipIndex, InMemoryRoomRepository};
    use marubatsu_shared::time::FixedClock;

    fn client(id: &str) -> ClientId {
        ClientId::new(id.to_string()).unwrap()
    }

    fn room(id: &str) -> RoomId {
        RoomId::new(id.to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_reset_restores_fresh_board_and_keeps_players() {
        // given: a game in progress
        let repository = Arc::new(InMemoryRoomRepository::new(Arc::new(FixedClock::new(1000))));
        let membership = Arc::new(InMemoryMembershipIndex::new());
        let usecase = ResetGameUseCase::new(
            repository.clone(),
            membership.clone(),
            Arc::new(WebSocketMessagePusher::new()),
        );

        repository.join_room(room("r1"), client("alice")).await;
        repository.join_room(room("r1"), client("bob")).await;
        membership.set_room(client("alice"), room("r1")).await;
        membership.set_room(client("bob"), room("r1")).await;
        repository
            .apply_move(&room("r1"), &client("alice"), 4)
            .await
            .unwrap();

        // when:
        let (state, members) = usecase.execute(&client("bob")).await.unwrap();

        // then:
        assert!(state.board.iter().all(|cell| cell.is_none()));
        assert_eq!(state.current_player, Mark::X);
        assert_eq!(state.winner, None);
        assert_eq!(state.player_count(), 2);
        assert_eq!(members.len(), 2);
    }

    #[tokio::test]
    async fn test_reset_without_membership_is_dropped() {
        // given:
        let usecase = ResetGameUseCase::new(
            Arc::new(InMemoryRoomRepository::new(Arc::new(FixedClock::new(1000)))),
            Arc::new(InMemoryMembershipIndex::new()),
            Arc::new(WebSocketMessagePusher::new()),
        );

        // when:
        let result = usecase.execute(&client("ghost")).await;

        // then:
        assert_eq!(
            result,
            Err(RequestError::NoMembership("ghost".to_string()))
        );
    }
}
