//! UseCase: joining a room.

use std::sync::Arc;

use crate::domain::{
    ClientId, GameState, Mark, MembershipIndex, MessagePushError, MessagePusher, RoomId,
    RoomRepository,
};

/// Result of a join: the granted mark (if any), the post-join game
/// snapshot, and the room members to broadcast the state to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinOutcome {
    pub mark: Option<Mark>,
    pub state: GameState,
    pub members: Vec<ClientId>,
}

/// Joins a client to a room, lazily creating it, and runs the mark
/// assignment policy (X, then O, then spectator).
pub struct JoinRoomUseCase {
    repository: Arc<dyn RoomRepository>,
    membership: Arc<dyn MembershipIndex>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl JoinRoomUseCase {
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

    /// Execute the join. Never fails: joining an unknown room creates
    /// it, and joining a full room grants no mark. Any previous room
    /// association is silently overwritten; the old room's members are
    /// not notified.
    pub async fn execute(&self, client_id: ClientId, room_id: RoomId) -> JoinOutcome {
        self.membership
            .set_room(client_id.clone(), room_id.clone())
            .await;

        let (mark, state) = self.repository.join_room(room_id.clone(), client_id).await;
        let members = self.membership.members_of(&room_id).await;

        JoinOutcome {
            mark,
            state,
            members,
        }
    }

    /// Send the `player-assigned` reply to the joining connection only.
    pub async fn notify_assignment(
        &self,
        client_id: &ClientId,
        message: &str,
    ) -> Result<(), MessagePushError> {
        self.message_pusher.push_to(client_id, message).await
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
    use crate::infrastructure::message_pusher::WebSocketMessagePusher;
    use crate::infrastructure::repository::{InMemoryMembershipIndex, InMemoryRoomRepository};
    use marubatsu_shared::time::FixedClock;

    fn create_usecase() -> JoinRoomUseCase {
        JoinRoomUseCase::new(
            Arc::new(InMemoryRoomRepository::new(Arc::new(FixedClock::new(1000)))),
            Arc::new(InMemoryMembershipIndex::new()),
            Arc::new(WebSocketMessagePusher::new()),
        )
    }

    fn client(id: &str) -> ClientId {
        ClientId::new(id.to_string()).unwrap()
    }

    fn room(id: &str) -> RoomId {
        RoomId::new(id.to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_first_joiner_is_assigned_x() {
        // given:
        let usecase = create_usecase();

        // when:
        let outcome = usecase.execute(client("alice"), room("r1")).await;

        // then:
        assert_eq!(outcome.mark, Some(Mark::X));
        assert_eq!(outcome.state.player_count(), 1);
        assert_eq!(outcome.members, vec![client("alice")]);
    }

    #[tokio::test]
    async fn test_second_joiner_is_assigned_o() {
        // given:
        let usecase = create_usecase();
        usecase.execute(client("alice"), room("r1")).await;

        // when:
        let outcome = usecase.execute(client("bob"), room("r1")).await;

        // then:
        assert_eq!(outcome.mark, Some(Mark::O));
        assert_eq!(outcome.state.player_count(), 2);
        assert_eq!(outcome.members, vec![client("alice"), client("bob")]);
    }

    #[tokio::test]
    async fn test_third_joiner_is_a_spectator() {
        // given:
        let usecase = create_usecase();
        usecase.execute(client("alice"), room("r1")).await;
        usecase.execute(client("bob"), room("r1")).await;

        // when:
        let outcome = usecase.execute(client("carol"), room("r1")).await;

        // then: no mark granted, playerCount stays at 2, but carol is
        // a member and receives broadcasts
        assert_eq!(outcome.mark, None);
        assert_eq!(outcome.state.player_count(), 2);
        assert_eq!(outcome.members.len(), 3);
    }

    #[tokio::test]
    async fn test_joining_second_room_abandons_first() {
        // given: alice in r1
        let usecase = create_usecase();
        usecase.execute(client("alice"), room("r1")).await;

        // when: alice joins r2
        let outcome = usecase.execute(client("alice"), room("r2")).await;

        // then: she is only a member of r2; r1 keeps her player slot
        // (only a disconnect frees it)
        assert_eq!(outcome.members, vec![client("alice")]);
        let r1_members = usecase.membership.members_of(&room("r1")).await;
        assert!(r1_members.is_empty());
        let r1_game = usecase.repository.get_game(&room("r1")).await.unwrap();
        assert_eq!(r1_game.player_count(), 1);
    }
}
