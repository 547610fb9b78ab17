//! In-memory membership index.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{ClientId, MembershipIndex, RoomId};

/// In-memory `MembershipIndex` implementation.
pub struct InMemoryMembershipIndex {
    entries: Mutex<HashMap<ClientId, RoomId>>,
}

impl InMemoryMembershipIndex {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryMembershipIndex {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MembershipIndex for InMemoryMembershipIndex {
    async fn set_room(&self, client_id: ClientId, room_id: RoomId) {
        let mut entries = self.entries.lock().await;
        entries.insert(client_id, room_id);
    }

    async fn get_room(&self, client_id: &ClientId) -> Option<RoomId> {
        let entries = self.entries.lock().await;
        entries.get(client_id).cloned()
    }

    async fn clear(&self, client_id: &ClientId) {
        let mut entries = self.entries.lock().await;
        entries.remove(client_id);
    }

    async fn members_of(&self, room_id: &RoomId) -> Vec<ClientId> {
        let entries = self.entries.lock().await;
        let mut members: Vec<ClientId> = entries
            .iter()
            .filter(|(_, room)| *room == room_id)
            .map(|(client, _)| client.clone())
            .collect();
        // Sort for deterministic ordering in tests; delivery order
        // carries no guarantee either way.
        members.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        members
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(id: &str) -> ClientId {
        ClientId::new(id.to_string()).unwrap()
    }

    fn room(id: &str) -> RoomId {
        RoomId::new(id.to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_set_and_get_room() {
        // given:
        let index = InMemoryMembershipIndex::new();

        // when:
        index.set_room(client("alice"), room("r1")).await;

        // then:
        assert_eq!(index.get_room(&client("alice")).await, Some(room("r1")));
    }

    #[tokio::test]
    async fn test_get_room_for_unknown_client_is_none() {
        // given:
        let index = InMemoryMembershipIndex::new();

        // when / then:
        assert_eq!(index.get_room(&client("ghost")).await, None);
    }

    #[tokio::test]
    async fn test_set_room_overwrites_prior_association() {
        // given: alice is in r1
        let index = InMemoryMembershipIndex::new();
        index.set_room(client("alice"), room("r1")).await;

        // when: she joins r2
        index.set_room(client("alice"), room("r2")).await;

        // then: she silently left r1
        assert_eq!(index.get_room(&client("alice")).await, Some(room("r2")));
        assert!(index.members_of(&room("r1")).await.is_empty());
    }

    #[tokio::test]
    async fn test_clear_removes_association() {
        // given:
        let index = InMemoryMembershipIndex::new();
        index.set_room(client("alice"), room("r1")).await;

        // when:
        index.clear(&client("alice")).await;

        // then:
        assert_eq!(index.get_room(&client("alice")).await, None);
    }

    #[tokio::test]
    async fn test_clear_unknown_client_is_a_noop() {
        // given:
        let index = InMemoryMembershipIndex::new();

        // when / then: no panic, nothing to assert beyond absence
        index.clear(&client("ghost")).await;
        assert_eq!(index.get_room(&client("ghost")).await, None);
    }

    #[tokio::test]
    async fn test_members_of_returns_only_that_rooms_members() {
        // given:
        let index = InMemoryMembershipIndex::new();
        index.set_room(client("alice"), room("r1")).await;
        index.set_room(client("bob"), room("r1")).await;
        index.set_room(client("carol"), room("r2")).await;

        // when:
        let members = index.members_of(&room("r1")).await;

        // then:
        assert_eq!(members, vec![client("alice"), client("bob")]);
    }
}
