//! Validated value objects for the game domain.

use serde::{Deserialize, Serialize};

use super::error::ValueError;

/// Maximum accepted length for client-supplied identifiers (bytes).
const MAX_ID_LEN: usize = 64;

fn validate_id(value: &str) -> Result<(), ValueError> {
    if value.is_empty() {
        return Err(ValueError::Empty);
    }
    if value.len() > MAX_ID_LEN {
        return Err(ValueError::TooLong(value.len()));
    }
    Ok(())
}

/// Opaque identifier of one connected client.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientId(String);

impl ClientId {
    pub fn new(value: String) -> Result<Self, ValueError> {
        validate_id(&value)?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for ClientId {
    type Error = ValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Client-supplied key identifying a room. Rooms are created lazily the
/// first time any connection joins a key; the server never generates one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomId(String);

impl RoomId {
    pub fn new(value: String) -> Result<Self, ValueError> {
        validate_id(&value)?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for RoomId {
    type Error = ValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// One of the two game markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The other player's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mark::X => "X",
            Mark::O => "O",
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_id_accepts_normal_identifier() {
        // given / when:
        let result = ClientId::new("alice".to_string());

        // then:
        assert_eq!(result.unwrap().as_str(), "alice");
    }

    #[test]
    fn test_client_id_rejects_empty_string() {
        // given / when:
        let result = ClientId::new(String::new());

        // then:
        assert_eq!(result, Err(ValueError::Empty));
    }

    #[test]
    fn test_client_id_rejects_oversized_identifier() {
        // given:
        let oversized = "a".repeat(MAX_ID_LEN + 1);

        // when:
        let result = ClientId::new(oversized);

        // then:
        assert_eq!(result, Err(ValueError::TooLong(MAX_ID_LEN + 1)));
    }

    #[test]
    fn test_room_id_accepts_client_supplied_key() {
        // given / when:
        let result = RoomId::new("r1".to_string());

        // then:
        assert_eq!(result.unwrap().as_str(), "r1");
    }

    #[test]
    fn test_room_id_rejects_empty_string() {
        // given / when:
        let result = RoomId::new(String::new());

        // then:
        assert!(result.is_err());
    }

    #[test]
    fn test_mark_opponent_flips_between_x_and_o() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
    }

    #[test]
    fn test_mark_displays_as_single_letter() {
        assert_eq!(Mark::X.to_string(), "X");
        assert_eq!(Mark::O.to_string(), "O");
    }
}
