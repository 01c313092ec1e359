use std::fmt;

use serde::{Deserialize, Serialize};

use cgdebug_protocol::ConnectionTarget;

/// Credentials of a saved player session.
///
/// Stored as `{"gameId": ..., "playerId": ..., "playerSecret": ...}`.
/// `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub game_id: String,
    pub player_id: String,
    pub player_secret: String,
}

impl SessionRecord {
    /// Converts the record into a player debug target.
    pub fn into_target(self) -> ConnectionTarget {
        ConnectionTarget::Player {
            game_id: self.game_id,
            player_id: self.player_id,
            player_secret: self.player_secret,
        }
    }
}

impl fmt::Debug for SessionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionRecord")
            .field("game_id", &self.game_id)
            .field("player_id", &self.player_id)
            .field("player_secret", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_camel_case() {
        let json = r#"{"gameId":"g1","playerId":"p1","playerSecret":"s1"}"#;
        let record: SessionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.game_id, "g1");
        assert_eq!(record.player_id, "p1");
        assert_eq!(record.player_secret, "s1");
    }

    #[test]
    fn serialize_has_exactly_three_fields() {
        let record = SessionRecord {
            game_id: "g".into(),
            player_id: "p".into(),
            player_secret: "s".into(),
        };
        let value = serde_json::to_value(&record).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 3);
        assert_eq!(obj["playerSecret"], "s");
    }

    #[test]
    fn extra_fields_are_ignored() {
        let json = r#"{"gameId":"g1","playerId":"p1","playerSecret":"s1","username":"alice"}"#;
        assert!(serde_json::from_str::<SessionRecord>(json).is_ok());
    }

    #[test]
    fn missing_field_is_an_error() {
        let json = r#"{"gameId":"g1","playerId":"p1"}"#;
        assert!(serde_json::from_str::<SessionRecord>(json).is_err());
    }

    #[test]
    fn non_string_field_is_an_error() {
        let json = r#"{"gameId":1,"playerId":"p1","playerSecret":"s1"}"#;
        assert!(serde_json::from_str::<SessionRecord>(json).is_err());
    }

    #[test]
    fn debug_redacts_secret() {
        let record = SessionRecord {
            game_id: "g".into(),
            player_id: "p".into(),
            player_secret: "top-secret".into(),
        };
        assert!(!format!("{record:?}").contains("top-secret"));
    }

    #[test]
    fn into_target_is_player() {
        let record = SessionRecord {
            game_id: "g1".into(),
            player_id: "p1".into(),
            player_secret: "s1".into(),
        };
        assert_eq!(
            record.into_target(),
            ConnectionTarget::Player {
                game_id: "g1".into(),
                player_id: "p1".into(),
                player_secret: "s1".into(),
            }
        );
    }
}
