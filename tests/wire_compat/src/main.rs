fn main() {
    println!("Run `cargo test -p wire-compat` to execute wire compatibility tests.");
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use cgdebug_protocol::{ConnectionTarget, DebugMessage, Severity};
    use cgdebug_sessions::SessionRecord;

    /// Returns the path to the fixtures directory.
    fn fixtures_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
    }

    /// Reads a fixture file verbatim.
    fn read_fixture(name: &str) -> String {
        let path = fixtures_dir().join(name);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()))
    }

    /// Parses a fixture from text (raw JSON payloads cannot come from a `Value`).
    fn parse_fixture<T: serde::de::DeserializeOwned>(name: &str) -> T {
        serde_json::from_str(&read_fixture(name))
            .unwrap_or_else(|e| panic!("failed to deserialize {name}: {e}"))
    }

    /// Deserializes a fixture, re-serializes it, and compares the JSON values
    /// ignoring key order and formatting.
    fn roundtrip_test<T>(name: &str)
    where
        T: serde::de::DeserializeOwned + serde::Serialize,
    {
        let fixture: serde_json::Value = serde_json::from_str(&read_fixture(name)).unwrap();
        let parsed: T = parse_fixture(name);
        let reserialized = serde_json::to_value(&parsed)
            .unwrap_or_else(|e| panic!("failed to re-serialize {name}: {e}"));
        assert_eq!(
            fixture, reserialized,
            "roundtrip mismatch for {name}:\n  fixture: {fixture}\n  Rust:    {reserialized}"
        );
    }

    // --- Debug socket messages ---

    #[test]
    fn fixture_debug_message() {
        roundtrip_test::<DebugMessage>("debug_message.json");

        let msg: DebugMessage = parse_fixture("debug_message.json");
        assert_eq!(msg.severity, Severity::Warning);
        let data: serde_json::Value = serde_json::from_str(msg.data_str()).unwrap();
        assert_eq!(data["elapsedMs"], 1520);
        assert!(data["retry"].is_null());
    }

    #[test]
    fn fixture_debug_message_keeps_raw_payload_order() {
        let msg: DebugMessage = parse_fixture("debug_message.json");
        let raw = msg.data_str();
        let player = raw.find("playerId").unwrap();
        let elapsed = raw.find("elapsedMs").unwrap();
        let limits = raw.find("limits").unwrap();
        assert!(player < elapsed && elapsed < limits, "{raw}");
    }

    #[test]
    fn fixture_debug_message_no_data() {
        roundtrip_test::<DebugMessage>("debug_message_no_data.json");

        let msg: DebugMessage = parse_fixture("debug_message_no_data.json");
        assert_eq!(msg.severity, Severity::Trace);
        assert_eq!(msg.message, "tick 42");
        assert_eq!(msg.data_str(), "");
    }

    #[test]
    fn fixture_debug_message_null_data() {
        roundtrip_test::<DebugMessage>("debug_message_null_data.json");

        let msg: DebugMessage = parse_fixture("debug_message_null_data.json");
        assert_eq!(msg.severity, Severity::Error);
        assert_eq!(msg.data_str(), "null");
    }

    #[test]
    fn all_severities_parse() {
        for severity in Severity::ALL {
            let json = format!(r#"{{"severity":"{}","message":"m"}}"#, severity.as_str());
            let msg: DebugMessage = serde_json::from_str(&json).unwrap();
            assert_eq!(msg.severity, severity);
        }
        assert!(
            serde_json::from_str::<DebugMessage>(r#"{"severity":"fatal","message":"m"}"#).is_err()
        );
    }

    // --- Saved sessions ---

    #[test]
    fn fixture_session_record() {
        let record: SessionRecord = parse_fixture("session_record.json");
        assert_eq!(record.game_id, "0f8fad5b-d9cb-469f-a165-70867728950e");
        assert_eq!(record.player_id, "7c9e6679-7425-40de-944b-e07fc1f90ae7");
        assert_eq!(record.player_secret, "c2VjcmV0LXRva2Vu");

        let debug = format!("{record:?}");
        assert!(!debug.contains("c2VjcmV0LXRva2Vu"));

        match record.into_target() {
            ConnectionTarget::Player { game_id, .. } => {
                assert_eq!(game_id, "0f8fad5b-d9cb-469f-a165-70867728950e");
            }
            other => panic!("unexpected target {other:?}"),
        }
    }

    #[test]
    fn session_record_writes_camel_case() {
        let record: SessionRecord = parse_fixture("session_record.json");
        let value = serde_json::to_value(&record).unwrap();
        let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["gameId", "playerId", "playerSecret"]);
    }
}
