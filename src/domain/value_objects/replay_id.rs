use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::errors::InvalidReplayId;

/// Unique identifier for an uploaded replay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[schema(value_type = String)]
pub struct ReplayId(Uuid);

impl ReplayId {
    /// Issue a fresh random (version 4) identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ReplayId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ReplayId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Always the canonical lowercase hyphenated form
        write!(f, "{}", self.0.hyphenated())
    }
}

impl std::str::FromStr for ReplayId {
    type Err = InvalidReplayId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| InvalidReplayId(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_replay_id_new_is_version_4() {
        let id = ReplayId::new();
        assert_eq!(id.as_uuid().get_version_num(), 4);
    }

    #[test]
    fn test_replay_id_display_is_canonical() {
        let uuid = Uuid::parse_str("550E8400-E29B-41D4-A716-446655440000").unwrap();
        let id = ReplayId::from_uuid(uuid);

        assert_eq!(id.to_string(), "550e8400-e29b-41d4-a716-446655440000");
    }

    #[test]
    fn test_replay_id_round_trips_through_parser() {
        let id = ReplayId::new();
        let parsed: ReplayId = id.to_string().parse().unwrap();

        assert_eq!(id, parsed);
    }

    #[test]
    fn test_replay_id_accepts_simple_form() {
        let parsed: ReplayId = "550e8400e29b41d4a716446655440000".parse().unwrap();
        assert_eq!(parsed.to_string(), "550e8400-e29b-41d4-a716-446655440000");
    }

    #[test]
    fn test_replay_id_from_str_invalid() {
        let invalid_ids = vec![
            "",
            "not-a-uuid",
            "550e8400-e29b-41d4-a716",
            "550e8400-e29b-41d4-a716-446655440000-extra",
            "550e8400-e29b-41d4-a716-44665544000g",
            "../../etc/passwd",
        ];

        for invalid in invalid_ids {
            let err = invalid.parse::<ReplayId>().unwrap_err();
            assert_eq!(err.0, invalid);
        }
    }

    #[test]
    fn test_replay_id_serialization() {
        let uuid = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap();
        let id = ReplayId::from_uuid(uuid);

        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"550e8400-e29b-41d4-a716-446655440000\"");

        let deserialized: ReplayId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_replay_id_uniqueness_at_scale() {
        let ids: HashSet<ReplayId> = (0..1000).map(|_| ReplayId::new()).collect();
        assert_eq!(ids.len(), 1000);
    }
}
