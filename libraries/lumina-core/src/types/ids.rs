/// ID types for Lumina entities
use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix shared by every generated user ID
const USER_ID_PREFIX: &str = "user-";

/// User identifier
///
/// Generated IDs are `user-N`, where `N` is the record's one-based position
/// in the store at creation time. Records are never deleted, so an ID is
/// never handed out twice.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Create a user ID from an existing string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Create the ID for a record appended after `existing` records
    pub fn from_position(existing: usize) -> Self {
        Self(format!("{}{}", USER_ID_PREFIX, existing + 1))
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_one_based() {
        assert_eq!(UserId::from_position(0).as_str(), "user-1");
        assert_eq!(UserId::from_position(41).as_str(), "user-42");
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&UserId::new("user-7")).unwrap();
        assert_eq!(json, "\"user-7\"");
    }
}
