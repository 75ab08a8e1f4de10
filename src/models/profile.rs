//! Profile rows from the hosted store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A row from the `profiles` table. One profile per authenticated identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    /// Display name; uniqueness is enforced by the store.
    pub username: String,
    #[serde(default)]
    pub is_premium: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial profile update. Only the set fields are sent to the store.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_premium: Option<bool>,
}

impl ProfileUpdate {
    /// Update that only changes the username.
    pub fn username(username: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            ..Self::default()
        }
    }

    /// Update that only sets the premium flag.
    pub fn premium(is_premium: bool) -> Self {
        Self {
            is_premium: Some(is_premium),
            ..Self::default()
        }
    }

    /// True when no field is set; such an update should not be sent.
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.is_premium.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_profile() {
        let json = r#"{
            "id": "u-1",
            "username": "ada",
            "is_premium": true,
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-02T00:00:00Z"
        }"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.username, "ada");
        assert!(profile.is_premium);
    }

    #[test]
    fn test_premium_defaults_to_false() {
        let json = r#"{
            "id": "u-1",
            "username": "ada",
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z"
        }"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert!(!profile.is_premium);
    }

    #[test]
    fn test_partial_update_serializes_only_set_fields() {
        let update = ProfileUpdate::username("grace");
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"username":"grace"}"#);

        let update = ProfileUpdate::premium(true);
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"is_premium":true}"#);
    }
}
