//! Line rows from the hosted store and the derived display record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::theme::LineTheme;

/// Author label used when the profile join comes back empty.
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// Profile fields embedded in a line query (`profiles(username)`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddedProfile {
    pub username: String,
}

/// A row from the `lines` table with the author profile embedded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineRow {
    pub id: String,
    pub text: String,
    pub author_id: String,
    #[serde(default)]
    pub theme: LineTheme,
    #[serde(default)]
    pub likes_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Embedded author profile; `None` when the join found nothing.
    #[serde(default)]
    pub profiles: Option<EmbeddedProfile>,
}

impl LineRow {
    /// Author display name, falling back to the placeholder label.
    pub fn author_name(&self) -> &str {
        self.profiles
            .as_ref()
            .map(|p| p.username.as_str())
            .unwrap_or(UNKNOWN_AUTHOR)
    }
}

/// A row from the `bookmarks` table with its line embedded
/// (`lines(*, profiles(username))`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BookmarkRow {
    pub lines: LineRow,
}

/// Insert payload for a new line. The store fills in id, counts, and
/// timestamps.
#[derive(Debug, Clone, Serialize)]
pub struct NewLine {
    pub text: String,
    pub author_id: String,
    pub theme: LineTheme,
}

/// Membership pair payload for `likes` and `bookmarks` inserts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MembershipPair {
    pub user_id: String,
    pub line_id: String,
}

/// Row shape returned by membership lookups (`select=line_id`).
#[derive(Debug, Clone, Deserialize)]
pub struct MembershipLineId {
    pub line_id: String,
}

/// The viewer-relative, joined representation of a line used for rendering.
///
/// `is_liked` and `is_bookmarked` are always computed relative to the
/// current viewer; an anonymous viewer sees `false` for both.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayLine {
    pub id: String,
    pub text: String,
    pub author: String,
    pub author_id: String,
    pub theme: LineTheme,
    pub likes: i64,
    pub timestamp: DateTime<Utc>,
    pub is_liked: bool,
    pub is_bookmarked: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row(json_profiles: &str) -> LineRow {
        let json = format!(
            r#"{{
                "id": "l-1",
                "text": "hello",
                "author_id": "u-1",
                "theme": "Ocean",
                "likes_count": 3,
                "created_at": "2024-03-15T12:00:00Z",
                "updated_at": "2024-03-15T12:00:00Z",
                "profiles": {}
            }}"#,
            json_profiles
        );
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn test_author_name_from_embedded_profile() {
        let row = sample_row(r#"{"username": "ada"}"#);
        assert_eq!(row.author_name(), "ada");
    }

    #[test]
    fn test_author_name_falls_back_when_join_is_null() {
        let row = sample_row("null");
        assert_eq!(row.author_name(), UNKNOWN_AUTHOR);
    }

    #[test]
    fn test_deserialize_without_profiles_key() {
        let json = r#"{
            "id": "l-2",
            "text": "no join",
            "author_id": "u-2",
            "theme": "Default",
            "likes_count": 0,
            "created_at": "2024-03-15T12:00:00Z",
            "updated_at": "2024-03-15T12:00:00Z"
        }"#;
        let row: LineRow = serde_json::from_str(json).unwrap();
        assert!(row.profiles.is_none());
        assert_eq!(row.author_name(), UNKNOWN_AUTHOR);
    }

    #[test]
    fn test_new_line_wire_shape() {
        let payload = NewLine {
            text: "hi".into(),
            author_id: "u-1".into(),
            theme: LineTheme::Fire,
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(json, r#"{"text":"hi","author_id":"u-1","theme":"Fire"}"#);
    }
}
