//! Search hit model
//!
//! One result item as returned by the search API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A single search result.
///
/// Identity is `id` (the API's `objectID`), a string end-to-end. The API
/// returns `null` for title, url, or author on some records; those decode
/// as empty strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hit {
    /// Unique item id, the API's `objectID`
    #[serde(rename = "objectID")]
    pub id: String,
    /// Story title
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    /// Link target
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
    /// Submitter username
    #[serde(default, deserialize_with = "null_as_empty")]
    pub author: String,
    /// Story score, if present on the record
    #[serde(default)]
    pub points: Option<u64>,
    /// Comment count, if present on the record
    #[serde(default)]
    pub num_comments: Option<u64>,
    /// Submission time, if present on the record
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Hit {
    /// Creates a hit with the identifying fields set and no metadata.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        url: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            url: url.into(),
            author: author.into(),
            points: None,
            num_comments: None,
            created_at: None,
        }
    }
}

/// Decodes a possibly-null string field as an empty string.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_deserialize() {
        let json = r#"{
            "objectID": "11600137",
            "title": "Redux without profanity",
            "url": "https://example.com/redux",
            "author": "dan",
            "points": 312,
            "num_comments": 54,
            "created_at": "2016-04-28T17:01:40.000Z"
        }"#;
        let hit: Hit = serde_json::from_str(json).unwrap();
        assert_eq!(hit.id, "11600137");
        assert_eq!(hit.title, "Redux without profanity");
        assert_eq!(hit.author, "dan");
        assert_eq!(hit.points, Some(312));
        assert!(hit.created_at.is_some());
    }

    #[test]
    fn test_hit_deserialize_null_fields() {
        // Comment records carry null title/url
        let json = r#"{"objectID": "42", "title": null, "url": null, "author": "pg"}"#;
        let hit: Hit = serde_json::from_str(json).unwrap();
        assert_eq!(hit.id, "42");
        assert_eq!(hit.title, "");
        assert_eq!(hit.url, "");
        assert_eq!(hit.author, "pg");
        assert!(hit.points.is_none());
    }

    #[test]
    fn test_hit_deserialize_missing_fields() {
        let json = r#"{"objectID": "7"}"#;
        let hit: Hit = serde_json::from_str(json).unwrap();
        assert_eq!(hit.id, "7");
        assert_eq!(hit.title, "");
        assert!(hit.num_comments.is_none());
    }

    #[test]
    fn test_hit_ignores_unknown_fields() {
        let json = r#"{"objectID": "9", "title": "t", "url": "u", "author": "a", "_tags": ["story"]}"#;
        let hit: Hit = serde_json::from_str(json).unwrap();
        assert_eq!(hit.id, "9");
    }
}
