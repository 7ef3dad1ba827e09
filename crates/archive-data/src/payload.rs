//! Loosely-typed view over one tweet object from the archive.

use serde::Deserialize;
use serde_json::Value;

/// One raw tweet as found under the `tweet` key of an archive entry.
///
/// Every accessor treats a missing key and an explicit `null` the same way
/// (`None`), and never fails on a value of unexpected type: typed accessors
/// return `None` instead. Fallback chains are composed by the normalizer.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct RawTweetPayload(Value);

impl RawTweetPayload {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    // ── Scalar fields ─────────────────────────────────────────────────────────

    pub fn id_str(&self) -> Option<&str> {
        self.str_field("id_str")
    }

    /// The legacy `id` field, which may be a number or a string.
    pub fn id(&self) -> Option<&Value> {
        self.field("id")
    }

    pub fn full_text(&self) -> Option<&str> {
        self.str_field("full_text")
    }

    pub fn text(&self) -> Option<&str> {
        self.str_field("text")
    }

    pub fn created_at(&self) -> Option<&str> {
        self.str_field("created_at")
    }

    /// Stored as a string in archives, as a number in API payloads.
    pub fn retweet_count(&self) -> Option<&Value> {
        self.field("retweet_count")
    }

    pub fn favorite_count(&self) -> Option<&Value> {
        self.field("favorite_count")
    }

    pub fn lang(&self) -> Option<&str> {
        self.str_field("lang")
    }

    pub fn source(&self) -> Option<&str> {
        self.str_field("source")
    }

    pub fn retweeted(&self) -> Option<bool> {
        self.field("retweeted").and_then(Value::as_bool)
    }

    pub fn in_reply_to_status_id_str(&self) -> Option<&str> {
        self.str_field("in_reply_to_status_id_str")
    }

    // ── Nested fields ─────────────────────────────────────────────────────────

    /// `entities.hashtags`, when present and an array.
    pub fn hashtag_entities(&self) -> Option<&[Value]> {
        self.entity_list("hashtags")
    }

    /// `entities.user_mentions`, when present and an array.
    pub fn mention_entities(&self) -> Option<&[Value]> {
        self.entity_list("user_mentions")
    }

    /// `entities.urls`, when present and an array.
    pub fn url_entities(&self) -> Option<&[Value]> {
        self.entity_list("urls")
    }

    /// `coordinates.coordinates`, the GeoJSON `[longitude, latitude]` array.
    pub fn coordinate_pair(&self) -> Option<&[Value]> {
        self.field("coordinates")?
            .get("coordinates")?
            .as_array()
            .map(Vec::as_slice)
    }

    /// `place.full_name`.
    pub fn place_full_name(&self) -> Option<&str> {
        self.field("place")?.get("full_name")?.as_str()
    }

    // ── Internal helpers ──────────────────────────────────────────────────────

    fn field(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| !v.is_null())
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.field(key).and_then(Value::as_str)
    }

    fn entity_list(&self, kind: &str) -> Option<&[Value]> {
        self.field("entities")?
            .get(kind)?
            .as_array()
            .map(Vec::as_slice)
    }
}

impl From<Value> for RawTweetPayload {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_treated_as_missing() {
        let payload = RawTweetPayload::new(json!({"id_str": null, "id": null}));
        assert!(payload.id_str().is_none());
        assert!(payload.id().is_none());
    }

    #[test]
    fn test_wrong_type_returns_none() {
        let payload = RawTweetPayload::new(json!({
            "full_text": 42,
            "retweeted": "true",
            "entities": {"hashtags": "not-a-list"},
        }));
        assert!(payload.full_text().is_none());
        assert!(payload.retweeted().is_none());
        assert!(payload.hashtag_entities().is_none());
    }

    #[test]
    fn test_nested_accessors() {
        let payload = RawTweetPayload::new(json!({
            "coordinates": {"type": "Point", "coordinates": [-122.4, 37.7]},
            "place": {"full_name": "San Francisco, CA"},
            "entities": {"user_mentions": [{"screen_name": "rustlang"}]},
        }));
        assert_eq!(payload.coordinate_pair().map(<[Value]>::len), Some(2));
        assert_eq!(payload.place_full_name(), Some("San Francisco, CA"));
        assert_eq!(payload.mention_entities().map(<[Value]>::len), Some(1));
    }

    #[test]
    fn test_non_object_payload() {
        let payload = RawTweetPayload::new(json!("just a string"));
        assert!(payload.id_str().is_none());
        assert!(payload.hashtag_entities().is_none());
        assert!(payload.place_full_name().is_none());
    }

    #[test]
    fn test_deserialize_transparent() {
        let payload: RawTweetPayload = serde_json::from_str(r#"{"id_str": "7"}"#).unwrap();
        assert_eq!(payload.id_str(), Some("7"));
    }
}
