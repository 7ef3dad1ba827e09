//! Mapping from raw archive tweets to [`NormalizedTweet`] records.
//!
//! Normalisation is total: every payload, however malformed, yields a record
//! with documented defaults.

use std::sync::OnceLock;

use archive_core::models::{Coordinates, CreatedAt, NormalizedTweet};
use archive_core::time_utils::parse_archive_timestamp;
use regex::Regex;
use serde_json::Value;

use crate::payload::RawTweetPayload;

/// Stateless helper that turns raw payloads into normalized tweets.
pub struct TweetNormalizer;

impl TweetNormalizer {
    /// Normalize every payload, preserving order.
    pub fn normalize_all(payloads: &[RawTweetPayload]) -> Vec<NormalizedTweet> {
        payloads.iter().map(Self::normalize).collect()
    }

    /// Normalize one payload. Never fails.
    pub fn normalize(payload: &RawTweetPayload) -> NormalizedTweet {
        NormalizedTweet {
            id: Self::extract_id(payload),
            text: Self::extract_text(payload),
            created_at: Self::extract_created_at(payload),
            retweet_count: parse_count(payload.retweet_count()),
            favorite_count: parse_count(payload.favorite_count()),
            language: payload.lang().unwrap_or_default().to_string(),
            hashtags: Self::extract_hashtags(payload),
            mentions: Self::extract_mentions(payload),
            urls: Self::extract_urls(payload),
            source: payload.source().map(strip_markup).unwrap_or_default(),
            is_retweet: payload.retweeted().unwrap_or(false),
            in_reply_to_id: payload
                .in_reply_to_status_id_str()
                .unwrap_or_default()
                .to_string(),
            coordinates: Self::extract_coordinates(payload),
            place: payload.place_full_name().unwrap_or_default().to_string(),
        }
    }

    /// `id_str`, then `id` (number or string), then empty.
    pub fn extract_id(payload: &RawTweetPayload) -> String {
        payload
            .id_str()
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .or_else(|| payload.id().and_then(scalar_to_string))
            .unwrap_or_default()
    }

    /// `full_text`, then `text`, then empty.
    pub fn extract_text(payload: &RawTweetPayload) -> String {
        payload
            .full_text()
            .filter(|s| !s.is_empty())
            .or_else(|| payload.text())
            .unwrap_or_default()
            .to_string()
    }

    pub fn extract_created_at(payload: &RawTweetPayload) -> CreatedAt {
        payload
            .created_at()
            .and_then(parse_archive_timestamp)
            .into()
    }

    /// `entities.hashtags[*].text`.
    pub fn extract_hashtags(payload: &RawTweetPayload) -> Vec<String> {
        payload
            .hashtag_entities()
            .unwrap_or_default()
            .iter()
            .filter_map(|h| entity_str(h, "text"))
            .map(str::to_string)
            .collect()
    }

    /// `entities.user_mentions[*].screen_name`, each prefixed with `@`.
    pub fn extract_mentions(payload: &RawTweetPayload) -> Vec<String> {
        payload
            .mention_entities()
            .unwrap_or_default()
            .iter()
            .filter_map(|m| entity_str(m, "screen_name"))
            .map(|name| format!("@{}", name))
            .collect()
    }

    /// `entities.urls[*].expanded_url`, falling back to `.url` per entity.
    pub fn extract_urls(payload: &RawTweetPayload) -> Vec<String> {
        payload
            .url_entities()
            .unwrap_or_default()
            .iter()
            .filter_map(|u| entity_str(u, "expanded_url").or_else(|| entity_str(u, "url")))
            .map(str::to_string)
            .collect()
    }

    /// GeoJSON `[longitude, latitude]`. The archive writes both as decimal
    /// strings; plain numbers are accepted too. Anything shorter or
    /// non-numeric is treated as absent.
    pub fn extract_coordinates(payload: &RawTweetPayload) -> Option<Coordinates> {
        match payload.coordinate_pair()? {
            [lon, lat, ..] => Some(Coordinates {
                longitude: coordinate_value(lon)?,
                latitude: coordinate_value(lat)?,
            }),
            _ => None,
        }
    }
}

// ── Field helpers ─────────────────────────────────────────────────────────────

/// Remove every `<...>` tag from `source`, keeping the text between tags.
///
/// `<a href="https://mobile.twitter.com" rel="nofollow">Twitter Web App</a>`
/// becomes `Twitter Web App`. An unterminated `<` is left as-is.
pub fn strip_markup(source: &str) -> String {
    static TAG: OnceLock<Regex> = OnceLock::new();
    let re = TAG.get_or_init(|| Regex::new(r"<[^>]*>").expect("regex is valid"));
    re.replace_all(source, "").into_owned()
}

/// Parse a count the way the archive stores it: a decimal string or a JSON
/// number.
///
/// Strings are read up to the first non-digit after optional leading
/// whitespace and `+`, so `"12 likes"` gives 12. Missing, non-numeric and
/// negative values give 0.
pub fn parse_count(value: Option<&Value>) -> u64 {
    match value {
        Some(Value::String(s)) => parse_leading_digits(s),
        Some(Value::Number(n)) => n.as_u64().unwrap_or_else(|| match n.as_f64() {
            Some(f) if f.is_finite() && f >= 0.0 => f.trunc() as u64,
            _ => 0,
        }),
        _ => 0,
    }
}

fn parse_leading_digits(s: &str) -> u64 {
    let trimmed = s.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    unsigned[..end].parse().unwrap_or(0)
}

fn coordinate_value(value: &Value) -> Option<f64> {
    value
        .as_f64()
        .or_else(|| value.as_str()?.trim().parse().ok())
        .filter(|f: &f64| f.is_finite())
}

/// Non-empty string sub-field of an entity object.
fn entity_str<'a>(entity: &'a Value, key: &str) -> Option<&'a str> {
    entity.get(key)?.as_str().filter(|s| !s.is_empty())
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone, Utc};
    use serde_json::json;

    fn normalize(value: Value) -> NormalizedTweet {
        TweetNormalizer::normalize(&RawTweetPayload::new(value))
    }

    fn sample_payload() -> Value {
        json!({
            "id_str": "1050118621198921728",
            "id": "1050118621198921728",
            "full_text": "Shipping #rust with @ferris https://t.co/abc",
            "created_at": "Wed Oct 10 20:19:24 +0000 2018",
            "retweet_count": "3",
            "favorite_count": "12",
            "lang": "en",
            "entities": {
                "hashtags": [{"text": "rust", "indices": ["9", "14"]}],
                "user_mentions": [{"screen_name": "ferris", "name": "Ferris"}],
                "urls": [{"url": "https://t.co/abc", "expanded_url": "https://www.rust-lang.org"}]
            },
            "source": "<a href=\"https://mobile.twitter.com\" rel=\"nofollow\">Twitter Web App</a>",
            "retweeted": false,
            "in_reply_to_status_id_str": "1050118621198921700",
            "coordinates": {"type": "Point", "coordinates": ["-122.4", "37.7"]},
            "place": {"full_name": "San Francisco, CA"}
        })
    }

    // ── normalize ─────────────────────────────────────────────────────────────

    #[test]
    fn test_normalize_full_payload() {
        let tweet = normalize(sample_payload());

        assert_eq!(tweet.id, "1050118621198921728");
        assert_eq!(tweet.text, "Shipping #rust with @ferris https://t.co/abc");
        assert_eq!(
            tweet.created_at,
            CreatedAt::Valid(Utc.with_ymd_and_hms(2018, 10, 10, 20, 19, 24).unwrap())
        );
        assert_eq!(tweet.retweet_count, 3);
        assert_eq!(tweet.favorite_count, 12);
        assert_eq!(tweet.language, "en");
        assert_eq!(tweet.hashtags, vec!["rust"]);
        assert_eq!(tweet.mentions, vec!["@ferris"]);
        assert_eq!(tweet.urls, vec!["https://www.rust-lang.org"]);
        assert_eq!(tweet.source, "Twitter Web App");
        assert!(!tweet.is_retweet);
        assert_eq!(tweet.in_reply_to_id, "1050118621198921700");
        assert_eq!(tweet.place, "San Francisco, CA");
        assert_eq!(tweet.coordinates_display(), "37.7, -122.4");
    }

    #[test]
    fn test_normalize_empty_object_uses_defaults() {
        let tweet = normalize(json!({}));

        assert_eq!(tweet.id, "");
        assert_eq!(tweet.text, "");
        assert_eq!(tweet.created_at, CreatedAt::Invalid);
        assert_eq!(tweet.retweet_count, 0);
        assert_eq!(tweet.favorite_count, 0);
        assert_eq!(tweet.language, "");
        assert!(tweet.hashtags.is_empty());
        assert!(tweet.mentions.is_empty());
        assert!(tweet.urls.is_empty());
        assert_eq!(tweet.source, "");
        assert!(!tweet.is_retweet);
        assert_eq!(tweet.in_reply_to_id, "");
        assert_eq!(tweet.coordinates, None);
        assert_eq!(tweet.place, "");
    }

    #[test]
    fn test_normalize_is_total_on_wrong_types() {
        let payloads = [
            json!(null),
            json!(42),
            json!([1, 2, 3]),
            json!({
                "id_str": 5,
                "full_text": ["x"],
                "created_at": 1700000000,
                "retweet_count": {"n": 1},
                "favorite_count": true,
                "lang": 7,
                "entities": {"hashtags": [1, null, {"text": 3}], "urls": "nope"},
                "source": {"html": "<b>x</b>"},
                "retweeted": "yes",
                "coordinates": {"coordinates": [1.0]},
                "place": "Paris"
            }),
        ];

        for payload in payloads {
            let tweet = normalize(payload);
            assert_eq!(tweet.created_at, CreatedAt::Invalid);
            assert!(tweet.hashtags.is_empty());
            assert!(tweet.urls.is_empty());
            assert_eq!(tweet.coordinates, None);
        }
    }

    #[test]
    fn test_missing_entity_lists_yield_empty_sequences() {
        for entities in [json!(null), json!({}), json!({"hashtags": null})] {
            let tweet = normalize(json!({"id_str": "1", "entities": entities}));
            assert!(tweet.hashtags.is_empty());
            assert!(tweet.mentions.is_empty());
            assert!(tweet.urls.is_empty());
        }
    }

    #[test]
    fn test_duplicate_hashtags_preserved() {
        let tweet = normalize(json!({
            "id_str": "1",
            "full_text": "hi #a #a",
            "entities": {"hashtags": [{"text": "a"}, {"text": "a"}]}
        }));
        assert_eq!(tweet.hashtags, vec!["a", "a"]);
    }

    // ── id / text fallbacks ───────────────────────────────────────────────────

    #[test]
    fn test_id_falls_back_to_numeric_id() {
        assert_eq!(normalize(json!({"id": 12345})).id, "12345");
        assert_eq!(normalize(json!({"id_str": "", "id": 99})).id, "99");
        assert_eq!(normalize(json!({"id_str": "7", "id": 99})).id, "7");
    }

    #[test]
    fn test_text_fallback_chain() {
        assert_eq!(
            normalize(json!({"full_text": "long", "text": "short"})).text,
            "long"
        );
        assert_eq!(normalize(json!({"text": "short"})).text, "short");
        assert_eq!(normalize(json!({"full_text": "", "text": "short"})).text, "short");
    }

    // ── created_at ────────────────────────────────────────────────────────────

    #[test]
    fn test_unparsable_created_at_is_invalid_marker() {
        let tweet = normalize(json!({"created_at": "yesterday"}));
        assert_eq!(tweet.created_at, CreatedAt::Invalid);
    }

    #[test]
    fn test_created_at_rfc3339_accepted() {
        let tweet = normalize(json!({"created_at": "2021-03-04T05:06:07Z"}));
        assert_eq!(tweet.created_at.timestamp().map(|d| d.year()), Some(2021));
    }

    // ── entities ──────────────────────────────────────────────────────────────

    #[test]
    fn test_mentions_prefixed_in_order() {
        let tweet = normalize(json!({"entities": {"user_mentions": [
            {"screen_name": "alice"}, {"name": "no handle"}, {"screen_name": "bob"}
        ]}}));
        assert_eq!(tweet.mentions, vec!["@alice", "@bob"]);
    }

    #[test]
    fn test_urls_prefer_expanded() {
        let tweet = normalize(json!({"entities": {"urls": [
            {"url": "https://t.co/1", "expanded_url": "https://example.com/1"},
            {"url": "https://t.co/2"},
            {"url": "https://t.co/3", "expanded_url": ""}
        ]}}));
        assert_eq!(
            tweet.urls,
            vec!["https://example.com/1", "https://t.co/2", "https://t.co/3"]
        );
    }

    // ── coordinates ───────────────────────────────────────────────────────────

    #[test]
    fn test_coordinates_lon_lat_source_order() {
        let tweet = normalize(json!({
            "coordinates": {"type": "Point", "coordinates": [-122.4194, 37.7749]}
        }));
        let coords = tweet.coordinates.unwrap();
        assert_eq!(coords.longitude, -122.4194);
        assert_eq!(coords.latitude, 37.7749);
        assert_eq!(tweet.coordinates_display(), "37.7749, -122.4194");
    }

    #[test]
    fn test_coordinates_from_archive_strings() {
        let tweet = normalize(json!({
            "coordinates": {"type": "Point", "coordinates": ["-122.4", " 37.7 "]}
        }));
        let coords = tweet.coordinates.unwrap();
        assert_eq!(coords.longitude, -122.4);
        assert_eq!(coords.latitude, 37.7);
        assert_eq!(tweet.coordinates_display(), "37.7, -122.4");
    }

    #[test]
    fn test_coordinates_non_numeric_strings_absent() {
        for pair in [json!(["west", "37.7"]), json!(["-122.4", ""]), json!(["NaN", "1"])] {
            let tweet = normalize(json!({"coordinates": {"coordinates": pair}}));
            assert_eq!(tweet.coordinates, None);
        }
    }

    // ── retweet / reply ───────────────────────────────────────────────────────

    #[test]
    fn test_retweeted_flag() {
        assert!(normalize(json!({"retweeted": true})).is_retweet);
        assert!(!normalize(json!({"retweeted": null})).is_retweet);
    }

    // ── parse_count ───────────────────────────────────────────────────────────

    #[test]
    fn test_parse_count_strings() {
        assert_eq!(parse_count(Some(&json!("5"))), 5);
        assert_eq!(parse_count(Some(&json!("  42"))), 42);
        assert_eq!(parse_count(Some(&json!("12 likes"))), 12);
        assert_eq!(parse_count(Some(&json!("+8"))), 8);
        assert_eq!(parse_count(Some(&json!("abc"))), 0);
        assert_eq!(parse_count(Some(&json!(""))), 0);
        assert_eq!(parse_count(Some(&json!("-3"))), 0);
    }

    #[test]
    fn test_parse_count_numbers() {
        assert_eq!(parse_count(Some(&json!(17))), 17);
        assert_eq!(parse_count(Some(&json!(4.9))), 4);
        assert_eq!(parse_count(Some(&json!(-2))), 0);
    }

    #[test]
    fn test_parse_count_missing_or_wrong_type() {
        assert_eq!(parse_count(None), 0);
        assert_eq!(parse_count(Some(&json!(null))), 0);
        assert_eq!(parse_count(Some(&json!(true))), 0);
        assert_eq!(parse_count(Some(&json!([1]))), 0);
    }

    // ── strip_markup ──────────────────────────────────────────────────────────

    #[test]
    fn test_strip_markup_anchor() {
        assert_eq!(
            strip_markup("<a href=\"http://twitter.com/download/iphone\" rel=\"nofollow\">Twitter for iPhone</a>"),
            "Twitter for iPhone"
        );
    }

    #[test]
    fn test_strip_markup_plain_text_unchanged() {
        assert_eq!(strip_markup("TweetDeck"), "TweetDeck");
        assert_eq!(strip_markup(""), "");
    }

    #[test]
    fn test_strip_markup_nested_tags() {
        assert_eq!(strip_markup("<a><b>Bold</b> client</a>"), "Bold client");
    }

    #[test]
    fn test_strip_markup_malformed() {
        // Unterminated tag survives; stray `>` is plain text.
        assert_eq!(strip_markup("Client <b"), "Client <b");
        assert_eq!(strip_markup("a > b"), "a > b");
        // The first `>` closes the tag, leaving the rest of a nested opener.
        assert_eq!(strip_markup("<<b>>x"), ">x");
    }
}
