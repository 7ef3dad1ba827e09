use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Label shown wherever an unparsable timestamp is rendered.
pub const INVALID_DATE: &str = "Invalid Date";

/// Label used for both ends of the date range of an empty archive.
pub const NOT_AVAILABLE: &str = "N/A";

/// Creation time of a tweet.
///
/// Variant order matters: `Invalid` compares lower than every valid
/// timestamp, so an archive with broken dates still has a deterministic
/// date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreatedAt {
    /// The source string was absent or did not match any known format.
    Invalid,
    /// A successfully parsed UTC timestamp.
    Valid(DateTime<Utc>),
}

impl CreatedAt {
    /// The parsed timestamp, if any.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Valid(dt) => Some(*dt),
            Self::Invalid => None,
        }
    }
}

impl From<Option<DateTime<Utc>>> for CreatedAt {
    fn from(value: Option<DateTime<Utc>>) -> Self {
        value.map_or(Self::Invalid, Self::Valid)
    }
}

/// A GeoJSON point attached to a tweet.
///
/// The archive stores `[longitude, latitude]`; the display form swaps the
/// order to `"latitude, longitude"`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub longitude: f64,
    pub latitude: f64,
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

/// The canonical, always-valid representation of one tweet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedTweet {
    /// Tweet identifier, taken from `id_str` or `id`.
    pub id: String,
    /// Full tweet text; empty when the payload carries none.
    #[serde(default)]
    pub text: String,
    /// Parsed creation time or the invalid marker.
    pub created_at: CreatedAt,
    /// Times this tweet was retweeted by others.
    #[serde(default)]
    pub retweet_count: u64,
    /// Times this tweet was liked.
    #[serde(default)]
    pub favorite_count: u64,
    /// BCP 47 language tag detected by the platform, possibly empty.
    #[serde(default)]
    pub language: String,
    /// Hashtag texts (without `#`) in source order, duplicates preserved.
    #[serde(default)]
    pub hashtags: Vec<String>,
    /// Mentioned screen names, each prefixed with `@`.
    #[serde(default)]
    pub mentions: Vec<String>,
    /// Expanded URLs, falling back to the short `t.co` form.
    #[serde(default)]
    pub urls: Vec<String>,
    /// Posting client name with markup removed.
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub is_retweet: bool,
    /// Id of the tweet this one replies to; empty when not a reply.
    #[serde(default)]
    pub in_reply_to_id: String,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
    /// Full name of the tagged place, possibly empty.
    #[serde(default)]
    pub place: String,
}

impl NormalizedTweet {
    pub fn is_reply(&self) -> bool {
        !self.in_reply_to_id.is_empty()
    }

    /// Display form of the coordinates, or an empty string.
    pub fn coordinates_display(&self) -> String {
        self.coordinates
            .map(|c| c.to_string())
            .unwrap_or_default()
    }
}

/// First and last tweet timestamps of a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateRange {
    /// The batch held no tweets.
    Empty,
    Span { start: CreatedAt, end: CreatedAt },
}

/// One row of the language distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageCount {
    pub language: String,
    pub count: u64,
}

/// Aggregate statistics shown on the Summary sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    pub total: u64,
    /// `total - retweets - replies`.
    ///
    /// Not set-exclusive: a tweet that is both a retweet and a reply is
    /// subtracted twice, so the value can go negative.
    pub original: i64,
    pub retweets: u64,
    pub replies: u64,
    pub total_likes: u64,
    pub total_retweets_received: u64,
    pub date_range: DateRange,
    /// At most ten languages, most frequent first.
    pub top_languages: Vec<LanguageCount>,
}

/// One ranked hashtag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HashtagFrequency {
    pub hashtag: String,
    pub count: u64,
    /// Share of all hashtag occurrences, in percent.
    pub percentage: f64,
}

/// Ranked hashtag occurrences, most frequent first, capped at 100 entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HashtagFrequencyTable {
    pub entries: Vec<HashtagFrequency>,
    /// Occurrences across all hashtags, including ones past the cap.
    pub total_occurrences: u64,
}

impl HashtagFrequencyTable {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
