//! Arranges tweets and statistics into the three report sheets.

use archive_core::formatting::{format_percentage, join_list, yes_no};
use archive_core::models::{
    DateRange, HashtagFrequencyTable, NormalizedTweet, SummaryStatistics, NOT_AVAILABLE,
};
use archive_core::time_utils::DisplayClock;

use crate::sheet::{Cell, Report, Sheet};

pub const TWEETS_SHEET: &str = "Tweets";
pub const SUMMARY_SHEET: &str = "Summary";
pub const HASHTAGS_SHEET: &str = "Hashtags";

/// Tweets sheet header labels with their column widths.
pub const TWEET_COLUMNS: [(&str, f64); 15] = [
    ("Tweet ID", 20.0),
    ("Date", 12.0),
    ("Time", 10.0),
    ("Tweet Text", 50.0),
    ("Retweets", 10.0),
    ("Likes", 10.0),
    ("Language", 8.0),
    ("Hashtags", 30.0),
    ("Mentions", 30.0),
    ("URLs", 40.0),
    ("Source", 20.0),
    ("Is Retweet", 10.0),
    ("Reply To", 20.0),
    ("Coordinates", 20.0),
    ("Place", 20.0),
];

pub const SUMMARY_COLUMNS: [(&str, f64); 2] = [("Metric", 20.0), ("Value", 30.0)];

pub const HASHTAG_COLUMNS: [(&str, f64); 3] =
    [("Hashtag", 30.0), ("Count", 10.0), ("Percentage", 12.0)];

/// Builds report sheets, rendering timestamps with a fixed [`DisplayClock`].
#[derive(Debug, Clone, Copy)]
pub struct ReportAssembler {
    clock: DisplayClock,
}

impl ReportAssembler {
    pub fn new(clock: DisplayClock) -> Self {
        Self { clock }
    }

    /// All three sheets, in workbook order.
    pub fn assemble(
        &self,
        tweets: &[NormalizedTweet],
        summary: &SummaryStatistics,
        hashtags: &HashtagFrequencyTable,
    ) -> Report {
        Report {
            sheets: vec![
                self.tweets_sheet(tweets),
                self.summary_sheet(summary),
                self.hashtags_sheet(hashtags),
            ],
        }
    }

    /// One row per tweet, columns as in [`TWEET_COLUMNS`].
    pub fn tweets_sheet(&self, tweets: &[NormalizedTweet]) -> Sheet {
        let mut sheet = Sheet::with_columns(TWEETS_SHEET, &TWEET_COLUMNS);
        for tweet in tweets {
            sheet.push_row(vec![
                Cell::from(tweet.id.as_str()),
                Cell::from(self.clock.format_date(&tweet.created_at)),
                Cell::from(self.clock.format_time(&tweet.created_at)),
                Cell::from(tweet.text.as_str()),
                Cell::from(tweet.retweet_count),
                Cell::from(tweet.favorite_count),
                Cell::from(tweet.language.as_str()),
                Cell::from(join_list(&tweet.hashtags)),
                Cell::from(join_list(&tweet.mentions)),
                Cell::from(join_list(&tweet.urls)),
                Cell::from(tweet.source.as_str()),
                Cell::from(yes_no(tweet.is_retweet)),
                Cell::from(tweet.in_reply_to_id.as_str()),
                Cell::from(tweet.coordinates_display()),
                Cell::from(tweet.place.as_str()),
            ]);
        }
        sheet
    }

    /// Metric/value rows, a blank separator, then the top languages.
    pub fn summary_sheet(&self, summary: &SummaryStatistics) -> Sheet {
        let mut sheet = Sheet::with_columns(SUMMARY_SHEET, &SUMMARY_COLUMNS);

        let metrics: [(&str, Cell); 7] = [
            ("Total Tweets", summary.total.into()),
            ("Original Tweets", summary.original.into()),
            ("Retweets", summary.retweets.into()),
            ("Replies", summary.replies.into()),
            ("Total Likes Received", summary.total_likes.into()),
            (
                "Total Retweets Received",
                summary.total_retweets_received.into(),
            ),
            ("Date Range", self.date_range_label(&summary.date_range).into()),
        ];
        for (label, value) in metrics {
            sheet.push_row(vec![Cell::from(label), value]);
        }

        sheet.push_blank_row();
        sheet.push_row(vec![Cell::from("Top Languages"), Cell::from("")]);
        for lang in &summary.top_languages {
            sheet.push_row(vec![Cell::from(lang.language.as_str()), Cell::from(lang.count)]);
        }

        sheet
    }

    /// Hashtag/count/percentage rows in ranked order.
    pub fn hashtags_sheet(&self, hashtags: &HashtagFrequencyTable) -> Sheet {
        let mut sheet = Sheet::with_columns(HASHTAGS_SHEET, &HASHTAG_COLUMNS);
        for entry in &hashtags.entries {
            sheet.push_row(vec![
                Cell::from(entry.hashtag.as_str()),
                Cell::from(entry.count),
                Cell::from(format_percentage(entry.percentage)),
            ]);
        }
        sheet
    }

    /// `"<start> to <end>"` using dates only.
    pub fn date_range_label(&self, range: &DateRange) -> String {
        match range {
            DateRange::Empty => format!("{} to {}", NOT_AVAILABLE, NOT_AVAILABLE),
            DateRange::Span { start, end } => format!(
                "{} to {}",
                self.clock.format_date(start),
                self.clock.format_date(end)
            ),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
