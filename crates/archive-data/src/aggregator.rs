//! Summary statistics, language distribution and hashtag ranking over a
//! complete set of normalized tweets.

use std::collections::HashMap;

use archive_core::formatting::percentage;
use archive_core::models::{
    DateRange, HashtagFrequency, HashtagFrequencyTable, LanguageCount, NormalizedTweet,
    SummaryStatistics,
};

/// Languages kept on the Summary sheet.
pub const TOP_LANGUAGES: usize = 10;

/// Hashtags kept on the Hashtags sheet.
pub const TOP_HASHTAGS: usize = 100;

// ── FrequencyCounter ──────────────────────────────────────────────────────────

/// Occurrence counter that remembers first-seen order, so that ranking by
/// count with a stable sort breaks ties in insertion order.
#[derive(Debug, Default)]
struct FrequencyCounter {
    counts: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl FrequencyCounter {
    fn add(&mut self, key: &str) {
        match self.index.get(key) {
            Some(&i) => self.counts[i].1 += 1,
            None => {
                self.index.insert(key.to_string(), self.counts.len());
                self.counts.push((key.to_string(), 1));
            }
        }
    }

    fn total(&self) -> u64 {
        self.counts.iter().map(|(_, n)| n).sum()
    }

    /// The `limit` most frequent keys, highest count first.
    fn ranked(mut self, limit: usize) -> Vec<(String, u64)> {
        self.counts.sort_by(|a, b| b.1.cmp(&a.1));
        self.counts.truncate(limit);
        self.counts
    }
}

// ── ConsoleBreakdown ──────────────────────────────────────────────────────────

/// Quick figures printed to the console after loading.
///
/// Unlike [`SummaryStatistics::original`], `original` here counts tweets that
/// are neither a retweet nor a reply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsoleBreakdown {
    pub total: u64,
    pub original: u64,
    pub retweets: u64,
    pub replies: u64,
    pub total_likes: u64,
    pub total_retweets: u64,
}

// ── TweetAggregator ───────────────────────────────────────────────────────────

/// Stateless helper that derives statistics from normalized tweets.
pub struct TweetAggregator;

impl TweetAggregator {
    /// Compute the Summary sheet statistics.
    ///
    /// `original` is `total - retweets - replies`; a tweet flagged as both a
    /// retweet and a reply is subtracted twice.
    pub fn compute_summary(tweets: &[NormalizedTweet]) -> SummaryStatistics {
        let total = tweets.len() as u64;
        let retweets = tweets.iter().filter(|t| t.is_retweet).count() as u64;
        let replies = tweets.iter().filter(|t| t.is_reply()).count() as u64;

        SummaryStatistics {
            total,
            original: total as i64 - retweets as i64 - replies as i64,
            retweets,
            replies,
            total_likes: tweets.iter().map(|t| t.favorite_count).sum(),
            total_retweets_received: tweets.iter().map(|t| t.retweet_count).sum(),
            date_range: Self::date_range(tweets),
            top_languages: Self::language_distribution(tweets),
        }
    }

    /// Earliest and latest `created_at`; invalid timestamps sort first.
    pub fn date_range(tweets: &[NormalizedTweet]) -> DateRange {
        let min = tweets.iter().map(|t| t.created_at).min();
        let max = tweets.iter().map(|t| t.created_at).max();
        match (min, max) {
            (Some(start), Some(end)) => DateRange::Span { start, end },
            _ => DateRange::Empty,
        }
    }

    /// Top [`TOP_LANGUAGES`] non-empty languages by tweet count.
    pub fn language_distribution(tweets: &[NormalizedTweet]) -> Vec<LanguageCount> {
        let mut counter = FrequencyCounter::default();
        for tweet in tweets.iter().filter(|t| !t.language.is_empty()) {
            counter.add(&tweet.language);
        }

        counter
            .ranked(TOP_LANGUAGES)
            .into_iter()
            .map(|(language, count)| LanguageCount { language, count })
            .collect()
    }

    /// Rank hashtags by occurrence.
    ///
    /// Every listed hashtag is one occurrence, so a tweet tagging `#a` twice
    /// contributes two. Percentages are shares of all occurrences, including
    /// hashtags that fall outside the top [`TOP_HASHTAGS`].
    pub fn compute_hashtag_frequency(tweets: &[NormalizedTweet]) -> HashtagFrequencyTable {
        let mut counter = FrequencyCounter::default();
        for hashtag in tweets.iter().flat_map(|t| t.hashtags.iter()) {
            counter.add(hashtag);
        }

        let total_occurrences = counter.total();
        let entries = counter
            .ranked(TOP_HASHTAGS)
            .into_iter()
            .map(|(hashtag, count)| HashtagFrequency {
                percentage: percentage(count, total_occurrences),
                hashtag,
                count,
            })
            .collect();

        HashtagFrequencyTable {
            entries,
            total_occurrences,
        }
    }

    /// Figures for the console preview.
    pub fn console_breakdown(tweets: &[NormalizedTweet]) -> ConsoleBreakdown {
        ConsoleBreakdown {
            total: tweets.len() as u64,
            original: tweets
                .iter()
                .filter(|t| !t.is_retweet && !t.is_reply())
                .count() as u64,
            retweets: tweets.iter().filter(|t| t.is_retweet).count() as u64,
            replies: tweets.iter().filter(|t| t.is_reply()).count() as u64,
            total_likes: tweets.iter().map(|t| t.favorite_count).sum(),
            total_retweets: tweets.iter().map(|t| t.retweet_count).sum(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
