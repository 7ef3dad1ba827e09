//! End-to-end pipeline: load → normalize → aggregate.

use std::path::Path;

use archive_core::error::{ArchiveError, Result};
use archive_core::models::{HashtagFrequencyTable, NormalizedTweet, SummaryStatistics};
use tracing::debug;

use crate::aggregator::TweetAggregator;
use crate::normalizer::TweetNormalizer;
use crate::reader::load_archive;

// ── Public types ──────────────────────────────────────────────────────────────

/// The complete output of [`analyze_archive`].
#[derive(Debug)]
pub struct AnalysisResult {
    /// Normalized tweets in archive order.
    pub tweets: Vec<NormalizedTweet>,
    pub summary: SummaryStatistics,
    pub hashtags: HashtagFrequencyTable,
    /// Tweet files matched under the archive path.
    pub files_found: usize,
    /// Per-file failures that were skipped during a directory load.
    pub failures: Vec<ArchiveError>,
}

impl AnalysisResult {
    pub fn is_empty(&self) -> bool {
        self.tweets.is_empty()
    }
}

// ── Public function ───────────────────────────────────────────────────────────

/// Run the full pipeline over an archive file or directory.
///
/// 1. Load raw payloads (per-file failures in a directory are kept, not fatal).
/// 2. Normalize every payload.
/// 3. Compute the summary statistics and hashtag table.
pub fn analyze_archive(path: &Path) -> Result<AnalysisResult> {
    // ── Step 1: Load ──────────────────────────────────────────────────────────
    let load = load_archive(path)?;

    // ── Step 2 + 3: Normalize and aggregate ───────────────────────────────────
    let tweets = TweetNormalizer::normalize_all(&load.payloads);
    let summary = TweetAggregator::compute_summary(&tweets);
    let hashtags = TweetAggregator::compute_hashtag_frequency(&tweets);

    debug!(
        "Normalized {} tweets ({} distinct hashtags kept)",
        tweets.len(),
        hashtags.len()
    );

    Ok(AnalysisResult {
        tweets,
        summary,
        hashtags,
        files_found: load.files_found,
        failures: load.failures,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
