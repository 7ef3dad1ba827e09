//! Archive file discovery and loading.
//!
//! Reads the `window.YTD.tweets.partN = [...]` script files found in an X
//! data export and extracts the raw tweet objects for normalisation.

use std::path::{Path, PathBuf};

use archive_core::error::{ArchiveError, Result};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::payload::RawTweetPayload;

/// Assignment header that precedes the JSON body of every archive script.
pub const WRAPPER_PREFIX: &str = "window.YTD.";

/// Tweet data files start with this name...
pub const TWEET_FILE_PREFIX: &str = "tweets";

/// ...and carry this extension.
pub const TWEET_FILE_EXTENSION: &str = ".js";

/// Key under which each archive entry holds its tweet object.
const TWEET_KEY: &str = "tweet";

// ── ArchiveLoad ───────────────────────────────────────────────────────────────

/// Result of loading one file or a whole directory.
#[derive(Debug, Default)]
pub struct ArchiveLoad {
    /// Raw tweets in file discovery order, then source order within a file.
    pub payloads: Vec<RawTweetPayload>,
    /// Number of tweet files that matched the naming convention.
    pub files_found: usize,
    /// Per-file failures that were skipped.
    pub failures: Vec<ArchiveError>,
}

impl ArchiveLoad {
    pub fn is_empty(&self) -> bool {
        self.payloads.is_empty()
    }

    /// Number of files whose payloads made it into the result.
    pub fn files_loaded(&self) -> usize {
        self.files_found - self.failures.len()
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load an archive path, which may be a single tweet file or a directory.
///
/// A parse failure in a single file is fatal here, because it leaves nothing
/// to export; inside a directory it is recorded and skipped.
pub fn load_archive(path: &Path) -> Result<ArchiveLoad> {
    if !path.exists() {
        return Err(ArchiveError::PathNotFound(path.to_path_buf()));
    }

    if path.is_dir() {
        info!("Processing directory {}", path.display());
        load_directory(path)
    } else if path.is_file() {
        info!("Processing file {}", path.display());
        let payloads = load_file(path)?;
        info!("Total tweets parsed: {}", payloads.len());
        Ok(ArchiveLoad {
            payloads,
            files_found: 1,
            failures: Vec::new(),
        })
    } else {
        Err(ArchiveError::InvalidInput(path.to_path_buf()))
    }
}

/// Find tweet files directly inside `dir`, sorted by file name.
///
/// Entries are matched on their name before anything else is looked at, so
/// unrelated broken entries are ignored. A matching entry that cannot be
/// inspected (a dangling symlink, say) is still returned and fails later as
/// a per-file read error. Subdirectories are not searched. An empty match
/// list is not an error.
pub fn find_tweet_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in walkdir::WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let entry_path = e.path().filter(|_| e.depth() > 0).map(Path::to_path_buf);
                match entry_path {
                    Some(path) if has_tweet_file_name(&path) => files.push(path),
                    Some(path) => debug!("Ignoring unreadable entry {}: {}", path.display(), e),
                    None => {
                        return Err(ArchiveError::DirectoryRead {
                            path: dir.to_path_buf(),
                            source: e.into(),
                        })
                    }
                }
                continue;
            }
        };

        // Symlinks are resolved here; a dangling one is not a directory.
        if has_tweet_file_name(entry.path()) && !entry.path().is_dir() {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

/// Load every tweet file in `dir`, skipping files that fail to read or parse.
pub fn load_directory(dir: &Path) -> Result<ArchiveLoad> {
    let files = find_tweet_files(dir)?;
    info!("Found {} tweet files", files.len());

    let mut load = ArchiveLoad {
        files_found: files.len(),
        ..ArchiveLoad::default()
    };

    for file_path in &files {
        debug!("Parsing {}...", file_path.display());
        match load_file(file_path) {
            Ok(payloads) => load.payloads.extend(payloads),
            Err(e) if e.is_per_file() => {
                warn!("{}", e);
                load.failures.push(e);
            }
            Err(e) => return Err(e),
        }
    }

    info!(
        "Total tweets parsed: {} ({} of {} files)",
        load.payloads.len(),
        load.files_loaded(),
        load.files_found
    );

    Ok(load)
}

/// Read one archive file and extract its raw tweets.
pub fn load_file(path: &Path) -> Result<Vec<RawTweetPayload>> {
    let content = std::fs::read_to_string(path).map_err(|source| ArchiveError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    parse_archive_content(&content).map_err(|reason| ArchiveError::FileParse {
        path: path.to_path_buf(),
        reason,
    })
}

/// Parse the text of an archive file.
///
/// Returns the failure reason as a string so the caller can attach the path.
pub fn parse_archive_content(content: &str) -> std::result::Result<Vec<RawTweetPayload>, String> {
    let body = strip_wrapper(content);
    let data: Value = serde_json::from_str(body).map_err(|e| e.to_string())?;

    let Value::Array(items) = data else {
        return Err(format!(
            "expected a JSON array, found {}",
            json_type_name(&data)
        ));
    };

    let total = items.len();
    let payloads: Vec<RawTweetPayload> = items
        .into_iter()
        .filter_map(|mut item| item.get_mut(TWEET_KEY).map(Value::take))
        .filter(Value::is_object)
        .map(RawTweetPayload::new)
        .collect();

    if payloads.len() < total {
        debug!(
            "Skipped {} entries without a tweet object",
            total - payloads.len()
        );
    }

    Ok(payloads)
}

/// Remove the `window.YTD.<name> =` header, if present.
///
/// Everything after the first `=` is the JSON body. Content without the
/// header is returned unchanged.
pub fn strip_wrapper(content: &str) -> &str {
    if content.starts_with(WRAPPER_PREFIX) {
        if let Some(idx) = content.find('=') {
            return content[idx + 1..].trim();
        }
    }
    content
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn has_tweet_file_name(path: &Path) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };
    let name = name.to_string_lossy();
    name.starts_with(TWEET_FILE_PREFIX) && name.ends_with(TWEET_FILE_EXTENSION)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
