//! User-facing stdout output.

use std::path::Path;

use archive_core::error::ArchiveError;
use archive_core::formatting::{format_count, size_in_kb};
use archive_data::aggregator::ConsoleBreakdown;

pub fn print_banner(input: &Path, output: &Path) {
    println!("X Archive Parser");
    println!("================");
    println!("Input: {}", input.display());
    println!("Output: {}", output.display());
    println!();
}

pub fn print_statistics(stats: &ConsoleBreakdown) {
    println!();
    println!("Tweet Statistics:");
    for line in statistics_lines(stats) {
        println!("   {}", line);
    }
}

/// One line per figure shown under "Tweet Statistics".
pub fn statistics_lines(stats: &ConsoleBreakdown) -> Vec<String> {
    let count = |n: u64| format_count(n as i64);
    vec![
        format!("Total tweets: {}", count(stats.total)),
        format!("Original tweets: {}", count(stats.original)),
        format!("Retweets: {}", count(stats.retweets)),
        format!("Replies: {}", count(stats.replies)),
        format!("Total likes: {}", count(stats.total_likes)),
        format!("Total retweets: {}", count(stats.total_retweets)),
    ]
}

/// Report how many tweet files were read and which ones were skipped.
pub fn print_load_report(files_found: usize, failures: &[ArchiveError]) {
    for line in load_report_lines(files_found, failures) {
        println!("{}", line);
    }
}

pub fn load_report_lines(files_found: usize, failures: &[ArchiveError]) -> Vec<String> {
    let mut lines = vec![format!(
        "Tweet files loaded: {} of {}",
        files_found - failures.len(),
        files_found
    )];
    if !failures.is_empty() {
        lines.push(format!("Skipped {} file(s):", failures.len()));
        lines.extend(failures.iter().map(|e| format!("   {}", e)));
    }
    lines
}

/// Report where the workbook landed and how large it is.
pub fn print_export_success(output: &Path) {
    let shown = std::fs::canonicalize(output).unwrap_or_else(|_| output.to_path_buf());
    println!();
    println!("Export completed successfully!");
    println!("File saved: {}", shown.display());
    if let Ok(meta) = std::fs::metadata(output) {
        println!("File size: {} KB", size_in_kb(meta.len()));
    }
}
