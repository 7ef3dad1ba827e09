use std::path::PathBuf;
use thiserror::Error;

/// All errors produced while converting an archive.
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// The archive path given on the command line does not exist.
    #[error("Path \"{}\" does not exist", .0.display())]
    PathNotFound(PathBuf),

    /// The archive path exists but is neither a regular file nor a directory.
    #[error("Input path \"{}\" is neither a file nor a directory", .0.display())]
    InvalidInput(PathBuf),

    /// The archive directory could not be listed.
    #[error("Error reading directory {}: {source}", .path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A single archive file could not be opened or read from disk.
    #[error("Failed to read file {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Wrapper stripping or JSON parsing failed for a single archive file.
    #[error("Error parsing file {}: {reason}", .path.display())]
    FileParse { path: PathBuf, reason: String },

    /// The spreadsheet could not be written.
    #[error("Error exporting to Excel: {0}")]
    Export(String),
}

impl ArchiveError {
    /// `true` for failures scoped to a single file, which a batch load
    /// recovers from by skipping that file.
    pub fn is_per_file(&self) -> bool {
        matches!(self, Self::FileRead { .. } | Self::FileParse { .. })
    }
}

/// Convenience alias used throughout the archive crates.
pub type Result<T> = std::result::Result<T, ArchiveError>;
