//! Data ingestion layer for the X archive converter.
//!
//! Responsible for discovering and reading archive script files, normalizing
//! raw tweet objects, aggregating statistics and running the top-level
//! analysis pipeline.

pub mod aggregator;
pub mod analysis;
pub mod normalizer;
pub mod payload;
pub mod reader;

pub use archive_core as core;
