//! Shared building blocks for the X archive converter.
//!
//! Holds the canonical tweet model and statistics types, the error taxonomy,
//! timestamp parsing and display, presentation formatting, and the
//! command-line settings.

pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;
pub mod time_utils;
