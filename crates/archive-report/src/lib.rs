//! Report layer for the X archive converter.
//!
//! Arranges normalized tweets and aggregate statistics into the `Tweets`,
//! `Summary` and `Hashtags` sheets and writes them as an Excel workbook via
//! [`rust_xlsxwriter`].

pub mod assembler;
pub mod sheet;
pub mod writer;

pub use archive_core as core;
