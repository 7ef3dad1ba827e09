//! Serialization of a [`Report`] to disk.

use std::path::{Path, PathBuf};

use archive_core::error::{ArchiveError, Result};
use rust_xlsxwriter::{Format, Workbook, XlsxError};
use tracing::debug;

use crate::sheet::{Cell, Report};

/// Destination for an assembled report.
pub trait ReportWriter {
    fn write(&mut self, report: &Report, path: &Path) -> Result<()>;
}

// ── XlsxReportWriter ──────────────────────────────────────────────────────────

/// Writes each [`crate::sheet::Sheet`] as an Excel worksheet, header row in bold.
#[derive(Debug, Default)]
pub struct XlsxReportWriter;

impl XlsxReportWriter {
    pub fn new() -> Self {
        Self
    }

    fn build_workbook(report: &Report) -> std::result::Result<Workbook, XlsxError> {
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();

        for sheet in &report.sheets {
            let worksheet = workbook.add_worksheet();
            worksheet.set_name(&sheet.name)?;

            for (col, width) in sheet.column_widths.iter().enumerate() {
                worksheet.set_column_width(col as u16, *width)?;
            }

            for (row_idx, row) in sheet.rows.iter().enumerate() {
                for (col_idx, cell) in row.iter().enumerate() {
                    let (r, c) = (row_idx as u32, col_idx as u16);
                    match cell {
                        Cell::Text(s) if row_idx == 0 => {
                            worksheet.write_string_with_format(r, c, s, &header_format)?;
                        }
                        Cell::Text(s) => {
                            worksheet.write_string(r, c, s)?;
                        }
                        Cell::Number(n) => {
                            worksheet.write_number(r, c, *n)?;
                        }
                    }
                }
            }

            debug!("Sheet \"{}\": {} rows", sheet.name, sheet.rows.len());
        }

        Ok(workbook)
    }
}

impl ReportWriter for XlsxReportWriter {
    fn write(&mut self, report: &Report, path: &Path) -> Result<()> {
        let mut workbook =
            Self::build_workbook(report).map_err(|e| ArchiveError::Export(e.to_string()))?;
        workbook
            .save(path)
            .map_err(|e| ArchiveError::Export(format!("{}: {}", path.display(), e)))
    }
}

// ── MemoryReportWriter ────────────────────────────────────────────────────────

/// Keeps written reports in memory instead of touching the filesystem.
#[derive(Debug, Default)]
pub struct MemoryReportWriter {
    pub written: Vec<(PathBuf, Report)>,
}

impl MemoryReportWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently written report.
    pub fn last(&self) -> Option<&Report> {
        self.written.last().map(|(_, report)| report)
    }
}

impl ReportWriter for MemoryReportWriter {
    fn write(&mut self, report: &Report, path: &Path) -> Result<()> {
        self.written.push((path.to_path_buf(), report.clone()));
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
