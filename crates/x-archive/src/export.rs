use std::path::Path;

use archive_core::error::Result;
use archive_core::time_utils::DisplayClock;
use archive_data::analysis::AnalysisResult;
use archive_report::assembler::ReportAssembler;
use archive_report::writer::ReportWriter;
use tracing::info;

/// Assemble the three report sheets from `analysis` and hand them to `writer`.
pub fn export_report(
    analysis: &AnalysisResult,
    clock: DisplayClock,
    writer: &mut dyn ReportWriter,
    output: &Path,
) -> Result<()> {
    let report = ReportAssembler::new(clock).assemble(
        &analysis.tweets,
        &analysis.summary,
        &analysis.hashtags,
    );

    writer.write(&report, output)?;
    info!("Excel file exported successfully: {}", output.display());
    Ok(())
}
