mod bootstrap;
mod console;
mod export;

use std::process::ExitCode;

use anyhow::Result;
use archive_core::settings::Settings;
use archive_core::time_utils::DisplayClock;
use archive_data::aggregator::TweetAggregator;
use archive_data::analysis::analyze_archive;
use archive_report::writer::XlsxReportWriter;
use clap::error::ErrorKind;
use clap::Parser;

fn main() -> ExitCode {
    let settings = match Settings::try_parse() {
        Ok(settings) => settings,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(usage_exit_code(&e));
        }
    };

    if let Err(e) = bootstrap::setup_logging(settings.effective_log_level()) {
        eprintln!("Error: {:#}", e);
        return ExitCode::FAILURE;
    }

    match run(&settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Running without arguments shows usage, which is not a failure.
fn usage_exit_code(e: &clap::Error) -> u8 {
    match e.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => 0,
        _ => u8::try_from(e.exit_code()).unwrap_or(1),
    }
}

fn run(settings: &Settings) -> Result<()> {
    tracing::info!("X Archive Parser v{} starting", env!("CARGO_PKG_VERSION"));

    console::print_banner(&settings.archive_path, &settings.output_file);

    let analysis = analyze_archive(&settings.archive_path)?;
    console::print_load_report(analysis.files_found, &analysis.failures);

    if analysis.is_empty() {
        tracing::warn!("No tweets found in {}", settings.archive_path.display());
        println!("No tweets found in the archive");
        return Ok(());
    }

    console::print_statistics(&TweetAggregator::console_breakdown(&analysis.tweets));

    println!();
    println!("Exporting to Excel...");

    let clock = DisplayClock::from_settings(&settings.timezone, &settings.time_format);
    tracing::debug!(
        "Rendering dates in {} ({}-hour clock)",
        clock.timezone().name(),
        if clock.is_twelve_hour() { 12 } else { 24 }
    );

    export::export_report(
        &analysis,
        clock,
        &mut XlsxReportWriter::new(),
        &settings.output_file,
    )?;

    console::print_export_success(&settings.output_file);
    Ok(())
}
