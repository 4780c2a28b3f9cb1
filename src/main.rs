use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;
use upcheck::{
    parse_pending, parse_uploaded, reconcile_parsed, render, write_report, MatchConfig,
    OutputFormat, ReconciliationReport,
};

/// Upcheck - reconciles a pending-upload manifest against an upload log
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Visibility marker prefix expected on pending filenames
    #[arg(long, env = "UPCHECK_MARKER", global = true)]
    marker: Option<String>,

    /// Filename suffix a pending entry must carry
    #[arg(long, env = "UPCHECK_SUFFIX", global = true)]
    suffix: Option<String>,

    /// Literal token opening an upload-log fragment
    #[arg(long, env = "UPCHECK_UPLOAD_LITERAL", global = true)]
    upload_literal: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compare the two manifests and report found and missing files
    Files {
        /// Path to the pending manifest
        pending: PathBuf,

        /// Path to the upload log
        uploaded: PathBuf,

        /// Write the full plain-text report to this path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format for the missing-file listing
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,

        /// List matched files as well
        #[arg(long)]
        show_found: bool,

        /// Suppress the missing-file listing
        #[arg(long)]
        hide_missing: bool,
    },

    /// Quick comparison with a one-line summary
    Quick {
        /// Path to the pending manifest
        pending: PathBuf,

        /// Path to the upload log
        uploaded: PathBuf,

        /// Write the full plain-text report to this path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl Cli {
    fn match_config(&self) -> MatchConfig {
        let mut config = MatchConfig::default();
        if let Some(marker) = &self.marker {
            config.marker = marker.clone();
        }
        if let Some(suffix) = &self.suffix {
            config.suffix = suffix.clone();
        }
        if let Some(upload_literal) = &self.upload_literal {
            config.upload_literal = upload_literal.clone();
        }
        config
    }
}

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();
    let config = cli.match_config();

    match &cli.command {
        Command::Files {
            pending,
            uploaded,
            output,
            format,
            show_found,
            hide_missing,
        } => run_files(
            pending,
            uploaded,
            output.as_deref(),
            *format,
            *show_found,
            *hide_missing,
            &config,
        ),
        Command::Quick {
            pending,
            uploaded,
            output,
        } => run_quick(pending, uploaded, output.as_deref(), &config),
    }
}

fn compare(
    pending_path: &Path,
    uploaded_path: &Path,
    config: &MatchConfig,
) -> Result<ReconciliationReport> {
    let pending = parse_pending(pending_path, config)?;
    let uploaded = parse_uploaded(uploaded_path, config)?;

    if pending.skipped > 0 {
        debug!(
            skipped = pending.skipped,
            "Skipped non-qualifying lines in pending manifest"
        );
    }

    Ok(reconcile_parsed(&pending, &uploaded, config))
}

fn print_statistics(report: &ReconciliationReport) {
    println!("\nResults:");
    println!("   Total pending:  {}", report.total_pending);
    println!("   Total uploaded: {}", report.total_uploaded);
    println!("   Found:          {}", report.found_count);
    println!("   Missing:        {}", report.missing_count);
    println!("   Match rate:     {:.1}%", report.match_rate());
}

fn run_files(
    pending_path: &Path,
    uploaded_path: &Path,
    output: Option<&Path>,
    format: OutputFormat,
    show_found: bool,
    hide_missing: bool,
    config: &MatchConfig,
) -> Result<()> {
    println!("Comparing manifests...");
    let report = compare(pending_path, uploaded_path, config)?;

    print_statistics(&report);

    if show_found && !report.found_files.is_empty() {
        println!("\nFound files (first 10):");
        for (i, found) in report.found_files.iter().take(10).enumerate() {
            println!("   {:>2}. {} -> {}", i + 1, found.pending, found.uploaded);
        }
        if report.found_files.len() > 10 {
            println!("   ... and {} more", report.found_files.len() - 10);
        }
    }

    match format {
        OutputFormat::Json | OutputFormat::Yaml => {
            println!("\n{}", render(&report, format)?);
        }
        OutputFormat::Table | OutputFormat::Simple => {
            if !hide_missing {
                if report.missing_files.is_empty() {
                    println!("\nAll pending files have been uploaded.");
                } else {
                    println!("\n{}", render(&report, format)?);
                }
            }
        }
    }

    if let Some(output) = output {
        write_report(&report, output)?;
        println!("\nFull report written to {}", output.display());
    }

    Ok(())
}

fn run_quick(
    pending_path: &Path,
    uploaded_path: &Path,
    output: Option<&Path>,
    config: &MatchConfig,
) -> Result<()> {
    let report = compare(pending_path, uploaded_path, config)?;

    println!(
        "Pending: {} | Uploaded: {} | Found: {} | Missing: {}",
        report.total_pending, report.total_uploaded, report.found_count, report.missing_count
    );
    println!("Match rate: {:.1}%", report.match_rate());

    if report.missing_files.is_empty() {
        println!("All pending files have been uploaded.");
    } else {
        println!("\nMissing files ({}):", report.missing_count);
        for name in &report.missing_files {
            println!("   {name}");
        }
    }

    if let Some(output) = output {
        write_report(&report, output)?;
        println!("\nFull report written to {}", output.display());
    }

    Ok(())
}
