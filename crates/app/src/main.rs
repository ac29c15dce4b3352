use chrono::Utc;
use clap::{Parser, ValueEnum};
use pdf_phrase_core::{
    analyze_folder, default_report_path, write_report, AnalysisOptions, BarChart, ReportFormat,
    DEFAULT_CHART_WIDTH, DEFAULT_REPORT_FILE_NAME,
};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "pdf-phrase", version)]
#[command(about = "Count a phrase across a folder of PDFs with Persian-aware normalization")]
struct Cli {
    /// Folder that contains the PDFs.
    #[arg(long, env = "PDF_PHRASE_FOLDER")]
    folder: PathBuf,

    /// Phrase to count, e.g. "هوش مصنوعی".
    #[arg(long, env = "PDF_PHRASE")]
    phrase: String,

    /// Report destination. Defaults to results.txt (or results.json) inside the folder.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Report format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Also scan subfolders.
    #[arg(long, default_value_t = false)]
    recursive: bool,

    /// Skip printing the bar chart.
    #[arg(long, default_value_t = false)]
    no_chart: bool,

    /// Width of the longest bar in the chart.
    #[arg(long, default_value_t = DEFAULT_CHART_WIDTH)]
    chart_width: usize,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable per-document breakdown
    Text,
    /// Machine-readable JSON
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(value: OutputFormat) -> Self {
        match value {
            OutputFormat::Text => ReportFormat::Text,
            OutputFormat::Json => ReportFormat::Json,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app_version = env!("CARGO_PKG_VERSION");

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer())
        .init();

    let cli = Cli::parse();
    info!(
        version = app_version,
        started_at = %Utc::now().to_rfc3339(),
        "pdf-phrase boot"
    );

    let format = ReportFormat::from(cli.format);
    let options = AnalysisOptions {
        recursive: cli.recursive,
        report_file_name: DEFAULT_REPORT_FILE_NAME.to_string(),
    };
    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| default_report_path(&cli.folder, &options, format));

    info!(folder = %cli.folder.display(), phrase = %cli.phrase, recursive = cli.recursive, "analyzing");

    let folder = cli.folder.clone();
    let phrase = cli.phrase.clone();
    let report_path = output.clone();
    let report = tokio::task::spawn_blocking(move || {
        let report = analyze_folder(&folder, &phrase, &options)?;
        write_report(&report, &report_path, format)?;
        Ok::<_, pdf_phrase_core::AnalyzeError>(report)
    })
    .await??;

    if !report.skipped_files.is_empty() {
        warn!(
            "skipped_files={} for folder={}",
            report.skipped_files.len(),
            cli.folder.display()
        );
        for skipped in &report.skipped_files {
            warn!(path = %skipped.path.display(), reason = %skipped.reason, "unreadable pdf counted as empty");
        }
    }

    info!(
        documents = report.rows.len(),
        matched_documents = report.documents_with_matches(),
        total_words = report.total_words(),
        total_occurrences = report.total_occurrences,
        "analysis finished"
    );

    if !cli.no_chart {
        print!("{}", BarChart::from_report(&report).render(cli.chart_width));
        println!();
    }

    println!(
        "total occurrences of «{}»: {}",
        report.phrase, report.total_occurrences
    );
    println!("report written to {}", output.display());

    Ok(())
}
