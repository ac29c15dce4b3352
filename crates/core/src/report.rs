use crate::error::Result;
use crate::models::{AnalysisOptions, AnalysisReport};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl ReportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ReportFormat::Text => "txt",
            ReportFormat::Json => "json",
        }
    }
}

/// Human-readable report: per-document blocks, then the total, then any
/// files that could not be read.
pub struct TextReport<'a>(pub &'a AnalysisReport);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        let phrase = &report.phrase;

        writeln!(f, "Phrase: «{phrase}»")?;
        writeln!(f, "Generated at: {}", report.generated_at.to_rfc3339())?;
        writeln!(f)?;

        for row in &report.rows {
            writeln!(f, "{}:", row.document)?;
            writeln!(f, "  total words: {}", row.total_words)?;
            writeln!(f, "  occurrences of «{phrase}»: {}", row.occurrences)?;
            writeln!(f)?;
        }

        writeln!(
            f,
            "Total occurrences of «{phrase}» across all PDFs: {}",
            report.total_occurrences
        )?;

        if !report.skipped_files.is_empty() {
            writeln!(f)?;
            writeln!(f, "Unreadable files (counted as empty):")?;
            for skipped in &report.skipped_files {
                writeln!(f, "  {}: {}", skipped.path.display(), skipped.reason)?;
            }
        }

        Ok(())
    }
}

pub fn render_text_report(report: &AnalysisReport) -> String {
    TextReport(report).to_string()
}

pub fn render_report(report: &AnalysisReport, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(render_text_report(report)),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

pub fn write_report(report: &AnalysisReport, path: &Path, format: ReportFormat) -> Result<()> {
    let rendered = render_report(report, format)?;

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, rendered)?;
    Ok(())
}

/// `<folder>/<report_file_name>`, with the extension swapped to match `format`.
pub fn default_report_path(folder: &Path, options: &AnalysisOptions, format: ReportFormat) -> PathBuf {
    folder
        .join(&options.report_file_name)
        .with_extension(format.extension())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ResultRow, SkippedPdf};
    use tempfile::tempdir;

    fn sample_report() -> AnalysisReport {
        AnalysisReport::new(
            "سلام",
            vec![
                ResultRow {
                    document: "doc1.pdf".to_string(),
                    source_path: "/tmp/doc1.pdf".to_string(),
                    total_words: 3,
                    occurrences: 2,
                },
                ResultRow {
                    document: "doc2.pdf".to_string(),
                    source_path: "/tmp/doc2.pdf".to_string(),
                    total_words: 1,
                    occurrences: 1,
                },
            ],
            Vec::new(),
        )
    }

    #[test]
    fn text_report_lists_documents_then_total() {
        let report = sample_report();
        let text = render_text_report(&report);

        assert!(text.starts_with("Phrase: «سلام»\n"));
        let doc1 = text.find("doc1.pdf:\n  total words: 3\n  occurrences of «سلام»: 2\n");
        let doc2 = text.find("doc2.pdf:\n  total words: 1\n  occurrences of «سلام»: 1\n");
        let total = text.find("Total occurrences of «سلام» across all PDFs: 3\n");

        assert!(doc1.is_some() && doc2.is_some() && total.is_some());
        assert!(doc1 < doc2 && doc2 < total);
        assert!(!text.contains("Unreadable files"));
    }

    #[test]
    fn text_report_displays_like_the_rendered_string() {
        let report = sample_report();
        let displayed = format!("{}", TextReport(&report));

        assert_eq!(displayed, render_text_report(&report));
        assert!(displayed.ends_with("across all PDFs: 3\n"));
    }

    #[test]
    fn text_report_mentions_unreadable_files() {
        let mut report = sample_report();
        report.skipped_files.push(SkippedPdf {
            path: PathBuf::from("/tmp/bad.pdf"),
            reason: "pdf parse error: invalid file header".to_string(),
        });

        let text = render_text_report(&report);
        assert!(text.contains("Unreadable files (counted as empty):\n"));
        assert!(text.contains("bad.pdf: pdf parse error: invalid file header"));
    }

    #[test]
    fn json_report_carries_rows_and_total() -> Result<(), Box<dyn std::error::Error>> {
        let report = sample_report();
        let json = render_report(&report, ReportFormat::Json)?;
        let value: serde_json::Value = serde_json::from_str(&json)?;

        assert_eq!(value["phrase"], "سلام");
        assert_eq!(value["total_occurrences"], 3);
        assert_eq!(value["rows"][1]["document"], "doc2.pdf");
        assert_eq!(value["rows"][0]["total_words"], 3);
        Ok(())
    }

    #[test]
    fn report_is_written_to_disk() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("out").join("results.txt");

        write_report(&sample_report(), &path, ReportFormat::Text)?;

        let written = fs::read_to_string(&path)?;
        assert!(written.contains("across all PDFs: 3"));
        Ok(())
    }

    #[test]
    fn default_path_follows_format() {
        let options = AnalysisOptions::default();
        let folder = Path::new("/data/pdfs");

        assert_eq!(
            default_report_path(folder, &options, ReportFormat::Text),
            PathBuf::from("/data/pdfs/results.txt")
        );
        assert_eq!(
            default_report_path(folder, &options, ReportFormat::Json),
            PathBuf::from("/data/pdfs/results.json")
        );
    }
}
