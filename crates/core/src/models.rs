use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_REPORT_FILE_NAME: &str = "results.txt";

/// Per-document statistics, in discovery order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResultRow {
    pub document: String,
    pub source_path: String,
    pub total_words: usize,
    pub occurrences: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SkippedPdf {
    pub path: PathBuf,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub phrase: String,
    pub generated_at: DateTime<Utc>,
    pub rows: Vec<ResultRow>,
    pub total_occurrences: usize,
    pub skipped_files: Vec<SkippedPdf>,
}

impl AnalysisReport {
    pub fn new(
        phrase: impl Into<String>,
        rows: Vec<ResultRow>,
        skipped_files: Vec<SkippedPdf>,
    ) -> Self {
        let total_occurrences = rows.iter().map(|row| row.occurrences).sum();
        Self {
            phrase: phrase.into(),
            generated_at: Utc::now(),
            rows,
            total_occurrences,
            skipped_files,
        }
    }

    pub fn total_words(&self) -> usize {
        self.rows.iter().map(|row| row.total_words).sum()
    }

    pub fn documents_with_matches(&self) -> usize {
        self.rows.iter().filter(|row| row.occurrences > 0).count()
    }
}

#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    pub recursive: bool,
    pub report_file_name: String,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            recursive: false,
            report_file_name: DEFAULT_REPORT_FILE_NAME.to_string(),
        }
    }
}
