pub mod analyze;
pub mod chart;
pub mod error;
pub mod extractor;
pub mod models;
pub mod normalize;
pub mod pattern;
pub mod report;
pub mod tokenize;

pub use analyze::{
    analyze_folder, analyze_folder_with, analyze_text, analyze_texts, discover_pdf_files,
    prepare_phrase,
};
pub use chart::{BarChart, DEFAULT_CHART_WIDTH};
pub use error::{AnalyzeError, Result};
pub use extractor::{extract_document_text, LopdfExtractor, PageText, PdfExtractor};
pub use models::{
    AnalysisOptions, AnalysisReport, ResultRow, SkippedPdf, DEFAULT_REPORT_FILE_NAME,
};
pub use normalize::{normalize, LETTERFORM_SUBSTITUTIONS};
pub use pattern::{build_pattern, count_occurrences, PhraseMatcher};
pub use report::{
    default_report_path, render_report, render_text_report, write_report, ReportFormat, TextReport,
};
pub use tokenize::{tokenize, word_count};
