use crate::{
    build_pattern, count_occurrences, normalize, word_count, AnalysisOptions, AnalysisReport,
    AnalyzeError, LopdfExtractor, PdfExtractor, PhraseMatcher, ResultRow, SkippedPdf,
};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lists PDFs under `folder`, sorted by path.
///
/// An unreadable `folder` is an error; unreadable entries below it are skipped.
pub fn discover_pdf_files(folder: &Path, recursive: bool) -> Result<Vec<PathBuf>, AnalyzeError> {
    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut files = Vec::new();

    for item in WalkDir::new(folder).max_depth(max_depth) {
        let entry = match item {
            Ok(entry) => entry,
            Err(error) if error.depth() == 0 => return Err(error.into()),
            Err(_) => continue,
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let is_pdf = entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));

        if is_pdf {
            files.push(entry.path().to_path_buf());
        }
    }

    files.sort_unstable();
    Ok(files)
}

/// Normalizes the phrase and compiles it, rejecting phrases that are empty
/// once joiners, tatweel and whitespace are stripped.
pub fn prepare_phrase(phrase: &str) -> Result<PhraseMatcher, AnalyzeError> {
    build_pattern(&normalize(phrase))
}

/// Runs the normalize, tokenize and count steps for one document.
pub fn analyze_text(
    document: impl Into<String>,
    source_path: impl Into<String>,
    raw_text: &str,
    matcher: &PhraseMatcher,
) -> ResultRow {
    let normalized = normalize(raw_text);

    ResultRow {
        document: document.into(),
        source_path: source_path.into(),
        total_words: word_count(&normalized),
        occurrences: count_occurrences(matcher, &normalized),
    }
}

/// In-memory pipeline over `(document name, raw text)` pairs.
pub fn analyze_texts<'a, I>(phrase: &str, documents: I) -> Result<AnalysisReport, AnalyzeError>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let matcher = prepare_phrase(phrase)?;
    let rows = documents
        .into_iter()
        .map(|(name, text)| analyze_text(name, name, text, &matcher))
        .collect();

    Ok(AnalysisReport::new(matcher.phrase(), rows, Vec::new()))
}

pub fn analyze_folder(
    folder: &Path,
    phrase: &str,
    options: &AnalysisOptions,
) -> Result<AnalysisReport, AnalyzeError> {
    analyze_folder_with(folder, phrase, options, &LopdfExtractor)
}

/// Counts the phrase in every PDF under `folder`.
///
/// A file whose text cannot be extracted still gets a row with zero words
/// and zero occurrences, and is listed in `skipped_files` with the reason.
pub fn analyze_folder_with<E>(
    folder: &Path,
    phrase: &str,
    options: &AnalysisOptions,
    extractor: &E,
) -> Result<AnalysisReport, AnalyzeError>
where
    E: PdfExtractor + ?Sized,
{
    let matcher = prepare_phrase(phrase)?;

    if !folder.is_dir() {
        return Err(AnalyzeError::FolderNotFound(folder.display().to_string()));
    }

    let files = discover_pdf_files(folder, options.recursive)?;
    if files.is_empty() {
        return Err(AnalyzeError::NoDocuments(folder.display().to_string()));
    }

    let mut rows = Vec::with_capacity(files.len());
    let mut skipped_files = Vec::new();

    for path in files {
        let name = document_name(folder, &path);
        let text = match extractor.extract_text(&path) {
            Ok(text) => text,
            Err(error) => {
                skipped_files.push(SkippedPdf {
                    path: path.clone(),
                    reason: error.to_string(),
                });
                String::new()
            }
        };

        rows.push(analyze_text(name, path.to_string_lossy(), &text, &matcher));
    }

    Ok(AnalysisReport::new(matcher.phrase(), rows, skipped_files))
}

fn document_name(folder: &Path, path: &Path) -> String {
    if let Ok(relative) = path.strip_prefix(folder) {
        if relative.components().count() > 1 {
            return relative.to_string_lossy().to_string();
        }
    }

    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}
