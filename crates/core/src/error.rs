use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("pdf parse error: {0}")]
    PdfParse(String),

    #[error("regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("cannot read folder: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("search phrase is empty after normalization")]
    EmptyPhrase,

    #[error("folder does not exist or is not a directory: {0}")]
    FolderNotFound(String),

    #[error("no pdf files found in {0}")]
    NoDocuments(String),

    #[error("serialize error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T, E = AnalyzeError> = std::result::Result<T, E>;
