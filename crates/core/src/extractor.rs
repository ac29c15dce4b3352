use crate::error::{AnalyzeError, Result};
use lopdf::Document;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct PageText {
    pub number: u32,
    pub text: String,
}

pub trait PdfExtractor {
    fn extract_pages(&self, path: &Path) -> Result<Vec<PageText>>;

    /// All pages' text joined in page order.
    fn extract_text(&self, path: &Path) -> Result<String> {
        let pages = self.extract_pages(path)?;
        Ok(join_pages(&pages))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LopdfExtractor;

impl PdfExtractor for LopdfExtractor {
    fn extract_pages(&self, path: &Path) -> Result<Vec<PageText>> {
        let document =
            Document::load(path).map_err(|error| AnalyzeError::PdfParse(error.to_string()))?;

        let mut pages = Vec::new();
        for (page_no, _page_id) in document.get_pages() {
            let text = document
                .extract_text(&[page_no])
                .map_err(|error| AnalyzeError::PdfParse(format!("page {page_no}: {error}")))?;

            pages.push(PageText {
                number: page_no,
                text,
            });
        }

        Ok(pages)
    }
}

pub fn extract_document_text(path: &Path) -> Result<String> {
    LopdfExtractor.extract_text(path)
}

fn join_pages(pages: &[PageText]) -> String {
    let mut ordered = pages.iter().collect::<Vec<_>>();
    ordered.sort_by_key(|page| page.number);

    ordered
        .into_iter()
        .map(|page| page.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::{extract_document_text, join_pages, PageText, PdfExtractor};
    use crate::error::{AnalyzeError, Result};
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    struct FixedPages(Vec<PageText>);

    impl PdfExtractor for FixedPages {
        fn extract_pages(&self, _path: &Path) -> Result<Vec<PageText>> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn pages_are_joined_in_page_order() {
        let pages = vec![
            PageText {
                number: 2,
                text: "دنیا".to_string(),
            },
            PageText {
                number: 1,
                text: "سلام".to_string(),
            },
        ];

        assert_eq!(join_pages(&pages), "سلام\nدنیا");
    }

    #[test]
    fn extract_text_uses_the_page_listing() -> Result<(), Box<dyn std::error::Error>> {
        let extractor = FixedPages(vec![
            PageText {
                number: 1,
                text: "first".to_string(),
            },
            PageText {
                number: 2,
                text: String::new(),
            },
        ]);

        assert_eq!(extractor.extract_text(Path::new("x.pdf"))?, "first\n");
        Ok(())
    }

    #[test]
    fn broken_pdf_reports_a_parse_error() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("broken.pdf");
        fs::write(&path, b"%PDF-1.4\n%broken")?;

        let result = extract_document_text(&path);
        assert!(matches!(result, Err(AnalyzeError::PdfParse(_))));
        Ok(())
    }
}
