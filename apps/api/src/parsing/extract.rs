//! PDF text extractors — two interchangeable strategies behind [`TextExtractor`].
//!
//! - [`PdfExtractText`] (primary): `pdf-extract`, positions glyphs before emitting text,
//!   which keeps resume lines and word spacing closer to the rendered page.
//! - [`LopdfText`] (fallback): `lopdf` content-stream text, lower fidelity but tolerant
//!   of pages whose fonts or streams `pdf-extract` rejects.
//!
//! Both yield one fragment per page, in page order. A page with no text is `""`.

use std::panic::{self, AssertUnwindSafe};

use lopdf::Document;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("{extractor}: unreadable PDF: {message}")]
    Unreadable {
        extractor: &'static str,
        message: String,
    },

    #[error("{extractor}: extractor panicked on malformed PDF")]
    Panicked { extractor: &'static str },
}

/// Extracts page text from an in-memory PDF.
///
/// Implementations are stateless; one instance is shared across concurrent parses.
pub trait TextExtractor: Send + Sync {
    fn name(&self) -> &'static str;

    /// One text fragment per page, in page order.
    fn extract_pages(&self, pdf: &[u8]) -> Result<Vec<String>, ExtractError>;

    /// Page fragments joined with a single newline.
    fn extract(&self, pdf: &[u8]) -> Result<String, ExtractError> {
        Ok(self.extract_pages(pdf)?.join("\n"))
    }
}

/// Primary extractor backed by `pdf-extract`.
pub struct PdfExtractText;

impl TextExtractor for PdfExtractText {
    fn name(&self) -> &'static str {
        "pdf-extract"
    }

    fn extract_pages(&self, pdf: &[u8]) -> Result<Vec<String>, ExtractError> {
        // pdf-extract can panic on malformed fonts and streams
        let pages = guard_panics(self.name(), || {
            pdf_extract::extract_text_from_mem_by_pages(pdf).map_err(|e| {
                ExtractError::Unreadable {
                    extractor: self.name(),
                    message: e.to_string(),
                }
            })
        })?;
        debug!("pdf-extract read {} page(s)", pages.len());
        Ok(pages)
    }
}

/// Runs an extraction, turning a panic inside it into [`ExtractError::Panicked`].
pub fn guard_panics<F>(extractor: &'static str, f: F) -> Result<Vec<String>, ExtractError>
where
    F: FnOnce() -> Result<Vec<String>, ExtractError>,
{
    panic::catch_unwind(AssertUnwindSafe(f)).unwrap_or(Err(ExtractError::Panicked { extractor }))
}

/// Fallback extractor backed by `lopdf`.
pub struct LopdfText;

impl TextExtractor for LopdfText {
    fn name(&self) -> &'static str {
        "lopdf"
    }

    fn extract_pages(&self, pdf: &[u8]) -> Result<Vec<String>, ExtractError> {
        let doc = Document::load_mem(pdf).map_err(|e| ExtractError::Unreadable {
            extractor: self.name(),
            message: e.to_string(),
        })?;

        let pages: Vec<String> = doc
            .get_pages()
            .into_keys()
            .map(|page_num| {
                doc.extract_text(&[page_num]).unwrap_or_else(|e| {
                    debug!("lopdf: no text on page {page_num}: {e}");
                    String::new()
                })
            })
            .collect();

        debug!("lopdf read {} page(s)", pages.len());
        Ok(pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::test_pdfs::{blank_pdf, single_page_pdf};

    struct Pages(Vec<&'static str>);

    impl TextExtractor for Pages {
        fn name(&self) -> &'static str {
            "pages"
        }

        fn extract_pages(&self, _pdf: &[u8]) -> Result<Vec<String>, ExtractError> {
            Ok(self.0.iter().map(|p| p.to_string()).collect())
        }
    }

    #[test]
    fn test_extract_joins_pages_with_single_newline() {
        let extractor = Pages(vec!["Jane Doe", "", "Skills\nRust"]);
        assert_eq!(extractor.extract(b"").unwrap(), "Jane Doe\n\nSkills\nRust");
    }

    #[test]
    fn test_extract_with_no_pages_is_empty() {
        assert_eq!(Pages(vec![]).extract(b"").unwrap(), "");
    }

    #[test]
    fn test_guard_panics_reports_panic() {
        let err = guard_panics("flaky", || panic!("bad font widths")).unwrap_err();
        assert!(matches!(err, ExtractError::Panicked { extractor: "flaky" }));
    }

    #[test]
    fn test_guard_panics_passes_results_through() {
        let pages = guard_panics("steady", || Ok(vec!["Skills".to_string()])).unwrap();
        assert_eq!(pages, vec!["Skills"]);
    }

    #[test]
    fn test_lopdf_zero_page_document() {
        let pages = LopdfText.extract_pages(&blank_pdf()).unwrap();
        assert!(pages.is_empty());
    }

    #[test]
    fn test_lopdf_single_page_document() {
        let pages = LopdfText
            .extract_pages(&single_page_pdf("Hello Resume"))
            .unwrap();
        assert_eq!(pages.len(), 1);
        assert!(pages[0].contains("Hello"), "got {:?}", pages[0]);
    }

    #[test]
    fn test_lopdf_rejects_garbage() {
        let err = LopdfText.extract_pages(b"this is not a pdf").unwrap_err();
        assert!(matches!(err, ExtractError::Unreadable { extractor: "lopdf", .. }));
    }

    #[test]
    fn test_pdf_extract_rejects_garbage() {
        let err = PdfExtractText
            .extract_pages(b"this is not a pdf")
            .unwrap_err();
        assert!(err.to_string().starts_with("pdf-extract"));
    }

    #[test]
    fn test_pdf_extract_single_page_document() {
        let pages = PdfExtractText
            .extract_pages(&single_page_pdf("Hello Resume"))
            .unwrap();
        assert_eq!(pages.len(), 1);
    }
}
