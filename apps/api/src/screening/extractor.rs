//! Document text extraction. One payload in, page-ordered plain text out.

use std::panic::{self, AssertUnwindSafe};

use tracing::debug;

use crate::errors::DocumentParseError;

const PDF_MAGIC: &[u8] = b"%PDF-";

/// Pulls plain text out of an uploaded document.
///
/// `Ok(None)` means the document parsed but yielded no text at all (for example
/// an image-only scan). `Err` means the payload could not be parsed.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, payload: &[u8]) -> Result<Option<String>, DocumentParseError>;
}

/// PDF extractor backed by `pdf-extract`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract(&self, payload: &[u8]) -> Result<Option<String>, DocumentParseError> {
        if !payload.starts_with(PDF_MAGIC) {
            return Err(DocumentParseError::new("missing %PDF- header"));
        }

        // pdf-extract panics on some malformed inputs instead of returning an error.
        let pages = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem_by_pages(payload)
        }))
        .map_err(|_| DocumentParseError::new("PDF parser aborted on malformed input"))?
        .map_err(|e| DocumentParseError::new(e.to_string()))?;

        debug!(pages = pages.len(), "extracted PDF pages");
        Ok(join_pages(pages))
    }
}

/// Joins non-empty pages with a single newline. Blank pages are skipped, and
/// a document without any text collapses to `None`.
pub fn join_pages<I, S>(pages: I) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let kept: Vec<String> = pages
        .into_iter()
        .filter_map(|page| {
            let page = page.as_ref().trim();
            (!page.is_empty()).then(|| page.to_string())
        })
        .collect();

    if kept.is_empty() {
        None
    } else {
        Some(kept.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screening::test_fixtures::{pdf_with_pages, pdf_without_text};

    #[test]
    fn test_join_pages_preserves_order() {
        let joined = join_pages(["first page", "second page"]).unwrap();
        assert_eq!(joined, "first page\nsecond page");
    }

    #[test]
    fn test_join_pages_skips_blank_pages() {
        let joined = join_pages(["alpha", "", "   \n", "omega"]).unwrap();
        assert_eq!(joined, "alpha\nomega");
    }

    #[test]
    fn test_join_pages_all_blank_is_none() {
        assert_eq!(join_pages(["", "\n\n", " "]), None);
        assert_eq!(join_pages(Vec::<String>::new()), None);
    }

    #[test]
    fn test_non_pdf_payload_is_parse_error() {
        let err = PdfTextExtractor
            .extract(b"this is plainly not a document")
            .unwrap_err();
        assert!(err.reason.contains("%PDF-"));
    }

    #[test]
    fn test_truncated_pdf_is_parse_error() {
        let result = PdfTextExtractor.extract(b"%PDF-1.5\n%garbage with no objects");
        assert!(result.is_err());
    }

    #[test]
    fn test_extracts_text_in_page_order() {
        let pdf = pdf_with_pages(&["Experienced Python developer", "Machine learning projects"]);
        let text = PdfTextExtractor.extract(&pdf).unwrap().unwrap();

        let python = text.find("Python").expect("first page text missing");
        let machine = text.find("Machine").expect("second page text missing");
        assert!(python < machine);
    }

    #[test]
    fn test_pdf_without_text_is_sentinel() {
        let pdf = pdf_without_text();
        assert_eq!(PdfTextExtractor.extract(&pdf).unwrap(), None);
    }
}
