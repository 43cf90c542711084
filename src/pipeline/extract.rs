//! Embedded-text extraction: uploaded PDF bytes → per-page text.
//!
//! ## Why spawn_blocking?
//!
//! `pdf-extract` parses the whole document synchronously — content streams,
//! fonts, encodings. On a large PDF that is tens of milliseconds to seconds
//! of pure CPU, which would stall a Tokio worker thread. `spawn_blocking`
//! moves the parse onto the blocking pool, same as any CPU-heavy stage.
//!
//! ## Why extract every page up front?
//!
//! The document is parsed exactly once per upload, yielding the page count
//! and the text of all pages in a single pass. Interval slicing then becomes
//! a cheap in-memory operation, and overlapping ranges (`"1,1-3,2"` is legal)
//! never re-parse anything.
//!
//! Only embedded text is extracted. A scanned page has none and comes back
//! empty; OCR is out of scope.

use crate::error::TarjemError;
use crate::ranges::Interval;
use tracing::{debug, info, warn};

/// The text content of an opened PDF, one entry per page.
#[derive(Debug)]
pub struct PageTexts {
    pages: Vec<String>,
}

impl PageTexts {
    /// Number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Concatenated text for the pages of `interval`.
    ///
    /// Pages beyond the end of the document are skipped with a diagnostic;
    /// empty pages are dropped. Page text is trimmed and joined with a blank
    /// line. Returns `None` when the interval yields no text at all, so the
    /// caller can skip the range without a translator round-trip.
    pub fn chunk(&self, interval: &Interval) -> Option<String> {
        let mut parts: Vec<&str> = Vec::new();
        for page_num in interval.start..=interval.end {
            let Some(text) = self.pages.get(page_num - 1) else {
                warn!(
                    page = page_num,
                    total = self.pages.len(),
                    "Page is out of range, skipping"
                );
                continue;
            };
            let trimmed = text.trim();
            if trimmed.is_empty() {
                debug!(page = page_num, "Page has no extractable text");
            } else {
                parts.push(trimmed);
            }
        }

        if parts.is_empty() {
            None
        } else {
            Some(parts.join("\n\n"))
        }
    }
}

/// Parse the uploaded bytes and extract the embedded text of every page.
///
/// # Errors
/// [`TarjemError::PdfOpen`] when the bytes are not a parseable PDF.
pub async fn extract_pages(pdf_bytes: Vec<u8>) -> Result<PageTexts, TarjemError> {
    let pages = tokio::task::spawn_blocking(move || {
        pdf_extract::extract_text_from_mem_by_pages(&pdf_bytes)
    })
    .await
    .map_err(|e| TarjemError::Internal(format!("Extraction task panicked: {e}")))?
    .map_err(|e| TarjemError::PdfOpen {
        detail: e.to_string(),
    })?;

    info!("PDF opened: {} pages", pages.len());
    Ok(PageTexts { pages })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(pages: &[&str]) -> PageTexts {
        PageTexts {
            pages: pages.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn joins_pages_with_blank_line() {
        let t = texts(&["  one \n", "two"]);
        assert_eq!(t.chunk(&Interval::new(1, 2)).unwrap(), "one\n\ntwo");
    }

    #[test]
    fn drops_empty_pages() {
        let t = texts(&["one", "   \n ", "three"]);
        assert_eq!(t.chunk(&Interval::new(1, 3)).unwrap(), "one\n\nthree");
    }

    #[test]
    fn all_empty_interval_yields_none() {
        let t = texts(&["", "  "]);
        assert!(t.chunk(&Interval::new(1, 2)).is_none());
    }

    #[test]
    fn out_of_range_pages_are_skipped() {
        let t = texts(&["one", "two", "three"]);
        // Straddles the end of the document: only in-range pages extracted.
        assert_eq!(t.chunk(&Interval::new(2, 9)).unwrap(), "two\n\nthree");
        // Entirely past the end: nothing.
        assert!(t.chunk(&Interval::new(5, 7)).is_none());
    }
}
