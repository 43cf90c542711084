//! Result types returned to the caller of [`crate::translate::translate_pdf`].

use crate::error::TranslationError;
use crate::ranges::Interval;
use crate::registry::ArtifactId;
use serde::{Deserialize, Serialize};

/// The per-range result record.
///
/// One outcome is emitted per requested interval that produced any
/// extractable text; intervals with nothing to translate are dropped
/// silently (logged, but absent from the list). Outcomes appear in the
/// order the intervals were requested.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangeOutcome {
    /// The page range this outcome covers.
    pub interval: Interval,
    /// Translated text on success, or the translator failure.
    pub result: Result<String, TranslationError>,
    /// Handle to the packaged document. `Some` iff the translation succeeded.
    pub artifact_id: Option<ArtifactId>,
}

impl RangeOutcome {
    pub fn ok(interval: Interval, translation: String, artifact_id: ArtifactId) -> Self {
        Self {
            interval,
            result: Ok(translation),
            artifact_id: Some(artifact_id),
        }
    }

    pub fn err(interval: Interval, error: TranslationError) -> Self {
        Self {
            interval,
            result: Err(error),
            artifact_id: None,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Everything a run produced: the ordered outcome list plus statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationReport {
    /// Per-range outcomes, in requested order.
    pub outcomes: Vec<RangeOutcome>,
    pub stats: TranslationStats,
}

/// Statistics about a translation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranslationStats {
    /// Page count of the uploaded PDF.
    pub page_count: usize,
    /// Number of intervals requested (parsed or defaulted).
    pub requested_ranges: usize,
    /// Ranges translated and packaged.
    pub translated_ranges: usize,
    /// Ranges where the translator call failed.
    pub failed_ranges: usize,
    /// Ranges dropped because they contained no extractable text.
    pub skipped_ranges: usize,
    /// Wall-clock time for the whole request.
    pub total_duration_ms: u64,
    /// Time spent opening the PDF and extracting page text.
    pub extract_duration_ms: u64,
    /// Time spent waiting on the translator.
    pub translate_duration_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{TranslationError, TranslationErrorKind};
    use crate::registry::ArtifactId;

    #[test]
    fn artifact_id_set_iff_ok() {
        let ok = RangeOutcome::ok(
            Interval::new(1, 3),
            "text".into(),
            ArtifactId::from("a1b2".to_string()),
        );
        assert!(ok.is_ok() && ok.artifact_id.is_some());

        let err = RangeOutcome::err(
            Interval::new(4, 4),
            TranslationError::new(TranslationErrorKind::Auth, "HTTP 401"),
        );
        assert!(!err.is_ok() && err.artifact_id.is_none());
    }
}
