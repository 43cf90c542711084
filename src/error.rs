//! Error types for the tarjem library.
//!
//! Two distinct error types reflect two distinct failure modes:
//!
//! * [`TarjemError`] — **Fatal**: the upload cannot proceed at all (bad range
//!   expression, unreadable PDF). Returned as `Err(TarjemError)` from the
//!   top-level [`crate::translate::translate_pdf`] entry point; no outcomes
//!   are produced.
//!
//! * [`TranslationError`] — **Non-fatal**: the translator call for a single
//!   page range failed (rejected key, rate limit, oversized input) but other
//!   ranges are fine. Recorded inside [`crate::outcome::RangeOutcome`] so
//!   callers can download whichever ranges succeeded.
//!
//! The separation lets callers decide their own tolerance: abort on the first
//! range failure, log and continue, or collect all errors for a post-run report.

use thiserror::Error;

/// All fatal errors returned by the tarjem library.
///
/// Range-level translator failures use [`TranslationError`] and are stored in
/// [`crate::outcome::RangeOutcome`] rather than propagated here.
#[derive(Debug, Error)]
pub enum TarjemError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// The page-range expression could not be parsed.
    #[error("Invalid page range expression '{expr}': {detail}\nExpected comma-separated page numbers or ranges, e.g. \"1,2,5-7\".")]
    InvalidRangeExpression { expr: String, detail: String },

    /// The uploaded bytes could not be opened as a PDF.
    #[error("Failed to open PDF: {detail}")]
    PdfOpen { detail: String },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Classification of a translator failure.
///
/// The kind drives nothing mechanically today (no retry policy), but callers
/// and log readers rely on it to tell a bad credential apart from a transient
/// network blip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TranslationErrorKind {
    /// Credential rejected (HTTP 401/403).
    Auth,
    /// Network-level failure: connect error, timeout, malformed response.
    Transport,
    /// HTTP 429 from the translator.
    RateLimit,
    /// The model rejected the request (unknown model, context overflow, …).
    Model,
    /// Anything else.
    Other,
}

impl std::fmt::Display for TranslationErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TranslationErrorKind::Auth => "auth",
            TranslationErrorKind::Transport => "transport",
            TranslationErrorKind::RateLimit => "rate_limit",
            TranslationErrorKind::Model => "model",
            TranslationErrorKind::Other => "other",
        };
        f.write_str(s)
    }
}

/// A non-fatal error for a single page range.
///
/// Stored inside [`crate::outcome::RangeOutcome`] when a range fails.
/// The overall request continues with the remaining ranges.
#[derive(Debug, Clone, Error, serde::Serialize, serde::Deserialize)]
#[error("Translation failed ({kind}): {message}")]
pub struct TranslationError {
    pub kind: TranslationErrorKind,
    /// The underlying cause, preserved verbatim for diagnostics.
    pub message: String,
}

impl TranslationError {
    pub fn new(kind: TranslationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}
