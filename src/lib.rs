//! # tarjem
//!
//! Translate selected page ranges of an Arabic PDF into English, producing
//! one downloadable Word document per requested range.
//!
//! ## Why this crate?
//!
//! Translating a scanned-in book or report page by page through a chat UI is
//! tedious: copy the text, paste the prompt, save the answer somewhere.
//! tarjem turns that into one upload — pick the page ranges, hand over an
//! API key, and get a `.docx` per range back, each with a heading naming the
//! pages it covers.
//!
//! ## Pipeline Overview
//!
//! ```text
//! PDF upload
//!  │
//!  ├─ 1. Ranges    parse "1,2,5-7" into ordered closed intervals
//!  ├─ 2. Extract   embedded text per page (pdf-extract, spawn_blocking)
//!  ├─ 3. Translate one chat-completion call per range (gpt-4o by default)
//!  ├─ 4. Package   heading + translation as a .docx (docx-rs)
//!  ├─ 5. Register  store bytes under an unguessable id for download
//!  └─ 6. Report    per-range outcomes, in request order
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tarjem::{translate_pdf, ArtifactRegistry, TranslationConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let registry = ArtifactRegistry::new();
//!     let config = TranslationConfig::builder("sk-...").build()?;
//!
//!     let pdf = std::fs::read("kitab.pdf")?;
//!     let report = translate_pdf(pdf, Some("1,3-5"), &config, &registry).await?;
//!
//!     for outcome in &report.outcomes {
//!         match &outcome.result {
//!             Ok(text) => println!("pages {}: {} chars translated", outcome.interval, text.len()),
//!             Err(e) => eprintln!("pages {}: {}", outcome.interval, e),
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Failure model
//!
//! A bad range expression or unreadable PDF fails the whole request
//! ([`TarjemError`]). Translator failures are per range
//! ([`TranslationError`] inside the outcome): the remaining ranges still
//! translate, and the caller renders a mixed result list.
//!
//! ## Feature Flags
//!
//! | Feature  | Default | Description |
//! |----------|---------|-------------|
//! | `server` | on      | Enables the `tarjem` web server binary (axum + clap + tracing-subscriber) |
//!
//! Disable `server` when using only the library:
//! ```toml
//! tarjem = { version = "0.3", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod error;
pub mod outcome;
pub mod pipeline;
pub mod prompts;
pub mod ranges;
pub mod registry;
pub mod translate;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{TranslationConfig, TranslationConfigBuilder, DEFAULT_FILE_PREFIX, DEFAULT_MODEL};
pub use error::{TarjemError, TranslationError, TranslationErrorKind};
pub use outcome::{RangeOutcome, TranslationReport, TranslationStats};
pub use ranges::{parse_range_expr, render_range_expr, Interval};
pub use registry::{Artifact, ArtifactId, ArtifactRegistry};
pub use translate::translate_pdf;

/// MIME type of packaged artifacts.
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
