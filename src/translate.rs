//! The translation orchestrator — the library's primary entry point.
//!
//! One call handles one uploaded PDF: resolve the requested page ranges,
//! extract each range's embedded text, translate it, package the result as a
//! Word document, register the document for download, and report per-range
//! outcomes in request order.
//!
//! Failure semantics are two-tier. A bad range expression or an unreadable
//! PDF aborts the whole request before any translator call. Once ranges are
//! in flight, each one succeeds or fails on its own: a rejected credential on
//! range two does not stop range three, and the caller gets a mixed outcome
//! list to render.

use crate::config::TranslationConfig;
use crate::error::TarjemError;
use crate::outcome::{RangeOutcome, TranslationReport, TranslationStats};
use crate::pipeline::{extract, llm::TranslatorClient, package};
use crate::ranges::{parse_range_expr, Interval};
use crate::registry::ArtifactRegistry;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Translate the requested page ranges of an uploaded PDF.
///
/// # Arguments
/// * `pdf_bytes`  — the raw uploaded PDF
/// * `range_expr` — page-range expression (`"1,2,5-7"`); `None` or empty
///   means the whole document as a single range
/// * `config`     — credential, model, filename prefix, timeout
/// * `registry`   — where packaged documents are stored for download
///
/// # Returns
/// `Ok(TranslationReport)` with one [`RangeOutcome`] per requested range
/// that contained extractable text, in request order. Ranges with no text
/// are skipped entirely (logged, no outcome). Translator failures appear as
/// `err` outcomes without aborting the remaining ranges.
///
/// # Errors
/// Returns `Err(TarjemError)` only for request-level failures:
/// - the range expression does not parse
/// - the bytes are not a readable PDF
pub async fn translate_pdf(
    pdf_bytes: Vec<u8>,
    range_expr: Option<&str>,
    config: &TranslationConfig,
    registry: &ArtifactRegistry,
) -> Result<TranslationReport, TarjemError> {
    let total_start = Instant::now();
    info!(bytes = pdf_bytes.len(), "Starting translation request");

    // ── Step 1: open the PDF once ────────────────────────────────────────
    let extract_start = Instant::now();
    let pages = extract::extract_pages(pdf_bytes).await?;
    let extract_duration_ms = extract_start.elapsed().as_millis() as u64;
    let page_count = pages.page_count();

    // ── Step 2: resolve intervals ────────────────────────────────────────
    let intervals = resolve_intervals(range_expr, page_count)?;
    debug!(ranges = intervals.len(), "Resolved page ranges");

    let client = TranslatorClient::new(config)?;

    // ── Step 3: process each range in order ──────────────────────────────
    // Sequential by design: outcomes must be emitted in request order, and
    // a single upload rarely carries enough ranges to win from parallel
    // translator calls.
    let mut outcomes: Vec<RangeOutcome> = Vec::with_capacity(intervals.len());
    let mut skipped = 0usize;
    let mut translate_duration_ms = 0u64;

    for interval in &intervals {
        let Some(chunk) = pages.chunk(interval) else {
            info!(range = %interval, "Range has no extractable text, skipping");
            skipped += 1;
            continue;
        };

        let call_start = Instant::now();
        let result = client.translate(&chunk).await;
        translate_duration_ms += call_start.elapsed().as_millis() as u64;

        match result {
            Ok(translation) => {
                let artifact = package::package_translation(
                    interval,
                    &translation,
                    &config.file_prefix,
                )?;
                let artifact_id = registry.put(artifact);
                info!(range = %interval, %artifact_id, "Range translated");
                outcomes.push(RangeOutcome::ok(*interval, translation, artifact_id));
            }
            Err(e) => {
                warn!(range = %interval, kind = %e.kind, "Range translation failed: {}", e.message);
                outcomes.push(RangeOutcome::err(*interval, e));
            }
        }
    }

    let translated = outcomes.iter().filter(|o| o.is_ok()).count();
    let failed = outcomes.len() - translated;
    let stats = TranslationStats {
        page_count,
        requested_ranges: intervals.len(),
        translated_ranges: translated,
        failed_ranges: failed,
        skipped_ranges: skipped,
        total_duration_ms: total_start.elapsed().as_millis() as u64,
        extract_duration_ms,
        translate_duration_ms,
    };

    info!(
        translated,
        failed, skipped, "Translation request complete in {}ms", stats.total_duration_ms
    );

    Ok(TranslationReport { outcomes, stats })
}

/// Turn the optional range expression into the interval list.
///
/// Empty or absent means "all pages" — a single interval spanning the whole
/// document.
fn resolve_intervals(
    range_expr: Option<&str>,
    page_count: usize,
) -> Result<Vec<Interval>, TarjemError> {
    match range_expr.map(str::trim) {
        None | Some("") => Ok(vec![Interval::new(1, page_count.max(1))]),
        Some(expr) => parse_range_expr(expr),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_expression_means_whole_document() {
        assert_eq!(
            resolve_intervals(None, 3).unwrap(),
            vec![Interval::new(1, 3)]
        );
        assert_eq!(
            resolve_intervals(Some("  "), 5).unwrap(),
            vec![Interval::new(1, 5)]
        );
    }

    #[test]
    fn expression_takes_precedence() {
        assert_eq!(
            resolve_intervals(Some("2-2,2"), 9).unwrap(),
            vec![Interval::new(2, 2), Interval::new(2, 2)]
        );
    }

    #[test]
    fn bad_expression_is_fatal() {
        assert!(resolve_intervals(Some("abc"), 3).is_err());
    }
}
