//! Web server binary for tarjem.
//!
//! A thin shim over the library crate: an upload form, the translation
//! endpoint, and the artifact download endpoint. Rendering is deliberately
//! plain inline HTML — the value is in the pipeline, not the front-end.

use anyhow::{Context, Result};
use axum::extract::{DefaultBodyLimit, Multipart, Path, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tarjem::{
    translate_pdf, ArtifactId, ArtifactRegistry, TarjemError, TranslationConfig, DOCX_MIME,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Uploads above this size are rejected outright.
const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

/// Translate Arabic PDF page ranges into English Word documents.
#[derive(Parser, Debug)]
#[command(
    name = "tarjem",
    version,
    about = "Web server that translates Arabic PDF page ranges into English .docx files",
    long_about = "Serves an upload form and a translation endpoint. Each requested page range \
is extracted from the uploaded PDF, translated through an OpenAI chat model, and packaged \
as a downloadable Word document. The API key is supplied per upload and never stored."
)]
struct Cli {
    /// Listening port.
    #[arg(short, long, env = "PORT", default_value_t = 5000)]
    port: u16,

    /// Bind address.
    #[arg(long, env = "TARJEM_BIND", default_value = "0.0.0.0")]
    bind: String,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "TARJEM_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "TARJEM_QUIET")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .init();

    let registry = Arc::new(ArtifactRegistry::new());

    let app = Router::new()
        .route("/", get(index).post(upload))
        .route("/download/:artifact_id", get(download))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(registry);

    let addr: SocketAddr = format!("{}:{}", cli.bind, cli.port)
        .parse()
        .with_context(|| format!("Invalid bind address {}:{}", cli.bind, cli.port))?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Listening on http://{addr}");

    axum::serve(listener, app).await.context("Server failed")?;
    Ok(())
}

// ── Handlers ─────────────────────────────────────────────────────────────

/// `GET /` — the upload form.
async fn index() -> Html<String> {
    Html(page(
        "tarjem",
        r#"<h1>Translate an Arabic PDF</h1>
<form method="post" enctype="multipart/form-data">
  <p><label>PDF file <input type="file" name="pdf_file" accept="application/pdf" required></label></p>
  <p><label>OpenAI API key <input type="password" name="openai_key" required></label></p>
  <p><label>Pages (e.g. <code>1,2,5-7</code>; empty = all) <input type="text" name="pages"></label></p>
  <p><label>Model <input type="text" name="model" placeholder="gpt-4o"></label></p>
  <p><label>Filename prefix <input type="text" name="file_prefix" placeholder="translation"></label></p>
  <p><button type="submit">Translate</button></p>
</form>"#,
    ))
}

/// Fields collected from the multipart upload form.
#[derive(Default)]
struct UploadForm {
    pdf_file: Option<Vec<u8>>,
    openai_key: Option<String>,
    pages: Option<String>,
    model: Option<String>,
    file_prefix: Option<String>,
}

/// `POST /` — run the translation pipeline and render the result listing.
async fn upload(
    State(registry): State<Arc<ArtifactRegistry>>,
    mut multipart: Multipart,
) -> Response {
    let mut form = UploadForm::default();

    while let Ok(Some(field)) = multipart.next_field().await {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        match name.as_str() {
            "pdf_file" => match field.bytes().await {
                Ok(bytes) if !bytes.is_empty() => form.pdf_file = Some(bytes.to_vec()),
                Ok(_) => {}
                Err(e) => return flash_error(&format!("Failed to read upload: {e}")),
            },
            "openai_key" | "pages" | "model" | "file_prefix" => {
                let value = match field.text().await {
                    Ok(v) => v,
                    Err(e) => return flash_error(&format!("Failed to read form field: {e}")),
                };
                let value = value.trim().to_string();
                if value.is_empty() {
                    continue;
                }
                match name.as_str() {
                    "openai_key" => form.openai_key = Some(value),
                    "pages" => form.pages = Some(value),
                    "model" => form.model = Some(value),
                    _ => form.file_prefix = Some(value),
                }
            }
            _ => {}
        }
    }

    let Some(pdf_bytes) = form.pdf_file else {
        return flash_error("No PDF file uploaded.");
    };
    let Some(openai_key) = form.openai_key else {
        return flash_error("No API key supplied.");
    };

    let mut builder = TranslationConfig::builder(openai_key);
    if let Some(model) = form.model {
        builder = builder.model(model);
    }
    if let Some(prefix) = form.file_prefix {
        builder = builder.file_prefix(prefix);
    }
    let config = match builder.build() {
        Ok(c) => c,
        Err(e) => return flash_error(&e.to_string()),
    };

    match translate_pdf(pdf_bytes, form.pages.as_deref(), &config, &registry).await {
        Ok(report) => results_page(&report).into_response(),
        Err(e @ TarjemError::InvalidRangeExpression { .. })
        | Err(e @ TarjemError::PdfOpen { .. }) => flash_error(&e.to_string()),
        Err(e) => {
            error!("Translation request failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(page("Error", "<h1>Internal error</h1>")),
            )
                .into_response()
        }
    }
}

/// `GET /download/{artifact_id}` — stream the packaged document.
async fn download(
    State(registry): State<Arc<ArtifactRegistry>>,
    Path(artifact_id): Path<String>,
) -> Response {
    let id = ArtifactId::from(artifact_id);
    match registry.get(&id) {
        Some(artifact) => (
            [
                (header::CONTENT_TYPE, DOCX_MIME.to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename={}", artifact.filename),
                ),
            ],
            artifact.bytes,
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, "File not found").into_response(),
    }
}

// ── Rendering ────────────────────────────────────────────────────────────

/// Render the per-range result listing.
fn results_page(report: &tarjem::TranslationReport) -> Html<String> {
    let mut rows = String::new();
    for outcome in &report.outcomes {
        let label = escape(&outcome.interval.label());
        match (&outcome.result, &outcome.artifact_id) {
            (Ok(text), Some(id)) => rows.push_str(&format!(
                "<tr><td>{label}</td><td><pre>{}</pre></td>\
                 <td><a href=\"/download/{id}\">Download .docx</a></td></tr>\n",
                escape(text),
            )),
            (Err(e), _) => rows.push_str(&format!(
                "<tr><td>{label}</td><td class=\"err\">{}</td><td>—</td></tr>\n",
                escape(&e.to_string()),
            )),
            // artifact_id is Some iff the translation succeeded
            (Ok(_), None) => unreachable!("ok outcome without artifact id"),
        }
    }

    let body = format!(
        "<h1>Translation results</h1>\
         <p>{} of {} ranges translated ({} skipped, no extractable text)</p>\
         <table border=\"1\" cellpadding=\"6\">\
         <tr><th>Pages</th><th>Translation</th><th>Download</th></tr>\n{rows}</table>\
         <p><a href=\"/\">Translate another PDF</a></p>",
        report.stats.translated_ranges, report.stats.requested_ranges, report.stats.skipped_ranges,
    );
    Html(page("Results — tarjem", &body))
}

/// Flash-style request-level error page.
fn flash_error(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Html(page(
            "Error — tarjem",
            &format!(
                "<h1>Upload failed</h1><p class=\"err\">{}</p><p><a href=\"/\">Back</a></p>",
                escape(message)
            ),
        )),
    )
        .into_response()
}

/// Wrap a body fragment in the shared page chrome.
fn page(title: &str, body: &str) -> String {
    format!(
        "<!doctype html><html><head><meta charset=\"utf-8\"><title>{}</title>\
         <style>body{{font-family:sans-serif;max-width:60em;margin:2em auto}}\
         pre{{white-space:pre-wrap}}.err{{color:#b00}}</style></head>\
         <body>{body}</body></html>",
        escape(title)
    )
}

/// Minimal HTML escaping for text interpolated into pages.
fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
