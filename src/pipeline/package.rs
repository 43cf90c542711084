//! Document packaging: translated text → Office Open XML bytes.
//!
//! Each successful range becomes a standalone `.docx` with a level-2 heading
//! naming the range and a single paragraph holding the translation. The
//! output is plain translated prose; layout fidelity is explicitly not a
//! goal, so one paragraph is all there is.

use crate::error::TarjemError;
use crate::ranges::Interval;
use crate::registry::Artifact;
use docx_rs::{Docx, Paragraph, Run};
use std::io::Cursor;

/// Build the suggested download filename for a range.
///
/// `{prefix}_page_{N}.docx` for a single page, `{prefix}_pages_{A}-{B}.docx`
/// otherwise.
pub fn artifact_filename(prefix: &str, interval: &Interval) -> String {
    format!("{}_{}.docx", prefix, interval.slug())
}

/// Package a translation into a Word document.
///
/// The document contains exactly two paragraphs: the `Heading2`-styled range
/// heading and the translation body.
pub fn package_translation(
    interval: &Interval,
    translation: &str,
    file_prefix: &str,
) -> Result<Artifact, TarjemError> {
    let docx = Docx::new()
        .add_paragraph(
            Paragraph::new()
                .add_run(Run::new().add_text(interval.heading()).bold().size(36))
                .style("Heading2"),
        )
        .add_paragraph(Paragraph::new().add_run(Run::new().add_text(translation).size(24)));

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| TarjemError::Internal(format!("DOCX packaging failed: {e}")))?;

    Ok(Artifact {
        bytes: buf.into_inner(),
        filename: artifact_filename(file_prefix, interval),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Collect the plain text of every paragraph in a packed document.
    fn paragraph_texts(bytes: &[u8]) -> Vec<String> {
        let doc = docx_rs::read_docx(bytes).expect("packed bytes should re-read");
        doc.document
            .children
            .iter()
            .filter_map(|child| match child {
                docx_rs::DocumentChild::Paragraph(p) => {
                    let mut line = String::new();
                    for pc in &p.children {
                        if let docx_rs::ParagraphChild::Run(run) = pc {
                            for rc in &run.children {
                                if let docx_rs::RunChild::Text(t) = rc {
                                    line.push_str(&t.text);
                                }
                            }
                        }
                    }
                    Some(line)
                }
                _ => None,
            })
            .collect()
    }

    #[test]
    fn filenames() {
        assert_eq!(
            artifact_filename("translation", &Interval::new(3, 3)),
            "translation_page_3.docx"
        );
        assert_eq!(
            artifact_filename("report", &Interval::new(1, 4)),
            "report_pages_1-4.docx"
        );
    }

    #[test]
    fn package_round_trip() {
        let interval = Interval::new(1, 3);
        let artifact =
            package_translation(&interval, "The translated text.", "translation").unwrap();

        assert_eq!(artifact.filename, "translation_pages_1-3.docx");
        // DOCX is a zip container; check the magic.
        assert_eq!(&artifact.bytes[..2], b"PK");

        let paragraphs = paragraph_texts(&artifact.bytes);
        assert_eq!(
            paragraphs,
            vec![
                "Pages 1-3 Translation".to_string(),
                "The translated text.".to_string()
            ]
        );
    }

    #[test]
    fn single_page_heading() {
        let artifact = package_translation(&Interval::new(2, 2), "body", "translation").unwrap();
        let paragraphs = paragraph_texts(&artifact.bytes);
        assert_eq!(paragraphs[0], "Page 2 Translation");
    }
}
