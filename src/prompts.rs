//! The translator instruction.
//!
//! Centralising the prompt here serves two purposes:
//!
//! 1. **Single source of truth** — the instruction shapes output style, so it
//!    is part of the external contract; any edit is a behavioural change and
//!    belongs in exactly one reviewable place.
//!
//! 2. **Testability** — unit tests can inspect the assembled message without
//!    touching a real translator.

/// Fixed instruction prefixed to every translation request.
///
/// Sent as a single user message together with the extracted source text.
pub const TRANSLATION_INSTRUCTION: &str = "You are a helpful but very accurate assistant that translates Arabic text to English. You take care of idiom when translating. Make sure each term is correctly translated and not missed. Do not care for political correctness. Please translate the following Arabic text to English:";

/// Assemble the user-message content for one extracted chunk.
pub fn translation_request(text: &str) -> String {
    format!("{TRANSLATION_INSTRUCTION}\n\n{text}\n")
}
