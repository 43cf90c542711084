//! Pipeline stages for PDF translation.
//!
//! Each submodule implements exactly one transformation step. Keeping stages
//! separate makes each independently testable and lets us swap an
//! implementation (e.g. a different extraction backend) without touching the
//! other stages.
//!
//! ## Data Flow
//!
//! ```text
//! extract ──▶ llm ──▶ package
//! (pdf text)  (chat)  (docx bytes)
//! ```
//!
//! 1. [`extract`] — parse the uploaded PDF once and pull embedded text per
//!    page; runs in `spawn_blocking` because PDF parsing is CPU-bound
//! 2. [`llm`]     — submit one chunk per page range to the chat-completion
//!    translator; the only stage with network I/O
//! 3. [`package`] — wrap each translated blob in a Word document with a
//!    heading identifying the range

pub mod extract;
pub mod llm;
pub mod package;
