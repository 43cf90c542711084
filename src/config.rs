//! Configuration for a translation run.
//!
//! All per-request knobs live in [`TranslationConfig`], built via its
//! [`TranslationConfigBuilder`]. Keeping every knob in one struct makes it
//! trivial to pass the whole request context through the pipeline stages and
//! to log a run's parameters in one place.
//!
//! The API credential is the one field treated specially: it arrives with
//! every upload, must never appear in logs or artifacts, and is therefore
//! redacted in the manual `Debug` impl below and zeroed when the
//! configuration is dropped.

use crate::error::TarjemError;
use std::fmt;
use zeroize::Zeroize;

/// Default translator model when the caller does not supply one.
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Default filename prefix for packaged artifacts.
pub const DEFAULT_FILE_PREFIX: &str = "translation";

/// Default chat-completion endpoint base.
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Configuration for translating one uploaded PDF.
///
/// Built via [`TranslationConfig::builder()`].
///
/// # Example
/// ```rust
/// use tarjem::TranslationConfig;
///
/// let config = TranslationConfig::builder("sk-...")
///     .model("gpt-4o-mini")
///     .file_prefix("report")
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct TranslationConfig {
    /// Bearer credential for the chat-completion service. Supplied per
    /// request by the uploader; never logged or persisted.
    pub api_key: String,

    /// Model identifier sent to the translator. Default: [`DEFAULT_MODEL`].
    pub model: String,

    /// Filename prefix for packaged documents. Default: [`DEFAULT_FILE_PREFIX`].
    pub file_prefix: String,

    /// Base URL of the chat-completion API. Default: [`DEFAULT_API_BASE`].
    ///
    /// Overridable so tests can point the client at a local mock and
    /// deployments can route through a proxy.
    pub api_base: String,

    /// Per-call translator timeout in seconds. Default: 120.
    ///
    /// A whole page range goes out as a single completion request, so long
    /// documents legitimately take minutes. A timed-out call surfaces as a
    /// transport-kind error for that range only.
    pub api_timeout_secs: u64,
}

impl fmt::Debug for TranslationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranslationConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("file_prefix", &self.file_prefix)
            .field("api_base", &self.api_base)
            .field("api_timeout_secs", &self.api_timeout_secs)
            .finish()
    }
}

impl Drop for TranslationConfig {
    fn drop(&mut self) {
        // Credential is zeroed on drop so it does not linger in freed memory.
        self.api_key.zeroize();
    }
}

impl TranslationConfig {
    /// Create a new builder holding the given credential.
    pub fn builder(api_key: impl Into<String>) -> TranslationConfigBuilder {
        TranslationConfigBuilder {
            config: TranslationConfig {
                api_key: api_key.into(),
                model: DEFAULT_MODEL.to_string(),
                file_prefix: DEFAULT_FILE_PREFIX.to_string(),
                api_base: DEFAULT_API_BASE.to_string(),
                api_timeout_secs: 120,
            },
        }
    }
}

/// Builder for [`TranslationConfig`].
#[derive(Debug)]
pub struct TranslationConfigBuilder {
    config: TranslationConfig,
}

impl TranslationConfigBuilder {
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    pub fn file_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.file_prefix = prefix.into();
        self
    }

    pub fn api_base(mut self, base: impl Into<String>) -> Self {
        self.config.api_base = base.into();
        self
    }

    pub fn api_timeout_secs(mut self, secs: u64) -> Self {
        self.config.api_timeout_secs = secs.max(1);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<TranslationConfig, TarjemError> {
        let c = &self.config;
        if c.api_key.trim().is_empty() {
            return Err(TarjemError::InvalidConfig(
                "API key must not be empty".into(),
            ));
        }
        if c.model.trim().is_empty() {
            return Err(TarjemError::InvalidConfig("Model must not be empty".into()));
        }
        Ok(self.config)
    }
}
