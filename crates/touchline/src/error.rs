//! Error types for Touchline operations.
//!
//! This module provides the main error type [`TouchlineError`] which wraps
//! the error conditions that can occur while turning a drill script into a
//! rendered diagram.

use std::io;

use thiserror::Error;

use crate::script::ScriptError;

/// The main error type for Touchline operations.
///
/// # Diagnostic Variants
///
/// The `Script` variant keeps the script source next to the diagnostics so
/// that callers can render the offending spans.
#[derive(Debug, Error)]
pub enum TouchlineError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Script { err: ScriptError, src: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(String),
}

impl TouchlineError {
    /// Create a new `Script` error with the associated source text.
    pub fn new_script_error(err: ScriptError, src: impl Into<String>) -> Self {
        Self::Script {
            err,
            src: src.into(),
        }
    }
}
