/*
 * error.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Error types for source loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced while loading a source document.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The file could not be read (missing, unreadable, or not UTF-8).
    #[error("error reading file: {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for source loading.
pub type SourceResult<T> = Result<T, SourceError>;
