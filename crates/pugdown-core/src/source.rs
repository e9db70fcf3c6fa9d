/*
 * source.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Loading the Markdown source document.

use std::fs;
use std::path::Path;

use crate::error::{SourceError, SourceResult};

/// Read the source document as UTF-8 text.
///
/// One-shot: a failed read produces no partial document and is not retried.
pub fn read_source(path: &Path) -> SourceResult<String> {
    fs::read_to_string(path).map_err(|source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reports_the_fixed_message() {
        let err = read_source(Path::new("definitely-not-here.md")).unwrap_err();
        assert!(err.to_string().starts_with("error reading file"));
    }
}
