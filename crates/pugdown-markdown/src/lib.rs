/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Markdown to Pug template converter.
//!
//! The converter folds the `pulldown-cmark` event stream into a minimal
//! block/inline tree and writes the tree back out as Pug. Inline styling
//! lands on tag lines of its own (`strong bold`, `em italic`), which is the
//! shape the post-processing pipeline in `pugdown-core` operates on.
//!
//! The converter is deliberately a black box to the rest of the system:
//! callers hand it Markdown text and receive Pug text, nothing else crosses
//! the boundary.
//!
//! # Example
//!
//! ```
//! let pug = pugdown_markdown::render("# Hello");
//! assert_eq!(pug, "h1 Hello\n");
//! ```

mod ast;
mod writer;

pub use ast::{Block, Inline};

/// Convert a Markdown document to Pug template text.
pub fn render(markdown: &str) -> String {
    let blocks = ast::build(markdown);
    writer::PugWriter::new().write_document(&blocks)
}
