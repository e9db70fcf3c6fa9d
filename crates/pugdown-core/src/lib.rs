/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Post-processing pipeline for Pug documents converted from Markdown.
//!
//! The Markdown conversion itself lives elsewhere (see `pugdown-markdown`);
//! this crate takes the converted template string and runs a fixed-order
//! sequence of rewrite passes over it:
//!
//! 1. `strip-strong` removes `strong` tag lines emitted by the converter
//! 2. `insert-title` prepends the front-page header and indents the body
//! 3. `extract-variables` collapses repeated `[...]` and `{{...}}` fragments
//!    into shared `- var variableN = ...` declarations
//! 4. `insert-imports` prepends the include block
//! 5. `insert-footer` appends the footer invocation
//!
//! Each pass is a pure `&str -> String` rewrite gated by [`RenderOptions`];
//! running the pipeline twice with the same options and input produces
//! byte-identical output. The only state a run owns, the variable registry,
//! is created and discarded inside a single extraction call.
//!
//! # Example
//!
//! ```
//! use pugdown_core::{RenderOptions, TransformPipeline};
//!
//! let mut options = RenderOptions::disabled();
//! options.square_variables = true;
//!
//! let pipeline = TransformPipeline::standard();
//! let output = pipeline.run("[abc] and [abc]", &options);
//! assert_eq!(output, "- var variable1 = `[abc]`{{ variable1 }} and {{ variable1 }}");
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod matcher;
pub mod pass;
pub mod passes;
pub mod registry;
pub mod source;

// Re-export commonly used types
pub use config::RenderOptions;
pub use error::{SourceError, SourceResult};
pub use extract::{Extraction, extract_variables};
pub use pass::{Pass, TransformPipeline};
pub use registry::VariableRegistry;
pub use source::read_source;
