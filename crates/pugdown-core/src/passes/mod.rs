/*
 * passes/mod.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! The individual rewrite passes, one module per pass.

pub mod extract_variables;
pub mod insert_footer;
pub mod insert_imports;
pub mod insert_title;
pub mod strip_strong;
