/*
 * passes/insert_imports.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Prepends the boilerplate include block.

use crate::config::RenderOptions;
use crate::pass::Pass;

/// Fixed include block prepended before the document.
pub const IMPORTS_TEXT: &str = "\ninclude includes/ROUND_VARIABLES3\ninclude utils/UTILS\n";

pub struct InsertImports;

impl Pass for InsertImports {
    fn name(&self) -> &str {
        "insert-imports"
    }

    fn description(&self) -> &str {
        "Prepend the boilerplate include block"
    }

    fn enabled(&self, options: &RenderOptions) -> bool {
        options.imports
    }

    fn apply(&self, document: &str, _options: &RenderOptions) -> String {
        format!("{IMPORTS_TEXT}{document}")
    }
}
