/*
 * passes/insert_footer.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Appends the footer invocation snippet.

use crate::config::RenderOptions;
use crate::pass::Pass;

/// Footer mixin invocation appended after the document, with its fixed date.
pub const FOOTER_TEXT: &str = "\n      +footer('2024-10-01')";

pub struct InsertFooter;

impl Pass for InsertFooter {
    fn name(&self) -> &str {
        "insert-footer"
    }

    fn description(&self) -> &str {
        "Append the footer invocation snippet"
    }

    fn enabled(&self, options: &RenderOptions) -> bool {
        options.footer
    }

    fn apply(&self, document: &str, _options: &RenderOptions) -> String {
        format!("{document}{FOOTER_TEXT}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn footer_is_appended_verbatim() {
        let output = InsertFooter.apply("p body", &RenderOptions::default());
        assert_eq!(output, "p body\n      +footer('2024-10-01')");
    }
}
