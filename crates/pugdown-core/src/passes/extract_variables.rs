/*
 * passes/extract_variables.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Pipeline wrapper around the variable extraction run.

use crate::config::RenderOptions;
use crate::extract;
use crate::pass::Pass;

/// Always present in the pipeline; the two fragment scans inside it are
/// gated individually by `curly_variables` and `square_variables`.
pub struct ExtractVariables;

impl Pass for ExtractVariables {
    fn name(&self) -> &str {
        "extract-variables"
    }

    fn description(&self) -> &str {
        "Collapse repeated literal fragments into shared variable declarations"
    }

    fn enabled(&self, _options: &RenderOptions) -> bool {
        true
    }

    fn apply(&self, document: &str, options: &RenderOptions) -> String {
        let extraction = extract::extract_variables(document, options);
        format!("{}{}", extraction.declarations, extraction.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn declarations_sit_directly_before_the_body() {
        // no separator beyond what the blocks themselves contain
        let output = ExtractVariables.apply("[abc]\n", &RenderOptions::default());
        assert_eq!(output, "- var variable1 = `[abc]`{{ variable1 }}\n");
    }

    #[test]
    fn no_fragments_means_no_declarations() {
        let output = ExtractVariables.apply("p body\n", &RenderOptions::default());
        assert_eq!(output, "p body\n");
    }
}
