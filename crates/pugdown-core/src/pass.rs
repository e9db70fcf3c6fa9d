/*
 * pass.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Pass trait and the fixed-order transform pipeline.

use crate::config::RenderOptions;
use crate::passes;

/// A named rewrite over the whole document.
///
/// Passes are pure: they read the current document and the option snapshot
/// and return the new text. Anything stateful (the variable registry) is
/// scoped inside a single `apply` call.
pub trait Pass: Send + Sync {
    /// Stable name, e.g. "strip-strong".
    fn name(&self) -> &str;

    /// Short human description for `list-passes` output.
    fn description(&self) -> &str;

    /// Whether this pass runs under `options`.
    fn enabled(&self, options: &RenderOptions) -> bool;

    /// Rewrite `document`.
    fn apply(&self, document: &str, options: &RenderOptions) -> String;
}

/// The fixed-order sequence of rewrite passes applied to converter output.
pub struct TransformPipeline {
    passes: Vec<Box<dyn Pass>>,
}

impl TransformPipeline {
    /// The standard pipeline. Order is part of the contract: stripping runs
    /// before the title indents the body, extraction sees the indented text,
    /// and the import and footer blocks wrap everything else.
    pub fn standard() -> Self {
        Self {
            passes: vec![
                Box::new(passes::strip_strong::StripStrong),
                Box::new(passes::insert_title::InsertTitle),
                Box::new(passes::extract_variables::ExtractVariables),
                Box::new(passes::insert_imports::InsertImports),
                Box::new(passes::insert_footer::InsertFooter),
            ],
        }
    }

    /// Run every enabled pass over `template` in order.
    pub fn run(&self, template: &str, options: &RenderOptions) -> String {
        let mut document = template.to_string();
        for pass in &self.passes {
            if !pass.enabled(options) {
                tracing::debug!(pass = pass.name(), "pass disabled, skipping");
                continue;
            }
            document = pass.apply(&document, options);
            tracing::debug!(pass = pass.name(), output_len = document.len(), "pass applied");
        }
        document
    }

    /// The passes in execution order.
    pub fn passes(&self) -> impl Iterator<Item = &dyn Pass> {
        self.passes.iter().map(|pass| pass.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_pipeline_order_is_fixed() {
        let pipeline = TransformPipeline::standard();
        let names: Vec<_> = pipeline.passes().map(|pass| pass.name().to_string()).collect();
        assert_eq!(names, vec![
            "strip-strong",
            "insert-title",
            "extract-variables",
            "insert-imports",
            "insert-footer",
        ]);
    }

    #[test]
    fn disabled_passes_leave_the_document_alone() {
        let pipeline = TransformPipeline::standard();
        let output = pipeline.run("h1 Title\np body", &RenderOptions::disabled());
        assert_eq!(output, "h1 Title\np body");
    }
}
