/*
 * extract.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Rewrites literal fragments into shared `{{ variableN }}` references.

use crate::config::RenderOptions;
use crate::matcher;
use crate::registry::VariableRegistry;

/// Result of one extraction run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// The `- var ...` declaration block, empty when nothing was extracted.
    pub declarations: String,
    /// The document with matched fragments replaced by references.
    pub body: String,
}

/// Scan `document` for literal fragments and collapse repeated occurrences
/// onto shared variables.
///
/// Curly fragments are scanned first, then square fragments over the
/// already-rewritten text; swapping the order would renumber the variables.
/// Substituted references contain no brackets, so the square scan never
/// re-matches text the curly scan produced. With both toggles off the
/// document comes back unchanged and the declarations are empty.
pub fn extract_variables(document: &str, options: &RenderOptions) -> Extraction {
    let mut registry = VariableRegistry::new();
    let mut body = document.to_string();

    if options.curly_variables {
        body = matcher::curly_fragment()
            .replace_all(&body, |caps: &regex::Captures<'_>| {
                let value = normalize_curly(&caps[0]);
                reference(&registry.lookup_or_create(&value))
            })
            .into_owned();
    }

    if options.square_variables {
        body = matcher::square_fragment()
            .replace_all(&body, |caps: &regex::Captures<'_>| {
                reference(&registry.lookup_or_create(&caps[0]))
            })
            .into_owned();
    }

    Extraction {
        declarations: registry.render_declarations(),
        body,
    }
}

/// `{{hello}}` is stored as `(hello)`: the brace delimiters become
/// parentheses before the value reaches the registry. The normalization
/// changes the stored value itself, so two fragments that differ only in
/// their delimiters collapse onto one variable.
fn normalize_curly(fragment: &str) -> String {
    let inner = fragment
        .strip_prefix("{{")
        .and_then(|rest| rest.strip_suffix("}}"))
        .unwrap_or(fragment);
    format!("({inner})")
}

fn reference(name: &str) -> String {
    format!("{{{{ {name} }}}}")
}
