/*
 * config.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Options controlling which rewrite passes run.

use serde::{Deserialize, Serialize};

/// Which rewrite passes run over the converted document.
///
/// An immutable snapshot taken at the start of a pipeline run; passes only
/// ever read it. Every toggle defaults to enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RenderOptions {
    /// Prepend the title/header boilerplate and indent the body under it.
    pub title: bool,
    /// Rewrite `[...]` fragments into shared `{{ variableN }}` references.
    pub square_variables: bool,
    /// Rewrite `{{...}}` fragments into shared `{{ variableN }}` references.
    pub curly_variables: bool,
    /// Prepend the boilerplate include block.
    pub imports: bool,
    /// Append the footer invocation snippet.
    pub footer: bool,
    /// Remove `strong` tag lines emitted by the converter.
    pub no_strong: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: true,
            square_variables: true,
            curly_variables: true,
            imports: true,
            footer: true,
            no_strong: true,
        }
    }
}

impl RenderOptions {
    /// Every pass disabled. Useful when exercising a single pass.
    pub fn disabled() -> Self {
        Self {
            title: false,
            square_variables: false,
            curly_variables: false,
            imports: false,
            footer: false,
            no_strong: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_everything() {
        let options = RenderOptions::default();
        assert!(options.title);
        assert!(options.square_variables);
        assert!(options.curly_variables);
        assert!(options.imports);
        assert!(options.footer);
        assert!(options.no_strong);
    }

    #[test]
    fn disabled_turns_everything_off() {
        assert_eq!(RenderOptions::disabled(), RenderOptions {
            title: false,
            square_variables: false,
            curly_variables: false,
            imports: false,
            footer: false,
            no_strong: false,
        });
    }
}
