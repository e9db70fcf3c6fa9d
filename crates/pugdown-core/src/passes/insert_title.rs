/*
 * passes/insert_title.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Prepends the title/header boilerplate and indents the body under it.

use crate::config::RenderOptions;
use crate::pass::Pass;

/// Fixed front-page header block prepended before the indented body.
const TITLE_TEXT: &str = concat!(
    "\n",
    "doctype strict\n",
    "html\n",
    "  head\n",
    "    link(href='classpath:styles/main.css', rel='stylesheet', type='text/css', media='print')\n",
    "  body\n",
    "    .front-page\n",
    "      include HEADER-BANNER\n",
    "      .company-name=company.fullName\n",
    "      .document-type\n",
    "        | 'title PLace holder'\n",
    "       ",
);

/// Body lines sit four spaces under the header block.
const BODY_INDENT: &str = "    ";

pub struct InsertTitle;

impl Pass for InsertTitle {
    fn name(&self) -> &str {
        "insert-title"
    }

    fn description(&self) -> &str {
        "Prepend the front-page header block and indent the body under it"
    }

    fn enabled(&self, options: &RenderOptions) -> bool {
        options.title
    }

    fn apply(&self, document: &str, _options: &RenderOptions) -> String {
        format!("{TITLE_TEXT}{}", indent_body(document))
    }
}

fn indent_body(document: &str) -> String {
    document
        .split('\n')
        .map(|line| format!("{BODY_INDENT}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_body_line_is_indented() {
        assert_eq!(indent_body("h1 Title\np body"), "    h1 Title\n    p body");
    }

    #[test]
    fn header_block_comes_before_the_body() {
        let output = InsertTitle.apply("p body", &RenderOptions::default());
        assert!(output.starts_with("\ndoctype strict\nhtml\n  head\n"));
        assert!(output.ends_with("    p body"));
        assert!(output.contains("include HEADER-BANNER"));
    }
}
