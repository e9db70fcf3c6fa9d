/*
 * passes/strip_strong.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Removes `strong` tag lines emitted by the converter.

use crate::config::RenderOptions;
use crate::pass::Pass;

/// The tag token matched at the start of a line.
const STRONG_TAG: &str = "strong";

pub struct StripStrong;

impl Pass for StripStrong {
    fn name(&self) -> &str {
        "strip-strong"
    }

    fn description(&self) -> &str {
        "Remove strong tag lines, joining their text onto the previous line"
    }

    fn enabled(&self, options: &RenderOptions) -> bool {
        options.no_strong
    }

    fn apply(&self, document: &str, _options: &RenderOptions) -> String {
        strip_strong_lines(document)
    }
}

/// Drop every newline + indent + `strong` token; whatever follows the token
/// on that line joins the previous line.
///
/// The check is anchored on the line start after leading whitespace, so
/// `strong` in the middle of a line survives. It is still a token-prefix
/// check rather than a word check: a line starting with `strongest` loses
/// its `strong` prefix. The first line has no preceding newline and is
/// never touched.
fn strip_strong_lines(document: &str) -> String {
    let mut out = String::with_capacity(document.len());
    for (index, line) in document.split('\n').enumerate() {
        if index == 0 {
            out.push_str(line);
            continue;
        }
        let trimmed = line.trim_start();
        if let Some(rest) = trimmed.strip_prefix(STRONG_TAG) {
            out.push_str(rest);
        } else {
            out.push('\n');
            out.push_str(line);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn strip(document: &str) -> String {
        StripStrong.apply(document, &RenderOptions::default())
    }

    #[test]
    fn bare_strong_line_is_removed() {
        assert_eq!(strip("p\n  strong\nmore text"), "p\nmore text");
    }

    #[test]
    fn tag_text_joins_the_previous_line() {
        assert_eq!(strip("p\n  strong bold words\n  | tail"), "p bold words\n  | tail");
    }

    #[test]
    fn strong_in_the_middle_of_a_line_survives() {
        assert_eq!(strip("p a strong opinion\n| headstrong"), "p a strong opinion\n| headstrong");
    }

    #[test]
    fn longer_tokens_still_lose_the_prefix() {
        // token-prefix check, deliberately crude
        assert_eq!(strip("p\nstrongest"), "pest");
    }

    #[test]
    fn first_line_is_never_touched() {
        assert_eq!(strip("strong opener\np body"), "strong opener\np body");
    }

    #[test]
    fn stripping_is_idempotent() {
        let document = "p\n  strong bold\nmore\n  strong\nend";
        let once = strip(document);
        assert_eq!(strip(&once), once);
    }
}
