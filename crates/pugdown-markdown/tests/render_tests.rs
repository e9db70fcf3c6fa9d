/*
 * render_tests.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Converter output shape tests.

use pretty_assertions::assert_eq;
use pugdown_markdown::render;

#[test]
fn plain_heading_renders_on_one_line() {
    assert_eq!(render("# Hello"), "h1 Hello\n");
}

#[test]
fn heading_levels_map_to_tags() {
    assert_eq!(render("### Third"), "h3 Third\n");
}

#[test]
fn plain_paragraph_renders_on_one_line() {
    assert_eq!(render("Just some text."), "p Just some text.\n");
}

#[test]
fn strong_spans_get_their_own_tag_lines() {
    let pug = render("Some **bold** text.");
    assert_eq!(pug, "p\n  | Some \n  strong bold\n  |  text.\n");
}

#[test]
fn emphasis_and_inline_code_get_tag_lines() {
    let pug = render("an *important* call to `f()`");
    assert!(pug.contains("em important"));
    assert!(pug.contains("code f()"));
}

#[test]
fn links_become_anchor_lines() {
    let pug = render("see [the docs](https://example.com) now");
    assert!(pug.contains("a(href='https://example.com') the docs"));
}

#[test]
fn tight_list_items_collapse_onto_li_lines() {
    assert_eq!(render("- one\n- two\n"), "ul\n  li one\n  li two\n");
}

#[test]
fn ordered_lists_keep_a_non_default_start() {
    let pug = render("3. third\n4. fourth\n");
    assert!(pug.starts_with("ol(start='3')\n"));
    assert!(pug.contains("li third"));
}

#[test]
fn nested_lists_indent_under_their_item() {
    let pug = render("- outer\n  - inner\n");
    assert_eq!(pug, "ul\n  li outer\n    ul\n      li inner\n");
}

#[test]
fn fenced_code_blocks_use_pipe_lines() {
    let pug = render("```\nlet x = 1;\nlet y = 2;\n```\n");
    assert_eq!(pug, "pre\n  code\n    | let x = 1;\n    | let y = 2;\n");
}

#[test]
fn code_block_language_becomes_a_class() {
    let pug = render("```rust\nlet x = 1;\n```\n");
    assert!(pug.contains("code.language-rust"));
}

#[test]
fn block_quotes_nest_their_content() {
    assert_eq!(render("> quoted words\n"), "blockquote\n  p quoted words\n");
}

#[test]
fn thematic_breaks_become_hr() {
    let pug = render("before\n\n---\n\nafter\n");
    assert_eq!(pug, "p before\nhr\np after\n");
}

#[test]
fn bracketed_text_without_a_link_stays_literal() {
    // the post-processing pipeline depends on these fragments surviving
    assert_eq!(render("sign here [FULL NAME] please"), "p sign here [FULL NAME] please\n");
}

#[test]
fn rendering_is_deterministic() {
    let markdown = "# T\n\npara **b** [x](y)\n\n- a\n- b\n";
    assert_eq!(render(markdown), render(markdown));
}
