/*
 * writer.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Writes the block tree out as Pug text.
//!
//! Blocks whose inline content is plain text render on one line
//! (`h1 Title`); mixed inline content renders as an indented child list
//! where text runs become `| ` lines and styled spans become tag lines.

use crate::ast::{Block, Inline, flatten_text};

const INDENT: &str = "  ";

pub struct PugWriter {
    out: String,
    depth: usize,
}

impl PugWriter {
    pub fn new() -> Self {
        Self {
            out: String::new(),
            depth: 0,
        }
    }

    pub fn write_document(mut self, blocks: &[Block]) -> String {
        self.write_blocks(blocks);
        self.out
    }

    fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.out.push_str(INDENT);
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn write_blocks(&mut self, blocks: &[Block]) {
        for block in blocks {
            self.write_block(block);
        }
    }

    fn write_block(&mut self, block: &Block) {
        match block {
            Block::Heading { level, content } => self.write_tagged(&format!("h{level}"), content),
            Block::Paragraph(content) => self.write_tagged("p", content),
            Block::CodeBlock { lang, code } => self.write_code_block(lang.as_deref(), code),
            Block::List { ordered, start, items } => self.write_list(*ordered, *start, items),
            Block::BlockQuote(blocks) => {
                self.line("blockquote");
                self.depth += 1;
                self.write_blocks(blocks);
                self.depth -= 1;
            }
            Block::HtmlBlock(html) => {
                for html_line in html.trim_end_matches('\n').split('\n') {
                    self.line(&format!("| {html_line}"));
                }
            }
            Block::Rule => self.line("hr"),
        }
    }

    fn write_code_block(&mut self, lang: Option<&str>, code: &str) {
        self.line("pre");
        self.depth += 1;
        match lang {
            Some(lang) => self.line(&format!("code.language-{lang}")),
            None => self.line("code"),
        }
        self.depth += 1;
        for code_line in code.trim_end_matches('\n').split('\n') {
            self.line(&format!("| {code_line}"));
        }
        self.depth -= 2;
    }

    fn write_list(&mut self, ordered: bool, start: u64, items: &[Vec<Block>]) {
        let tag = if ordered {
            if start != 1 {
                format!("ol(start='{start}')")
            } else {
                "ol".to_string()
            }
        } else {
            "ul".to_string()
        };
        self.line(&tag);
        self.depth += 1;
        for item in items {
            self.write_item(item);
        }
        self.depth -= 1;
    }

    /// An item whose first block is a plain paragraph collapses onto the
    /// `li` line; everything else nests under it.
    fn write_item(&mut self, blocks: &[Block]) {
        if let Some((Block::Paragraph(content), rest)) = blocks.split_first() {
            if let Some(text) = plain_text(content) {
                if text.is_empty() {
                    self.line("li");
                } else {
                    self.line(&format!("li {text}"));
                }
                if !rest.is_empty() {
                    self.depth += 1;
                    self.write_blocks(rest);
                    self.depth -= 1;
                }
                return;
            }
        }
        self.line("li");
        self.depth += 1;
        self.write_blocks(blocks);
        self.depth -= 1;
    }

    fn write_tagged(&mut self, tag: &str, content: &[Inline]) {
        match plain_text(content) {
            Some(text) if text.is_empty() => self.line(tag),
            Some(text) => self.line(&format!("{tag} {text}")),
            None => {
                self.line(tag);
                self.depth += 1;
                self.write_inline_lines(content);
                self.depth -= 1;
            }
        }
    }

    fn write_inline_lines(&mut self, content: &[Inline]) {
        let mut text_run = String::new();
        for inline in content {
            match inline {
                Inline::Text(text) => text_run.push_str(text),
                Inline::Html(html) => text_run.push_str(html),
                Inline::SoftBreak => text_run.push(' '),
                Inline::HardBreak => {
                    self.flush_text_run(&mut text_run);
                    self.line("br");
                }
                Inline::Code(code) => {
                    self.flush_text_run(&mut text_run);
                    self.line(&format!("code {code}"));
                }
                Inline::Emph(inner) => {
                    self.flush_text_run(&mut text_run);
                    self.line(&format!("em {}", flatten_text(inner)));
                }
                Inline::Strong(inner) => {
                    self.flush_text_run(&mut text_run);
                    self.line(&format!("strong {}", flatten_text(inner)));
                }
                Inline::Link { dest, content } => {
                    self.flush_text_run(&mut text_run);
                    self.line(&format!(
                        "a(href='{}') {}",
                        escape_attr(dest),
                        flatten_text(content)
                    ));
                }
                Inline::Image { dest, alt } => {
                    self.flush_text_run(&mut text_run);
                    self.line(&format!(
                        "img(src='{}', alt='{}')",
                        escape_attr(dest),
                        escape_attr(alt)
                    ));
                }
            }
        }
        self.flush_text_run(&mut text_run);
    }

    fn flush_text_run(&mut self, text_run: &mut String) {
        if !text_run.is_empty() {
            let line = format!("| {text_run}");
            self.line(&line);
            text_run.clear();
        }
    }
}

impl Default for PugWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn escape_attr(value: &str) -> String {
    value.replace('\'', "\\'")
}

/// Joined text when the content is plain (text, inline HTML and soft breaks
/// only); `None` as soon as a styled span forces child lines.
fn plain_text(content: &[Inline]) -> Option<String> {
    let mut text = String::new();
    for inline in content {
        match inline {
            Inline::Text(t) | Inline::Html(t) => text.push_str(t),
            Inline::SoftBreak => text.push(' '),
            _ => return None,
        }
    }
    Some(text)
}
