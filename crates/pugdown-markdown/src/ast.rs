/*
 * ast.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Minimal block/inline tree built from the pulldown-cmark event stream.
//!
//! Only the constructs the Pug writer understands are represented; events
//! from unused extensions fall through and are dropped.

use pulldown_cmark::{CodeBlockKind, Event, Parser, Tag, TagEnd};

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Heading { level: u8, content: Vec<Inline> },
    Paragraph(Vec<Inline>),
    CodeBlock { lang: Option<String>, code: String },
    List { ordered: bool, start: u64, items: Vec<Vec<Block>> },
    BlockQuote(Vec<Block>),
    HtmlBlock(String),
    Rule,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Inline {
    Text(String),
    Code(String),
    Emph(Vec<Inline>),
    Strong(Vec<Inline>),
    Link { dest: String, content: Vec<Inline> },
    Image { dest: String, alt: String },
    Html(String),
    SoftBreak,
    HardBreak,
}

/// Parse `markdown` into a block tree.
pub fn build(markdown: &str) -> Vec<Block> {
    TreeBuilder::new().run(Parser::new(markdown))
}

/// Inline content collapsed to the text it would render as. Used for image
/// alt text and for spans nested inside other spans.
pub(crate) fn flatten_text(content: &[Inline]) -> String {
    let mut text = String::new();
    for inline in content {
        match inline {
            Inline::Text(t) | Inline::Code(t) | Inline::Html(t) => text.push_str(t),
            Inline::Emph(inner) | Inline::Strong(inner) => text.push_str(&flatten_text(inner)),
            Inline::Link { content, .. } => text.push_str(&flatten_text(content)),
            Inline::Image { alt, .. } => text.push_str(alt),
            Inline::SoftBreak | Inline::HardBreak => text.push(' '),
        }
    }
    text
}

/// Block containers currently open while walking the event stream.
enum Container {
    Root { blocks: Vec<Block> },
    Quote { blocks: Vec<Block> },
    List { ordered: bool, start: u64, items: Vec<Vec<Block>> },
    Item { blocks: Vec<Block> },
}

/// The leaf block currently collecting content.
enum Leaf {
    Heading { level: u8 },
    Paragraph,
    Code { lang: Option<String>, text: String },
    Html { text: String },
}

/// An open inline span collecting its children.
struct SpanFrame {
    kind: SpanKind,
    content: Vec<Inline>,
}

enum SpanKind {
    Emph,
    Strong,
    Link { dest: String },
    Image { dest: String },
}

struct TreeBuilder {
    stack: Vec<Container>,
    leaf: Option<Leaf>,
    inline: Vec<Inline>,
    spans: Vec<SpanFrame>,
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            stack: vec![Container::Root { blocks: Vec::new() }],
            leaf: None,
            inline: Vec::new(),
            spans: Vec::new(),
        }
    }

    fn run(mut self, parser: Parser<'_>) -> Vec<Block> {
        for event in parser {
            self.event(event);
        }
        self.close_paragraph();
        if let Some(Container::Root { blocks }) = self.stack.pop() {
            blocks
        } else {
            Vec::new()
        }
    }

    fn event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(end) => self.end(end),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => self.push_inline(Inline::Code(code.to_string())),
            Event::Html(html) => self.html(&html),
            Event::InlineHtml(html) => self.push_inline(Inline::Html(html.to_string())),
            Event::SoftBreak => self.push_inline(Inline::SoftBreak),
            Event::HardBreak => self.push_inline(Inline::HardBreak),
            Event::Rule => {
                self.close_paragraph();
                self.finish_block(Block::Rule);
            }
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => {
                self.close_paragraph();
                self.leaf = Some(Leaf::Paragraph);
            }
            Tag::Heading { level, .. } => {
                self.close_paragraph();
                self.leaf = Some(Leaf::Heading { level: level as u8 });
            }
            Tag::BlockQuote { .. } => {
                self.close_paragraph();
                self.stack.push(Container::Quote { blocks: Vec::new() });
            }
            Tag::CodeBlock(kind) => {
                self.close_paragraph();
                let lang = match kind {
                    CodeBlockKind::Fenced(info) => {
                        let lang = info.split_whitespace().next().unwrap_or("");
                        if lang.is_empty() { None } else { Some(lang.to_string()) }
                    }
                    CodeBlockKind::Indented => None,
                };
                self.leaf = Some(Leaf::Code {
                    lang,
                    text: String::new(),
                });
            }
            Tag::List(start) => {
                self.close_paragraph();
                self.stack.push(Container::List {
                    ordered: start.is_some(),
                    start: start.unwrap_or(1),
                    items: Vec::new(),
                });
            }
            Tag::Item => {
                self.stack.push(Container::Item { blocks: Vec::new() });
            }
            Tag::HtmlBlock => {
                self.close_paragraph();
                self.leaf = Some(Leaf::Html { text: String::new() });
            }
            Tag::Emphasis => self.spans.push(SpanFrame {
                kind: SpanKind::Emph,
                content: Vec::new(),
            }),
            Tag::Strong => self.spans.push(SpanFrame {
                kind: SpanKind::Strong,
                content: Vec::new(),
            }),
            Tag::Link { dest_url, .. } => self.spans.push(SpanFrame {
                kind: SpanKind::Link {
                    dest: dest_url.to_string(),
                },
                content: Vec::new(),
            }),
            Tag::Image { dest_url, .. } => self.spans.push(SpanFrame {
                kind: SpanKind::Image {
                    dest: dest_url.to_string(),
                },
                content: Vec::new(),
            }),
            _ => {}
        }
    }

    fn end(&mut self, end: TagEnd) {
        match end {
            TagEnd::Paragraph => self.close_paragraph(),
            TagEnd::Heading(_) => {
                let content = std::mem::take(&mut self.inline);
                if let Some(Leaf::Heading { level }) = self.leaf.take() {
                    self.finish_block(Block::Heading { level, content });
                }
            }
            TagEnd::BlockQuote { .. } => {
                self.close_paragraph();
                if let Some(Container::Quote { blocks }) = self.stack.pop() {
                    self.finish_block(Block::BlockQuote(blocks));
                }
            }
            TagEnd::CodeBlock => {
                if let Some(Leaf::Code { lang, text }) = self.leaf.take() {
                    self.finish_block(Block::CodeBlock { lang, code: text });
                }
            }
            TagEnd::List(_) => {
                if let Some(Container::List { ordered, start, items }) = self.stack.pop() {
                    self.finish_block(Block::List { ordered, start, items });
                }
            }
            TagEnd::Item => {
                self.close_paragraph();
                if let Some(Container::Item { blocks }) = self.stack.pop() {
                    if let Some(Container::List { items, .. }) = self.stack.last_mut() {
                        items.push(blocks);
                    }
                }
            }
            TagEnd::HtmlBlock => {
                if let Some(Leaf::Html { text }) = self.leaf.take() {
                    self.finish_block(Block::HtmlBlock(text));
                }
            }
            TagEnd::Emphasis | TagEnd::Strong | TagEnd::Link | TagEnd::Image => self.close_span(),
            _ => {}
        }
    }

    fn text(&mut self, text: &str) {
        match &mut self.leaf {
            Some(Leaf::Code { text: code, .. }) => code.push_str(text),
            Some(Leaf::Html { text: html }) => html.push_str(text),
            _ => self.push_inline(Inline::Text(text.to_string())),
        }
    }

    fn html(&mut self, html: &str) {
        match &mut self.leaf {
            Some(Leaf::Html { text }) => text.push_str(html),
            Some(Leaf::Code { text, .. }) => text.push_str(html),
            _ => self.leaf = Some(Leaf::Html { text: html.to_string() }),
        }
    }

    /// Inline content arriving with no open leaf starts an implicit
    /// paragraph; tight list items carry their content this way.
    fn push_inline(&mut self, inline: Inline) {
        if self.leaf.is_none() {
            self.leaf = Some(Leaf::Paragraph);
        }
        match self.spans.last_mut() {
            Some(frame) => frame.content.push(inline),
            None => self.inline.push(inline),
        }
    }

    fn close_span(&mut self) {
        if let Some(frame) = self.spans.pop() {
            let inline = match frame.kind {
                SpanKind::Emph => Inline::Emph(frame.content),
                SpanKind::Strong => Inline::Strong(frame.content),
                SpanKind::Link { dest } => Inline::Link {
                    dest,
                    content: frame.content,
                },
                SpanKind::Image { dest } => Inline::Image {
                    dest,
                    alt: flatten_text(&frame.content),
                },
            };
            self.push_inline(inline);
        }
    }

    fn close_paragraph(&mut self) {
        if matches!(self.leaf, Some(Leaf::Paragraph)) {
            self.leaf = None;
            let content = std::mem::take(&mut self.inline);
            if !content.is_empty() {
                self.finish_block(Block::Paragraph(content));
            }
        }
    }

    fn finish_block(&mut self, block: Block) {
        match self.stack.last_mut() {
            Some(
                Container::Root { blocks }
                | Container::Quote { blocks }
                | Container::Item { blocks },
            ) => blocks.push(block),
            // a block between items means the stream was malformed; drop it
            Some(Container::List { .. }) | None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_and_paragraph() {
        let blocks = build("# Title\n\nBody text.\n");
        assert_eq!(blocks, vec![
            Block::Heading {
                level: 1,
                content: vec![Inline::Text("Title".to_string())],
            },
            Block::Paragraph(vec![Inline::Text("Body text.".to_string())]),
        ]);
    }

    #[test]
    fn strong_span_nests_inside_the_paragraph() {
        let blocks = build("Some **bold** text.\n");
        assert_eq!(blocks, vec![Block::Paragraph(vec![
            Inline::Text("Some ".to_string()),
            Inline::Strong(vec![Inline::Text("bold".to_string())]),
            Inline::Text(" text.".to_string()),
        ])]);
    }

    #[test]
    fn tight_list_items_get_implicit_paragraphs() {
        let blocks = build("- one\n- two\n");
        assert_eq!(blocks, vec![Block::List {
            ordered: false,
            start: 1,
            items: vec![
                vec![Block::Paragraph(vec![Inline::Text("one".to_string())])],
                vec![Block::Paragraph(vec![Inline::Text("two".to_string())])],
            ],
        }]);
    }

    #[test]
    fn fenced_code_keeps_its_language() {
        let blocks = build("```rust\nlet x = 1;\n```\n");
        assert_eq!(blocks, vec![Block::CodeBlock {
            lang: Some("rust".to_string()),
            code: "let x = 1;\n".to_string(),
        }]);
    }

    #[test]
    fn unlinked_brackets_stay_literal_text() {
        let blocks = build("keep [this] literal\n");
        assert_eq!(flatten_text(match &blocks[0] {
            Block::Paragraph(content) => content,
            other => panic!("expected paragraph, got {other:?}"),
        }), "keep [this] literal");
    }
}
