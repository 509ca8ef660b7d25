//! Folds the `pulldown-cmark` event stream into an owned [`Node`] tree.

use crate::node::{Node, NodeKind, Span};
use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Parser, Tag};

pub use pulldown_cmark::Options;

/// Parses `source` with the default extension set (strikethrough).
pub fn parse(source: &str) -> Node {
    parse_with_options(source, Options::ENABLE_STRIKETHROUGH)
}

pub fn parse_with_options(source: &str, options: Options) -> Node {
    let mut builder = TreeBuilder::new(source);
    for (event, range) in Parser::new_ext(source, options).into_offset_iter() {
        builder.push(event, range.into());
    }
    builder.finish()
}

struct TreeBuilder<'s> {
    source: &'s [u8],
    stack: Vec<Node>,
    /// A code line whose terminator has not been seen yet.
    open_line: Option<Span>,
}

impl<'s> TreeBuilder<'s> {
    fn new(source: &'s str) -> Self {
        let root = Node::new(NodeKind::Document, 0..source.len());
        Self {
            source: source.as_bytes(),
            stack: vec![root],
            open_line: None,
        }
    }

    fn push(&mut self, event: Event<'_>, span: Span) {
        match event {
            Event::Start(tag) => self.stack.push(Node::new(kind_for_tag(&tag), span)),
            Event::End(_) => self.close(),
            Event::Text(_) => {
                if matches!(self.top_kind(), NodeKind::CodeBlock { .. }) {
                    self.push_code_text(span);
                } else {
                    self.append(Node::new(NodeKind::Text, span));
                }
            }
            Event::Code(_) => self.append(code_span(span, self.source)),
            Event::Html(_) => {
                let kind = match self.top_kind() {
                    NodeKind::Paragraph | NodeKind::Heading { .. } => NodeKind::InlineHtml,
                    kind if kind.is_inline() => NodeKind::InlineHtml,
                    _ => NodeKind::HtmlBlock,
                };
                self.append(Node::new(kind, span));
            }
            Event::SoftBreak => self.append(Node::new(NodeKind::SoftBreak, span)),
            Event::HardBreak => self.append(Node::new(NodeKind::HardBreak, span)),
            Event::Rule => self.append(Node::new(NodeKind::ThematicBreak, span)),
            Event::FootnoteReference(_) | Event::TaskListMarker(_) => {
                self.append(Node::new(NodeKind::Other, span))
            }
        }
    }

    fn top_kind(&self) -> &NodeKind {
        self.stack
            .last()
            .map(|node| &node.kind)
            .unwrap_or(&NodeKind::Document)
    }

    fn append(&mut self, node: Node) {
        if let Some(parent) = self.stack.last_mut() {
            parent.children.push(node);
        }
    }

    fn close(&mut self) {
        if self.stack.len() <= 1 {
            log::warn!("Unbalanced end event in markdown stream; ignoring");
            return;
        }
        if let Some(mut node) = self.stack.pop() {
            if let NodeKind::CodeBlock { lines, .. } = &mut node.kind {
                if let Some(open) = self.open_line.take() {
                    lines.push(open);
                }
            }
            self.append(node);
        }
    }

    fn push_code_text(&mut self, span: Span) {
        let bytes = self.source.get(span.start..span.end).unwrap_or_default();
        let mut finished = Vec::new();
        let mut line_start = span.start;

        for (offset, byte) in bytes.iter().enumerate() {
            if *byte != b'\n' {
                continue;
            }
            let mut end = span.start + offset;
            if end > line_start && self.source.get(end - 1) == Some(&b'\r') {
                end -= 1;
            }
            let segment = Span::new(line_start, end);
            match self.open_line.take() {
                Some(open) if open.end == segment.start => {
                    finished.push(Span::new(open.start, segment.end))
                }
                Some(open) => {
                    finished.push(open);
                    finished.push(segment);
                }
                None => finished.push(segment),
            }
            line_start = span.start + offset + 1;
        }

        if line_start < span.end {
            let tail = Span::new(line_start, span.end);
            self.open_line = match self.open_line.take() {
                Some(open) if open.end == tail.start => Some(Span::new(open.start, tail.end)),
                Some(open) => {
                    finished.push(open);
                    Some(tail)
                }
                None => Some(tail),
            };
        }

        if let Some(NodeKind::CodeBlock { lines, .. }) = self.stack.last_mut().map(|n| &mut n.kind) {
            lines.extend(finished);
        }
    }

    fn finish(mut self) -> Node {
        while self.stack.len() > 1 {
            self.close();
        }
        let mut root = self
            .stack
            .pop()
            .unwrap_or_else(|| Node::new(NodeKind::Document, 0..self.source.len()));
        root.fix_depths(0);
        root
    }
}

/// Narrows an inline code span to its content, dropping the backtick fences
/// and the single padding space CommonMark strips.
fn code_span(span: Span, source: &[u8]) -> Node {
    let bytes = source.get(span.start..span.end).unwrap_or_default();
    let ticks = bytes.iter().take_while(|b| **b == b'`').count();
    let mut start = span.start + ticks;
    let mut end = span.end.saturating_sub(ticks).max(start);
    let inner = source.get(start..end).unwrap_or_default();
    if inner.len() >= 2 && inner.starts_with(b" ") && inner.ends_with(b" ") && inner.iter().any(|b| *b != b' ') {
        start += 1;
        end -= 1;
    }
    Node::new(NodeKind::Code, start..end)
}

fn kind_for_tag(tag: &Tag<'_>) -> NodeKind {
    match tag {
        Tag::Paragraph => NodeKind::Paragraph,
        Tag::Heading(level, _, _) => NodeKind::Heading {
            level: heading_level(*level),
        },
        Tag::BlockQuote => NodeKind::BlockQuote,
        Tag::CodeBlock(kind) => NodeKind::CodeBlock {
            fenced: matches!(kind, CodeBlockKind::Fenced(_)),
            lines: Vec::new(),
        },
        Tag::List(start) => NodeKind::List {
            ordered: start.is_some(),
            start: start.unwrap_or(1),
        },
        Tag::Item => NodeKind::ListItem,
        Tag::Emphasis => NodeKind::Emphasis,
        Tag::Strong => NodeKind::Strong,
        Tag::Strikethrough => NodeKind::Strikethrough,
        Tag::Link(..) => NodeKind::Link,
        Tag::Image(..) => NodeKind::Image,
        _ => NodeKind::Other,
    }
}

fn heading_level(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}
