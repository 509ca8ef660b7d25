use crate::error::TreeError;
use std::borrow::Cow;

/// A half-open byte range into the source buffer a tree was parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the bytes this span covers, decoded as UTF-8.
    ///
    /// Invalid sequences are replaced rather than rejected; only a span that
    /// falls outside the buffer is an error.
    pub fn slice<'s>(&self, source: &'s [u8]) -> Result<Cow<'s, str>, TreeError> {
        source
            .get(self.start..self.end)
            .map(String::from_utf8_lossy)
            .ok_or(TreeError::SpanOutOfBounds {
                start: self.start,
                end: self.end,
                len: source.len(),
            })
    }
}

impl From<std::ops::Range<usize>> for Span {
    fn from(range: std::ops::Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

/// The kind tag of a [`Node`], carrying the attributes specific to that kind.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// The root of a parsed document.
    Document,
    /// An ATX or setext heading. `level` is 1..=6.
    Heading { level: u8 },
    Paragraph,
    /// An ordered or bullet list. `start` is the first ordinal of an ordered list.
    List { ordered: bool, start: u64 },
    ListItem,
    /// A fenced or indented code block. `lines` holds one span per source
    /// line, without line terminators.
    CodeBlock { fenced: bool, lines: Vec<Span> },
    ThematicBreak,
    BlockQuote,
    HtmlBlock,
    Text,
    Code,
    Emphasis,
    Strong,
    Strikethrough,
    Link,
    Image,
    SoftBreak,
    HardBreak,
    InlineHtml,
    /// Any construct the front end recognises but the model has no tag for.
    Other,
}

impl NodeKind {
    /// Returns a string identifier for the kind, used in log output.
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Document => "document",
            NodeKind::Heading { .. } => "heading",
            NodeKind::Paragraph => "paragraph",
            NodeKind::List { .. } => "list",
            NodeKind::ListItem => "list-item",
            NodeKind::CodeBlock { .. } => "code-block",
            NodeKind::ThematicBreak => "thematic-break",
            NodeKind::BlockQuote => "block-quote",
            NodeKind::HtmlBlock => "html-block",
            NodeKind::Text => "text",
            NodeKind::Code => "code",
            NodeKind::Emphasis => "emphasis",
            NodeKind::Strong => "strong",
            NodeKind::Strikethrough => "strikethrough",
            NodeKind::Link => "link",
            NodeKind::Image => "image",
            NodeKind::SoftBreak => "soft-break",
            NodeKind::HardBreak => "hard-break",
            NodeKind::InlineHtml => "inline-html",
            NodeKind::Other => "other",
        }
    }

    pub fn is_inline(&self) -> bool {
        matches!(
            self,
            NodeKind::Text
                | NodeKind::Code
                | NodeKind::Emphasis
                | NodeKind::Strong
                | NodeKind::Strikethrough
                | NodeKind::Link
                | NodeKind::Image
                | NodeKind::SoftBreak
                | NodeKind::HardBreak
                | NodeKind::InlineHtml
        )
    }
}

/// A node of the document tree. A node exclusively owns its children.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub span: Span,
    /// Nesting depth; the document root is at depth 0.
    pub depth: usize,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(kind: NodeKind, span: impl Into<Span>) -> Self {
        Self {
            kind,
            span: span.into(),
            depth: 0,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self.fix_depths(self.depth);
        self
    }

    pub(crate) fn fix_depths(&mut self, depth: usize) {
        self.depth = depth;
        for child in &mut self.children {
            child.fix_depths(depth + 1);
        }
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(Node::subtree_len).sum::<usize>()
    }

    /// Extracts the plain text of this node from `source`.
    ///
    /// Inline formatting is flattened: only text and code spans contribute
    /// bytes, soft breaks become a space and hard breaks a newline. Block
    /// children other than paragraphs (nested lists, code blocks, quotes)
    /// are not part of a node's own text. A code block yields its lines
    /// joined with `\n`.
    pub fn text(&self, source: &[u8]) -> Result<String, TreeError> {
        if let NodeKind::CodeBlock { .. } = self.kind {
            return Ok(self.lines(source)?.join("\n"));
        }
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(source, &mut out)?;
        }
        Ok(out)
    }

    /// Returns the raw source lines of a code block, or nothing for other kinds.
    pub fn lines<'s>(&self, source: &'s [u8]) -> Result<Vec<Cow<'s, str>>, TreeError> {
        match &self.kind {
            NodeKind::CodeBlock { lines, .. } => lines.iter().map(|l| l.slice(source)).collect(),
            _ => Ok(Vec::new()),
        }
    }

    fn collect_text(&self, source: &[u8], out: &mut String) -> Result<(), TreeError> {
        match &self.kind {
            NodeKind::Text | NodeKind::Code => out.push_str(&self.span.slice(source)?),
            NodeKind::SoftBreak => out.push(' '),
            NodeKind::HardBreak => out.push('\n'),
            NodeKind::Paragraph => {
                if !out.is_empty() && !out.ends_with(char::is_whitespace) {
                    out.push(' ');
                }
                for child in &self.children {
                    child.collect_text(source, out)?;
                }
            }
            kind if kind.is_inline() => {
                for child in &self.children {
                    child.collect_text(source, out)?;
                }
            }
            _ => {}
        }
        Ok(())
    }
}
