//! Per-kind render handlers.
//!
//! Dispatch is a closed match over [`NodeKind`]. Kinds without a handler
//! draw nothing and let the engine descend into their children.

mod code_block;
mod heading;
mod list;
mod paragraph;
mod rule;

use crate::context::RenderContext;
use crate::engine::Traversal;
use crate::error::RenderError;
use mdpdf_canvas::Canvas;
use mdpdf_tree::{Node, NodeKind};

pub(crate) fn render_node<C: Canvas + ?Sized>(
    node: &Node,
    canvas: &mut C,
    ctx: &mut RenderContext<'_>,
) -> Result<Traversal, RenderError> {
    match &node.kind {
        NodeKind::Heading { level } => heading::render(node, *level, canvas, ctx),
        NodeKind::Paragraph => paragraph::render(node, canvas, ctx),
        NodeKind::List { ordered, start } => list::render(node, *ordered, *start, canvas, ctx),
        NodeKind::CodeBlock { .. } => code_block::render(node, canvas, ctx),
        NodeKind::ThematicBreak => rule::render(canvas, ctx),
        _ => Ok(Traversal::Descend),
    }
}
