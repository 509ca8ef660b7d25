use crate::context::RenderContext;
use crate::engine::Traversal;
use crate::error::RenderError;
use crate::guard::with_indent;
use mdpdf_canvas::Canvas;
use mdpdf_tree::{Node, NodeKind};

/// Writes each item as one prefixed line inside an indent scope.
///
/// Only an item's own text is written; lists nested inside items are not
/// drawn. The items are rendered here, so the engine is told to skip them.
pub(super) fn render<C: Canvas + ?Sized>(
    node: &Node,
    ordered: bool,
    start: u64,
    canvas: &mut C,
    ctx: &mut RenderContext<'_>,
) -> Result<Traversal, RenderError> {
    let style = ctx.style;

    if ordered {
        ctx.push_ordinal(start);
    }
    let result = with_indent(canvas, ctx, style.list_indent, |canvas, ctx| {
        for item in node.children.iter().filter(|c| c.kind == NodeKind::ListItem) {
            let ordinal = if ordered { ctx.next_ordinal() } else { None };
            let text = item.text(ctx.source)?;
            let line = format!("{}{}", style.list_prefix(ordinal), text);
            log::trace!("list item: {:?}", line);
            canvas.write(style.line_height, &line)?;
            canvas.newline(style.line_height);
        }
        Ok(())
    });
    if ordered {
        ctx.pop_ordinal();
    }
    result?;

    canvas.newline(style.block_gap);
    Ok(Traversal::SkipChildren)
}
