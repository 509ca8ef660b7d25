use crate::context::RenderContext;
use crate::engine::Traversal;
use crate::error::RenderError;
use mdpdf_canvas::Canvas;
use mdpdf_tree::Node;

pub(super) fn render<C: Canvas + ?Sized>(
    node: &Node,
    canvas: &mut C,
    ctx: &mut RenderContext<'_>,
) -> Result<Traversal, RenderError> {
    let text = node.text(ctx.source)?;
    let style = ctx.style;

    canvas.write(style.line_height, &text)?;
    canvas.newline(style.line_height);
    canvas.newline(style.block_gap);
    Ok(Traversal::Descend)
}
