use crate::context::RenderContext;
use crate::engine::Traversal;
use crate::error::RenderError;
use crate::guard::with_font;
use mdpdf_canvas::Canvas;
use mdpdf_tree::Node;

pub(super) fn render<C: Canvas + ?Sized>(
    node: &Node,
    level: u8,
    canvas: &mut C,
    ctx: &mut RenderContext<'_>,
) -> Result<Traversal, RenderError> {
    let heading = ctx.style.heading(level);
    let text = node.text(ctx.source)?;

    canvas.newline(heading.space_before);
    with_font(canvas, &heading.font, |canvas| {
        canvas.cell(heading.line_height, &text)?;
        canvas.newline(heading.line_height);
        Ok(())
    })?;
    canvas.newline(ctx.style.heading_gap_after);
    Ok(Traversal::Descend)
}
