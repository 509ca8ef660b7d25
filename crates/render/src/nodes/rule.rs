use crate::context::RenderContext;
use crate::engine::Traversal;
use crate::error::RenderError;
use mdpdf_canvas::Canvas;

pub(super) fn render<C: Canvas + ?Sized>(
    canvas: &mut C,
    ctx: &mut RenderContext<'_>,
) -> Result<Traversal, RenderError> {
    canvas.ensure_room(ctx.style.block_gap)?;
    let (x, y) = (canvas.x(), canvas.y());
    let right = canvas.page_width() - canvas.right_margin();
    canvas.line(x, y, right, y)?;
    canvas.newline(ctx.style.block_gap);
    Ok(Traversal::Descend)
}
