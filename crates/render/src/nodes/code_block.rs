use crate::context::RenderContext;
use crate::engine::Traversal;
use crate::error::RenderError;
use crate::guard::with_font;
use mdpdf_canvas::{Align, Border, Canvas};
use mdpdf_tree::Node;

/// Draws the block's lines verbatim in one bordered, filled cell spanning the
/// usable width.
pub(super) fn render<C: Canvas + ?Sized>(
    node: &Node,
    canvas: &mut C,
    ctx: &mut RenderContext<'_>,
) -> Result<Traversal, RenderError> {
    let style = ctx.style;
    let text = node.text(ctx.source)?;

    let prior_fill = canvas.fill_color();
    canvas.set_fill_color(style.code_background);
    let result = with_font(canvas, &style.code_font, |canvas| {
        let width = canvas.usable_width();
        canvas.multi_line_cell(width, style.code_line_height, &text, Border::All, Align::Left, true)?;
        Ok(())
    });
    canvas.set_fill_color(prior_fill);
    result?;

    canvas.newline(style.block_gap);
    Ok(Traversal::Descend)
}
