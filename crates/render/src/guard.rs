//! Scoped canvas state changes.
//!
//! Each helper applies a change, runs the drawing closure and puts the prior
//! state back before returning, whether the closure succeeded or not.

use crate::context::RenderContext;
use crate::error::RenderError;
use mdpdf_canvas::{Canvas, FontDescriptor};

/// Runs `draw` with `font` active, then restores the font that was active before.
///
/// If both the closure and the restore fail, the closure's error wins.
pub fn with_font<C, T, F>(canvas: &mut C, font: &FontDescriptor, draw: F) -> Result<T, RenderError>
where
    C: Canvas + ?Sized,
    F: FnOnce(&mut C) -> Result<T, RenderError>,
{
    let prior = canvas.font().clone();
    canvas.set_font(font)?;
    let result = draw(canvas);
    let restored = canvas.set_font(&prior);
    let value = result?;
    restored?;
    Ok(value)
}

/// Runs `draw` with the left margin shifted right by `amount` and one more
/// indent level recorded in `ctx`, then restores both.
pub fn with_indent<'a, C, T, F>(
    canvas: &mut C,
    ctx: &mut RenderContext<'a>,
    amount: f32,
    draw: F,
) -> Result<T, RenderError>
where
    C: Canvas + ?Sized,
    F: FnOnce(&mut C, &mut RenderContext<'a>) -> Result<T, RenderError>,
{
    let prior = canvas.left_margin();
    canvas.set_left_margin(prior + amount);
    ctx.indent_level += 1;
    let result = draw(canvas, ctx);
    ctx.indent_level -= 1;
    canvas.set_left_margin(prior);
    result
}
