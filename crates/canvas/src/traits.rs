use crate::error::CanvasError;
use crate::types::{Align, Border, Color, FontDescriptor};

/// A cursor-based page surface, abstracting the drawing primitives the
/// render engine needs.
///
/// Coordinates are in points with the origin at the top-left corner of the
/// page and Y growing downward. Text operations never advance the cursor
/// vertically beyond the line they wrote; vertical spacing is the caller's
/// job, through [`Canvas::newline`].
pub trait Canvas {
    /// The font subsequent text is drawn with.
    fn font(&self) -> &FontDescriptor;

    fn set_font(&mut self, font: &FontDescriptor) -> Result<(), CanvasError>;

    /// Flows `text` from the cursor, wrapping at the right margin and
    /// continuing lines at the left margin. The cursor is left just after the
    /// last character written.
    fn write(&mut self, line_height: f32, text: &str) -> Result<(), CanvasError>;

    /// Writes `text` as a single-line cell at the cursor; the cursor moves
    /// right by the text width.
    fn cell(&mut self, height: f32, text: &str) -> Result<(), CanvasError>;

    /// Writes a block of text wrapped to `width`, growing to fit, optionally
    /// bordered and filled with the current fill colour. The cursor moves
    /// below the block, at the left margin.
    fn multi_line_cell(
        &mut self,
        width: f32,
        line_height: f32,
        text: &str,
        border: Border,
        align: Align,
        fill: bool,
    ) -> Result<(), CanvasError>;

    /// Strokes a straight line. Does not move the cursor.
    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> Result<(), CanvasError>;

    fn fill_color(&self) -> Color;

    fn set_fill_color(&mut self, color: Color);

    fn left_margin(&self) -> f32;

    /// Moves the left margin. The cursor is pulled right if it would
    /// otherwise sit left of the new margin.
    fn set_left_margin(&mut self, margin: f32);

    fn right_margin(&self) -> f32;

    fn page_width(&self) -> f32;

    fn x(&self) -> f32;

    fn y(&self) -> f32;

    /// Moves the cursor down by `height` and back to the left margin.
    fn newline(&mut self, height: f32);

    fn add_page(&mut self) -> Result<(), CanvasError>;

    /// Starts a new page when a box of `height` at the cursor would cross the
    /// bottom margin. Callers that draw at an explicit position read the
    /// cursor after this returns.
    fn ensure_room(&mut self, height: f32) -> Result<(), CanvasError>;

    /// Width between the current left margin and the right margin.
    fn usable_width(&self) -> f32 {
        (self.page_width() - self.left_margin() - self.right_margin()).max(0.0)
    }
}
