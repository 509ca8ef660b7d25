use crate::error::CanvasError;
use crate::geometry::{Margins, PageSize};
use crate::traits::Canvas;
use crate::types::{Align, Border, Color, FontDescriptor};

/// One canvas call, as recorded by [`RecordingCanvas`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    SetFont(FontDescriptor),
    Write { line_height: f32, text: String },
    Cell { height: f32, text: String },
    MultiLineCell {
        width: f32,
        line_height: f32,
        text: String,
        border: Border,
        align: Align,
        fill: bool,
    },
    Line { x1: f32, y1: f32, x2: f32, y2: f32 },
    SetFillColor(Color),
    SetLeftMargin(f32),
    Newline(f32),
    AddPage,
    EnsureRoom(f32),
}

/// A [`Canvas`] that records calls instead of drawing.
///
/// The cursor moves the simplest possible way: text never wraps, a
/// multi-line cell advances one line per `\n`-separated line. That is enough
/// to check margins, fonts and call order. [`RecordingCanvas::fail_after`]
/// makes the canvas start rejecting drawing calls (text, cells and lines),
/// for exercising error paths in callers. Font and page changes always
/// succeed.
#[derive(Debug, Clone)]
pub struct RecordingCanvas {
    ops: Vec<DrawOp>,
    font: FontDescriptor,
    fill_color: Color,
    page_width: f32,
    right_margin: f32,
    left_margin: f32,
    x: f32,
    y: f32,
    top: f32,
    fail_after: Option<usize>,
    drawing_calls: usize,
}

impl Default for RecordingCanvas {
    fn default() -> Self {
        Self::new(PageSize::A4, Margins::all(50.0))
    }
}

impl RecordingCanvas {
    pub fn new(page_size: PageSize, margins: Margins) -> Self {
        let (page_width, _) = page_size.dimensions_pt();
        Self {
            ops: Vec::new(),
            font: FontDescriptor::default(),
            fill_color: Color::WHITE,
            page_width,
            right_margin: margins.right,
            left_margin: margins.left,
            x: margins.left,
            y: margins.top,
            top: margins.top,
            fail_after: None,
            drawing_calls: 0,
        }
    }

    /// Lets `calls` drawing operations succeed, then fails every one after.
    pub fn fail_after(mut self, calls: usize) -> Self {
        self.fail_after = Some(calls);
        self
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<DrawOp> {
        self.ops
    }

    /// Text of every `Write`, `Cell` and `MultiLineCell`, in call order.
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Write { text, .. } | DrawOp::Cell { text, .. } | DrawOp::MultiLineCell { text, .. } => {
                    Some(text.as_str())
                }
                _ => None,
            })
            .collect()
    }

    fn check(&mut self) -> Result<(), CanvasError> {
        self.drawing_calls += 1;
        match self.fail_after {
            Some(limit) if self.drawing_calls > limit => Err(CanvasError::Other(format!(
                "recording canvas refused call {}",
                self.drawing_calls
            ))),
            _ => Ok(()),
        }
    }
}

impl Canvas for RecordingCanvas {
    fn font(&self) -> &FontDescriptor {
        &self.font
    }

    fn set_font(&mut self, font: &FontDescriptor) -> Result<(), CanvasError> {
        self.font = font.clone();
        self.ops.push(DrawOp::SetFont(font.clone()));
        Ok(())
    }

    fn write(&mut self, line_height: f32, text: &str) -> Result<(), CanvasError> {
        self.check()?;
        self.ops.push(DrawOp::Write { line_height, text: text.to_string() });
        Ok(())
    }

    fn cell(&mut self, height: f32, text: &str) -> Result<(), CanvasError> {
        self.check()?;
        self.ops.push(DrawOp::Cell { height, text: text.to_string() });
        Ok(())
    }

    fn multi_line_cell(
        &mut self,
        width: f32,
        line_height: f32,
        text: &str,
        border: Border,
        align: Align,
        fill: bool,
    ) -> Result<(), CanvasError> {
        self.check()?;
        self.ops.push(DrawOp::MultiLineCell {
            width,
            line_height,
            text: text.to_string(),
            border,
            align,
            fill,
        });
        self.y += line_height * text.split('\n').count() as f32;
        self.x = self.left_margin;
        Ok(())
    }

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> Result<(), CanvasError> {
        self.check()?;
        self.ops.push(DrawOp::Line { x1, y1, x2, y2 });
        Ok(())
    }

    fn fill_color(&self) -> Color {
        self.fill_color
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
        self.ops.push(DrawOp::SetFillColor(color));
    }

    fn left_margin(&self) -> f32 {
        self.left_margin
    }

    fn set_left_margin(&mut self, margin: f32) {
        self.left_margin = margin;
        if self.x < margin {
            self.x = margin;
        }
        self.ops.push(DrawOp::SetLeftMargin(margin));
    }

    fn right_margin(&self) -> f32 {
        self.right_margin
    }

    fn page_width(&self) -> f32 {
        self.page_width
    }

    fn x(&self) -> f32 {
        self.x
    }

    fn y(&self) -> f32 {
        self.y
    }

    fn newline(&mut self, height: f32) {
        self.x = self.left_margin;
        self.y += height;
        self.ops.push(DrawOp::Newline(height));
    }

    fn add_page(&mut self) -> Result<(), CanvasError> {
        self.x = self.left_margin;
        self.y = self.top;
        self.ops.push(DrawOp::AddPage);
        Ok(())
    }

    /// Recorded only; the recorder has no bottom margin to break at.
    fn ensure_room(&mut self, height: f32) -> Result<(), CanvasError> {
        self.ops.push(DrawOp::EnsureRoom(height));
        Ok(())
    }
}
