use crate::error::CanvasError;
use crate::flip_y;
use crate::geometry::{Margins, PageSize};
use crate::metrics::{FontMetrics, StandardFamily};
use crate::traits::Canvas;
use crate::types::{Align, Border, Color, FontDescriptor};
use crate::wrap::break_lines;
use crate::writer::StreamingPdfWriter;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Object, StringFormat};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Cursor, Seek, Write};
use std::path::Path;

/// Horizontal padding inside a multi-line cell.
const CELL_PADDING: f32 = 2.0;
const STROKE_WIDTH: f32 = 0.5;

/// A [`Canvas`] that lays text out with the standard-14 font metrics and
/// serialises the result as PDF through `lopdf`.
///
/// Pages are kept as content-stream operations until [`PdfCanvas::finish`]
/// streams them out. When auto page break is on (the default), any text,
/// cell or [`Canvas::ensure_room`] request that would cross the bottom margin
/// starts a new page first.
#[derive(Debug)]
pub struct PdfCanvas {
    page_width: f32,
    page_height: f32,
    margins: Margins,
    left_margin: f32,
    x: f32,
    y: f32,
    font: FontDescriptor,
    metrics: FontMetrics,
    font_resource: String,
    fill_color: Color,
    auto_page_break: bool,
    pages: Vec<Vec<Operation>>,
    /// PostScript name -> page resource name (`F1`, `F2`, ...).
    font_resources: BTreeMap<&'static str, String>,
}

impl PdfCanvas {
    /// Creates a canvas with no pages. Call [`Canvas::add_page`] before drawing.
    pub fn new(page_size: PageSize, margins: Margins) -> Self {
        let (page_width, page_height) = page_size.dimensions_pt();
        let font = FontDescriptor::default();
        let metrics = FontMetrics {
            family: StandardFamily::Helvetica,
            style: font.style,
            size: font.size,
        };
        let mut canvas = Self {
            page_width,
            page_height,
            margins,
            left_margin: margins.left,
            x: margins.left,
            y: margins.top,
            font,
            metrics,
            font_resource: String::new(),
            fill_color: Color::WHITE,
            auto_page_break: true,
            pages: Vec::new(),
            font_resources: BTreeMap::new(),
        };
        canvas.font_resource = canvas.register_font(metrics);
        canvas
    }

    pub fn with_auto_page_break(mut self, enabled: bool) -> Self {
        self.auto_page_break = enabled;
        self
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn page_height(&self) -> f32 {
        self.page_height
    }

    pub fn margins(&self) -> Margins {
        self.margins
    }

    /// Streams the document to `writer` and returns it.
    pub fn finish<W: Write + Seek>(self, writer: W) -> Result<W, CanvasError> {
        let mut font_dict = Dictionary::new();
        for (base_font, resource) in &self.font_resources {
            font_dict.set(
                resource.as_bytes().to_vec(),
                Object::Dictionary(dictionary! {
                    "Type" => "Font",
                    "Subtype" => "Type1",
                    "BaseFont" => Object::Name(base_font.as_bytes().to_vec()),
                    "Encoding" => "WinAnsiEncoding",
                }),
            );
        }

        let mut pdf = StreamingPdfWriter::new(writer, "1.7", font_dict)?;
        for operations in self.pages {
            let content_id = pdf.write_content_stream(Content { operations })?;
            pdf.write_page(content_id, self.page_width, self.page_height)?;
        }
        log::debug!("Finished PDF with {} page(s)", pdf.page_count());
        Ok(pdf.finish()?)
    }

    pub fn to_bytes(self) -> Result<Vec<u8>, CanvasError> {
        Ok(self.finish(Cursor::new(Vec::new()))?.into_inner())
    }

    /// Writes the document to `path`, creating or truncating the file.
    pub fn save(self, path: impl AsRef<Path>) -> Result<(), CanvasError> {
        let file = File::create(path.as_ref())?;
        let mut writer = self.finish(BufWriter::new(file))?;
        writer.flush()?;
        Ok(())
    }

    fn register_font(&mut self, metrics: FontMetrics) -> String {
        let base_font = metrics.family.base_font(metrics.style);
        let next = self.font_resources.len() + 1;
        self.font_resources
            .entry(base_font)
            .or_insert_with(|| format!("F{}", next))
            .clone()
    }

    fn operations(&mut self) -> Result<&mut Vec<Operation>, CanvasError> {
        self.pages.last_mut().ok_or(CanvasError::NoPage)
    }

    fn bottom_limit(&self) -> f32 {
        self.page_height - self.margins.bottom
    }

    fn start_page(&mut self) {
        self.pages.push(Vec::new());
        self.y = self.margins.top;
    }

    fn emit_text(&mut self, x: f32, top: f32, height: f32, text: &str) -> Result<(), CanvasError> {
        let baseline = top + height / 2.0 + 0.3 * self.font.size;
        let pdf_y = flip_y(baseline, self.page_height);
        let resource = self.font_resource.clone();
        let size = self.font.size;
        let ops = self.operations()?;
        ops.push(Operation::new("BT", vec![]));
        ops.push(Operation::new("Tf", vec![Object::Name(resource.into_bytes()), size.into()]));
        ops.push(Operation::new("Td", vec![x.into(), pdf_y.into()]));
        ops.push(Operation::new(
            "Tj",
            vec![Object::String(to_win_ansi(text), StringFormat::Literal)],
        ));
        ops.push(Operation::new("ET", vec![]));
        Ok(())
    }

    fn draw_box(&mut self, x: f32, top: f32, width: f32, height: f32, border: Border, fill: bool) -> Result<(), CanvasError> {
        let paint = match (border, fill) {
            (Border::All, true) => "B",
            (Border::All, false) => "S",
            (Border::None, true) => "f",
            (Border::None, false) => return Ok(()),
        };
        let [r, g, b] = self.fill_color.to_unit();
        let pdf_y = flip_y(top + height, self.page_height);
        let ops = self.operations()?;
        ops.push(Operation::new("q", vec![]));
        ops.push(Operation::new("w", vec![STROKE_WIDTH.into()]));
        ops.push(Operation::new("rg", vec![r.into(), g.into(), b.into()]));
        ops.push(Operation::new("re", vec![x.into(), pdf_y.into(), width.into(), height.into()]));
        ops.push(Operation::new(paint, vec![]));
        ops.push(Operation::new("Q", vec![]));
        Ok(())
    }
}

impl Canvas for PdfCanvas {
    fn font(&self) -> &FontDescriptor {
        &self.font
    }

    fn set_font(&mut self, font: &FontDescriptor) -> Result<(), CanvasError> {
        let family = StandardFamily::resolve(&font.family)?;
        let metrics = FontMetrics {
            family,
            style: font.style,
            size: font.size,
        };
        self.font_resource = self.register_font(metrics);
        self.metrics = metrics;
        self.font = font.clone();
        Ok(())
    }

    fn write(&mut self, line_height: f32, text: &str) -> Result<(), CanvasError> {
        let metrics = self.metrics;
        let first_width = (self.page_width - self.margins.right - self.x).max(0.0);
        let lines = break_lines(text, first_width, self.usable_width(), |c| metrics.char_width(c));

        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                self.x = self.left_margin;
                self.y += line_height;
            }
            self.ensure_room(line_height)?;
            if !line.is_empty() {
                self.emit_text(self.x, self.y, line_height, line)?;
            }
            self.x += metrics.string_width(line);
        }
        Ok(())
    }

    fn cell(&mut self, height: f32, text: &str) -> Result<(), CanvasError> {
        self.ensure_room(height)?;
        if !text.is_empty() {
            self.emit_text(self.x, self.y, height, text)?;
        }
        self.x += self.metrics.string_width(text);
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
        let metrics = self.metrics;
        let inner = (width - 2.0 * CELL_PADDING).max(0.0);
        let lines = break_lines(text, inner, inner, |c| metrics.char_width(c));
        let x0 = self.x;
        let mut next = 0;

        while next < lines.len() {
            self.ensure_room(line_height)?;
            let remaining = lines.len() - next;
            let count = if self.auto_page_break {
                let room = ((self.bottom_limit() - self.y) / line_height).floor() as usize;
                room.clamp(1, remaining)
            } else {
                remaining
            };

            self.draw_box(x0, self.y, width, count as f32 * line_height, border, fill)?;
            for line in &lines[next..next + count] {
                let slack = (inner - metrics.string_width(line)).max(0.0);
                let offset = match align {
                    Align::Left => 0.0,
                    Align::Center => slack / 2.0,
                    Align::Right => slack,
                };
                if !line.is_empty() {
                    self.emit_text(x0 + CELL_PADDING + offset, self.y, line_height, line)?;
                }
                self.y += line_height;
            }
            next += count;
            if next < lines.len() {
                self.start_page();
            }
        }

        self.x = self.left_margin;
        Ok(())
    }

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> Result<(), CanvasError> {
        let page_height = self.page_height;
        let ops = self.operations()?;
        ops.push(Operation::new("q", vec![]));
        ops.push(Operation::new("w", vec![STROKE_WIDTH.into()]));
        ops.push(Operation::new("m", vec![x1.into(), flip_y(y1, page_height).into()]));
        ops.push(Operation::new("l", vec![x2.into(), flip_y(y2, page_height).into()]));
        ops.push(Operation::new("S", vec![]));
        ops.push(Operation::new("Q", vec![]));
        Ok(())
    }

    fn fill_color(&self) -> Color {
        self.fill_color
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    fn left_margin(&self) -> f32 {
        self.left_margin
    }

    fn set_left_margin(&mut self, margin: f32) {
        self.left_margin = margin;
        if self.x < margin {
            self.x = margin;
        }
    }

    fn right_margin(&self) -> f32 {
        self.margins.right
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
    }

    fn add_page(&mut self) -> Result<(), CanvasError> {
        self.start_page();
        self.x = self.left_margin;
        Ok(())
    }

    /// The cursor keeps its X position across the break.
    fn ensure_room(&mut self, height: f32) -> Result<(), CanvasError> {
        if self.pages.is_empty() {
            return Err(CanvasError::NoPage);
        }
        if self.auto_page_break && self.y + height > self.bottom_limit() && self.y > self.margins.top {
            log::trace!("Page break at y={:.1}", self.y);
            self.start_page();
        }
        Ok(())
    }
}

/// Encodes text for a WinAnsi standard font; unmappable characters become `?`.
fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| match c {
            '\u{20ac}' => 0x80,
            '\u{2026}' => 0x85,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201c}' => 0x93,
            '\u{201d}' => 0x94,
            '\u{2022}' => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            '\t' => b' ',
            c if (c as u32) < 0x80 || (0xa0..=0xff).contains(&(c as u32)) => c as u8,
            _ => b'?',
        })
        .collect()
}
