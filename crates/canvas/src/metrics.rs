//! Glyph metrics for the standard-14 PDF fonts the canvas supports.
//!
//! Widths are in thousandths of an em, taken from the Adobe AFM files for the
//! printable ASCII range. Characters outside that range are measured with
//! the width of a digit, which is close enough for line breaking.

use crate::error::CanvasError;
use crate::types::FontStyle;

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

const COURIER_WIDTH: u16 = 600;
const FALLBACK_WIDTH: u16 = 556;

/// The standard font families a [`crate::PdfCanvas`] can draw with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardFamily {
    Helvetica,
    Courier,
}

impl StandardFamily {
    /// Resolves a family name, accepting common aliases.
    pub fn resolve(family: &str) -> Result<Self, CanvasError> {
        match family.to_ascii_lowercase().as_str() {
            "helvetica" | "arial" | "sans-serif" => Ok(StandardFamily::Helvetica),
            "courier" | "courier new" | "monospace" => Ok(StandardFamily::Courier),
            _ => Err(CanvasError::UnknownFont(family.to_string())),
        }
    }

    /// The PostScript name of the face for `style`.
    pub fn base_font(self, style: FontStyle) -> &'static str {
        match (self, style) {
            (StandardFamily::Helvetica, FontStyle::Regular) => "Helvetica",
            (StandardFamily::Helvetica, FontStyle::Bold) => "Helvetica-Bold",
            (StandardFamily::Helvetica, FontStyle::Italic) => "Helvetica-Oblique",
            (StandardFamily::Helvetica, FontStyle::BoldItalic) => "Helvetica-BoldOblique",
            (StandardFamily::Courier, FontStyle::Regular) => "Courier",
            (StandardFamily::Courier, FontStyle::Bold) => "Courier-Bold",
            (StandardFamily::Courier, FontStyle::Italic) => "Courier-Oblique",
            (StandardFamily::Courier, FontStyle::BoldItalic) => "Courier-BoldOblique",
        }
    }

    /// Advance width of `c` in thousandths of an em.
    pub fn char_width(self, style: FontStyle, c: char) -> u16 {
        match self {
            StandardFamily::Courier => COURIER_WIDTH,
            StandardFamily::Helvetica => {
                let table = if style.is_bold() { &HELVETICA_BOLD } else { &HELVETICA };
                match c as u32 {
                    code @ 32..=126 => table[(code - 32) as usize],
                    _ => FALLBACK_WIDTH,
                }
            }
        }
    }
}

/// A resolved face plus size, able to measure strings in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    pub family: StandardFamily,
    pub style: FontStyle,
    pub size: f32,
}

impl FontMetrics {
    pub fn char_width(&self, c: char) -> f32 {
        self.family.char_width(self.style, c) as f32 * self.size / 1000.0
    }

    pub fn string_width(&self, s: &str) -> f32 {
        s.chars().map(|c| self.char_width(c)).sum()
    }
}
