//! Page canvas abstraction.
//!
//! The [`Canvas`] trait is the capability the render engine draws through: a
//! cursor-based page surface with margins, a current font and a fill colour.
//! Two implementations are provided:
//!
//! - [`PdfCanvas`]: lays text out with the standard-14 font metrics and writes
//!   a PDF through `lopdf`.
//! - [`RecordingCanvas`]: records every call as a [`DrawOp`], for tests and
//!   for comparing instruction sequences.

mod error;
pub mod geometry;
pub mod metrics;
mod pdf;
mod recording;
mod traits;
mod types;
pub mod wrap;
mod writer;

pub use error::CanvasError;
pub use geometry::{Margins, PageSize};
pub use pdf::PdfCanvas;
pub use recording::{DrawOp, RecordingCanvas};
pub use traits::Canvas;
pub use types::{Align, Border, Color, FontDescriptor, FontStyle};
pub use writer::StreamingPdfWriter;

/// Convert a top-down layout Y coordinate to PDF user space (origin bottom-left).
pub fn flip_y(y: f32, page_height: f32) -> f32 {
    page_height - y
}
