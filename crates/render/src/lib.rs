//! Markdown render engine.
//!
//! [`Renderer::render`] walks a [`mdpdf_tree::Node`] tree once, in document
//! order, and turns each block into drawing calls on a
//! [`mdpdf_canvas::Canvas`]. What each block looks like is governed by a
//! [`RenderStyle`].
//!
//! ```ignore
//! use mdpdf_canvas::{Canvas, RecordingCanvas};
//!
//! let source = "# Title\n\nBody text.";
//! let tree = mdpdf_tree::parse(source);
//! let mut canvas = RecordingCanvas::default();
//! canvas.add_page()?;
//! mdpdf_render::render(&tree, source.as_bytes(), &mut canvas)?;
//! ```

mod context;
mod engine;
mod error;
mod guard;
mod nodes;
pub mod style;

pub use context::RenderContext;
pub use engine::{render, RenderStats, Renderer, Traversal};
pub use error::RenderError;
pub use guard::{with_font, with_indent};
pub use style::{HeadingStyle, RenderStyle};
