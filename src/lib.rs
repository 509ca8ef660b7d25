//! Markdown to PDF conversion.
//!
//! The pieces live in their own crates: `mdpdf-tree` parses Markdown into a
//! document tree, `mdpdf-render` walks that tree and draws onto an
//! `mdpdf-canvas` page surface, and `mdpdf-executor` fans a batch of files
//! out over threads. This crate ties them together:
//!
//! - [`convert_file`] converts one `.md` file into a `.pdf` beside it.
//! - [`resolve_inputs`] turns a file or directory path into the list of
//!   Markdown files to convert.
//! - [`run_batch`] converts many files in parallel and reports per-file
//!   outcomes.

pub mod assembler;
pub mod batch;
pub mod config;
pub mod error;

pub use assembler::{convert_file, convert_source, output_path_for, render_document};
pub use batch::{is_markdown, resolve_inputs, run_batch, BatchReport};
pub use config::ConverterConfig;
pub use error::ConvertError;

pub use mdpdf_canvas as canvas;
pub use mdpdf_executor as executor;
pub use mdpdf_render as render;
pub use mdpdf_tree as tree;
