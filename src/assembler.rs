//! Single-document conversion: parse, render onto a fresh PDF canvas, save.

use crate::config::ConverterConfig;
use crate::error::ConvertError;
use log::info;
use mdpdf_canvas::{Canvas, PdfCanvas};
use mdpdf_render::Renderer;
use std::fs;
use std::path::{Path, PathBuf};

/// The PDF path for `input`: same directory and base name, `.pdf` extension.
pub fn output_path_for(input: &Path) -> PathBuf {
    input.with_extension("pdf")
}

/// Renders Markdown `source` onto a new canvas with one page open and the
/// body font selected.
pub fn render_document(source: &str, config: &ConverterConfig) -> Result<PdfCanvas, ConvertError> {
    let tree = mdpdf_tree::parse(source);
    let mut canvas = PdfCanvas::new(config.page_size, config.margins);
    canvas.add_page()?;
    canvas.set_font(&config.style.body_font)?;

    let stats = Renderer::new(config.style.clone()).render(&tree, source.as_bytes(), &mut canvas)?;
    log::debug!(
        "Rendered {} node(s) onto {} page(s)",
        stats.visited + stats.skipped,
        canvas.page_count()
    );
    Ok(canvas)
}

/// Converts Markdown `source` to PDF bytes.
pub fn convert_source(source: &str, config: &ConverterConfig) -> Result<Vec<u8>, ConvertError> {
    Ok(render_document(source, config)?.to_bytes()?)
}

/// Converts the Markdown file at `input` and writes the PDF next to it,
/// returning the output path. An existing PDF of the same name is replaced.
pub fn convert_file(input: &Path, config: &ConverterConfig) -> Result<PathBuf, ConvertError> {
    info!("Converting: {}", input.display());
    let bytes = fs::read(input).map_err(|source| ConvertError::Read {
        path: input.to_path_buf(),
        source,
    })?;
    let source = String::from_utf8_lossy(&bytes);

    let canvas = render_document(&source, config)?;
    let output = output_path_for(input);
    canvas.save(&output)?;
    info!("Successfully created: {}", output.display());
    Ok(output)
}
