use mdpdf_canvas::CanvasError;
use mdpdf_render::RenderError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from resolving inputs or converting a single document.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Path does not exist: {}", .0.display())]
    PathNotFound(PathBuf),

    #[error("Not a Markdown file: {}", .0.display())]
    NotMarkdown(PathBuf),

    #[error("Failed to scan directory '{}': {source}", path.display())]
    Walk { path: PathBuf, source: io::Error },

    #[error("Failed to read '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("PDF output failed: {0}")]
    Canvas(#[from] CanvasError),

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl ConvertError {
    /// Whether the error concerns the input path itself rather than one
    /// document's conversion.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ConvertError::PathNotFound(_) | ConvertError::NotMarkdown(_) | ConvertError::Walk { .. }
        )
    }
}
