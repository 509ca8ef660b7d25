use mdpdf_canvas::CanvasError;
use mdpdf_tree::TreeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Canvas error: {0}")]
    Canvas(#[from] CanvasError),
    #[error("Document tree error: {0}")]
    Tree(#[from] TreeError),
}
