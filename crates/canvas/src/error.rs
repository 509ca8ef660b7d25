use thiserror::Error;

#[derive(Error, Debug)]
pub enum CanvasError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("PDF generation error: {0}")]
    Pdf(String),
    #[error("Unknown font family '{0}'")]
    UnknownFont(String),
    #[error("No page has been added to the canvas")]
    NoPage,
    #[error("Other canvas error: {0}")]
    Other(String),
}

impl From<lopdf::Error> for CanvasError {
    fn from(err: lopdf::Error) -> Self {
        CanvasError::Pdf(err.to_string())
    }
}
