use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("span {start}..{end} is outside the {len}-byte source buffer")]
    SpanOutOfBounds { start: usize, end: usize, len: usize },
}
