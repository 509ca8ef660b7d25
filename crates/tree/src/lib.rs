//! Markdown document tree.
//!
//! This crate defines the in-memory representation of a Markdown document
//! after parsing and before rendering. Nodes never copy text out of the
//! source; every node records the byte range it spans, and text is extracted
//! on demand with [`Node::text`].
//!
//! The front end ([`parse`]) drives `pulldown-cmark`'s offset iterator and
//! folds its event stream into an owned tree.

mod error;
mod node;
mod parser;

pub use error::TreeError;
pub use node::{Node, NodeKind, Span};
pub use parser::{parse, parse_with_options};
