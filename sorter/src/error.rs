//! Error types for the sorter crate.

/// Errors raised while interpreting shape data coming from the DOM.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    #[error("unknown shape tag: {0:?}")]
    UnknownTag(String),
}
