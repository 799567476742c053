//! Error types for markdown conversion.

use crate::block::BlockType;

/// Result alias used throughout the conversion pipeline.
pub type Result<T> = std::result::Result<T, Error>;

/// Error raised while converting a markdown document.
///
/// Every variant aborts the conversion of the current document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An inline delimiter was opened but never closed.
    #[error("unbalanced `{delimiter}` delimiter in {text:?}")]
    UnbalancedDelimiter {
        delimiter: &'static str,
        text: String,
    },

    /// A line inside a quote or list block lacks the marker its block requires.
    #[error("{} on line {line_number}: {line:?}", block.marker_violation())]
    InconsistentBlockMarker {
        block: BlockType,
        /// 1-based line number within the block.
        line_number: usize,
        line: String,
    },

    /// The document contains no blocks.
    #[error("document is empty")]
    EmptyTree,

    /// A node was built in violation of the node invariants.
    #[error("invalid node: {0}")]
    MissingValue(&'static str),

    /// The first line of the document is not a heading.
    #[error("title not found: first line {line:?} is not a heading")]
    MissingTitle { line: String },
}
