//! Errors raised while reading or writing STL streams.

use thiserror::Error;

/// Result type for STL codec operations.
pub type StlResult<T> = Result<T, StlError>;

#[derive(Debug, Error)]
pub enum StlError {
    /// The first line of an ASCII document is not `solid [name]`.
    #[error("invalid STL header, expected \"solid [name]\" but found \"{header}\"")]
    MalformedHeader { header: String },

    /// A line inside a facet block does not follow the grammar.
    #[error("malformed facet at line {line}: expected {expected}, found \"{found}\"")]
    MalformedFacet {
        line: usize,
        expected: &'static str,
        found: String,
    },

    #[error("invalid number \"{token}\" at line {line}")]
    InvalidNumber {
        line: usize,
        token: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    /// Input ended in the middle of a facet block.
    #[error("unexpected end of input after line {line} while expecting {expected}")]
    UnexpectedEof { line: usize, expected: &'static str },

    /// Fewer than 50 bytes remained for a binary facet record.
    #[error("truncated facet record {index}: expected 50 bytes, {remaining} remaining")]
    TruncatedFacet { index: usize, remaining: u64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
