//! Error type shared by the huffzip library and command line tool.
//!
//! Empty input is not an error: compressing or decompressing an empty buffer
//! succeeds and returns an empty buffer.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HuffError {
    /// A byte of the input has no code in the table built from that same input.
    #[error("No code in the table for byte {0:#04x}")]
    UnknownSymbolInTable(u8),

    /// The container header, tree bytes or payload framing are inconsistent.
    #[error("Malformed container: {0}")]
    MalformedContainer(String),

    /// The payload asked to descend below a leaf of the tree.
    #[error("Bit {bit} of the payload descends past a leaf")]
    TreeTraversalUnderflow { bit: usize },

    /// Refused to replace an existing file without --force.
    #[error("Output file {0} already exists")]
    OutputExists(String),

    /// A --test run decoded something other than the original input.
    #[error("Verification failed for {0}")]
    VerifyFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for huffzip operations
pub type Result<T> = std::result::Result<T, HuffError>;
