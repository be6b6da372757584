//! Error types for the replymark library.

use std::io;
use thiserror::Error;

/// Result type alias for replymark operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur around the rendering core.
///
/// The text-to-document transform itself is total: every string input
/// produces a document and no variant below is ever returned by it. These
/// errors belong to the surrounding surfaces: JSON serialization,
/// transcript persistence, and file I/O in the CLI.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error serializing rendered output.
    #[error("Rendering error: {0}")]
    Render(String),

    /// Error loading or persisting a chat transcript.
    #[error("Transcript error: {0}")]
    Transcript(String),
}
