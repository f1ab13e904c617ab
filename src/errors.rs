//! Defines the error types used throughout the scaffolder.
//!
//! The `Error` enum separates input problems (a reference that cannot be
//! parsed, a listing entry of an unknown kind) from transport and filesystem
//! failures, so the CLI can present each one sensibly.

use thiserror::Error;

/// Errors raised while resolving a repository and mirroring its contents.
#[derive(Error, Debug)]
pub enum Error {
    // --- Input Errors ---
    /// The repository reference does not look like `<host>/<owner>/<repo>[/tree/<ref>]`.
    #[error("Malformed repository reference '{input}': expected <host>/<owner>/<repo>[/tree/<ref>]")]
    MalformedReference {
        /// The string that failed to parse.
        input: String,
    },

    // --- Listing Errors ---
    /// A directory listing contained an entry that is neither a file nor a directory.
    #[error("Unexpected content type '{content_type}' in directory listing")]
    UnexpectedContentType {
        /// The `type` string reported by the API.
        content_type: String,
    },

    /// A file entry carried a download URL that is not a well-formed absolute URL.
    #[error("File entry has an invalid URL for download: '{url}'")]
    InvalidDownloadUrl {
        /// The offending URL string.
        url: String,
    },

    /// A file or directory entry is missing a field it cannot do without.
    #[error("Malformed directory listing entry: {reason}")]
    MalformedEntry {
        /// What was missing.
        reason: String,
    },

    /// A remote path did not contain the anchor it was supposed to be rewritten against.
    #[error("Remote path '{path}' does not contain the expected prefix '{anchor}'")]
    AnchorNotFound {
        /// The remote path that was inspected.
        path: String,
        /// The anchor that was searched for.
        anchor: String,
    },

    /// A rewritten path would land outside of the output directory.
    #[error("Refusing to write outside of the output directory: '{path}'")]
    UnsafePath {
        /// The relative path that was rejected.
        path: String,
    },

    // --- Transport Errors ---
    /// The server answered with a non-success status code.
    #[error("Request to '{url}' failed with HTTP status {status}")]
    HttpStatus {
        /// The requested URL.
        url: String,
        /// The status code returned.
        status: u16,
    },

    /// The request could not be completed at all.
    #[error("Request to '{url}' failed: {source}")]
    Transport {
        /// The requested URL.
        url: String,
        /// The underlying transport error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A response body did not have the expected JSON shape.
    #[error("Could not decode response from '{url}': {source}")]
    Decode {
        /// The requested URL.
        url: String,
        /// The underlying decoding error.
        #[source]
        source: serde_json::Error,
    },

    // --- I/O Errors ---
    /// Error occurring while creating directories or writing files.
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    // --- Configuration Errors ---
    /// Invalid configuration settings or combinations.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// A specialized `Result` type for scaffolding operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create an `Error::Io` with path context.
///
/// # Arguments
/// * `source` - The original `std::io::Error`.
/// * `path` - The path associated with the error.
pub fn io_error_with_path<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}
