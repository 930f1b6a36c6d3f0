//! Error types for pagecontent library.

use std::io;
use thiserror::Error;

/// Result type alias for pagecontent operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading or rendering page content.
///
/// Content loading never surfaces these to a page: sources return them and
/// the resolver degrades to fallback text.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A document or translation table is not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The content API answered with a non-success status.
    #[error("HTTP {status} from {url}")]
    Http {
        /// Response status code
        status: u16,
        /// Requested URL
        url: String,
    },

    /// The request never produced a response (DNS, TLS, connection reset).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The language code is not one of the supported languages.
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// Error during rendering (Markdown, text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        match (err.status(), err.url()) {
            (Some(status), Some(url)) => Error::Http {
                status: status.as_u16(),
                url: url.to_string(),
            },
            _ => Error::Transport(err.to_string()),
        }
    }
}
