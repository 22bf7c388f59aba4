//! Error types for the wikiquote client.
//!
//! Every failure a call can hit ends up as a [`WikiquoteError`]:
//! - `Request` / `Http` - the API could not be reached, answered with a non-2xx
//!    status, or sent a body that was not JSON.
//! - `Url` - the endpoint plus query string did not form a valid URL.
//! - `Decode` - the JSON was fine but not the shape we expected (for example a
//!    `parse` request that came back without a `parse` object).
//! - `NoQuotes` - a random quote was asked for on a page without any.
//!
//! Nothing here is retried or replaced by a default value.

use thiserror::Error;

/// The result type used across the crate.
pub type Result<T> = std::result::Result<T, WikiquoteError>;

#[derive(Debug, Error)]
pub enum WikiquoteError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest_middleware::Error),
    #[error("bad response: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid api url: {0}")]
    Url(#[from] url::ParseError),
    #[error("unexpected response shape for {what}: {source}")]
    Decode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("no quotes found on page")]
    NoQuotes,
}

impl WikiquoteError {
    /// Construct a decode error for the named response shape.
    pub fn decode(what: &'static str, source: serde_json::Error) -> Self {
        WikiquoteError::Decode { what, source }
    }

    /// Short name of the error kind, handy for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            WikiquoteError::Request(_) => "Request",
            WikiquoteError::Http(_) => "Http",
            WikiquoteError::Url(_) => "Url",
            WikiquoteError::Decode { .. } => "Decode",
            WikiquoteError::NoQuotes => "NoQuotes",
        }
    }
}
