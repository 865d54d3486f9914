//! Catalog error types.

use thiserror::Error;

/// Errors from a single remote catalog call.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request could not be sent or the body could not be read.
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    /// The endpoint URL could not be built.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The response body did not have the expected shape.
    #[error("Decode error: {0}")]
    Decode(String),

    /// The GraphQL endpoint reported errors.
    #[error("GraphQL error: {0}")]
    GraphQl(String),

    /// Nothing registered for the requested key (mock client).
    #[error("Not found: {0}")]
    NotFound(String),

    /// Injected or otherwise unclassified failure.
    #[error("Remote error: {0}")]
    Remote(String),
}

impl CatalogError {
    pub fn status(status: u16, url: impl Into<String>) -> Self {
        Self::Status {
            status,
            url: url.into(),
        }
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn graphql(msg: impl Into<String>) -> Self {
        Self::GraphQl(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn remote(msg: impl Into<String>) -> Self {
        Self::Remote(msg.into())
    }
}
