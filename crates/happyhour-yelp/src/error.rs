use thiserror::Error;

/// Errors returned by the Yelp Fusion search client.
///
/// Non-success HTTP statuses are not errors here: the pagination loop logs
/// them and keeps whatever it already fetched.
#[derive(Debug, Error)]
pub enum YelpError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A successful response body could not be deserialized.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
