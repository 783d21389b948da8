use thiserror::Error;

/// Errors returned by the optimization service client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be sent or the response could not be received.
    /// Never retried automatically; surfaced verbatim to the user.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The service responded with a non-success HTTP status.
    #[error("request failed with HTTP status {code}")]
    Status { code: u16 },

    /// The response body could not be deserialized into the expected type.
    #[error("invalid response for {context}: {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// A request URL could not be built from the configured API root.
    #[error("invalid request URL: {0}")]
    BadUrl(String),
}
