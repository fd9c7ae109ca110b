//! Failure taxonomy of the data fetch gateway.

/// Why a remote query produced no records.
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    /// Connection, TLS or timeout failure before a response arrived.
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a non-success HTTP status.
    #[error("HTTP {status}: {body}")]
    Status {
        /// Response status code.
        status: u16,
        /// Start of the response body, for diagnostics.
        body: String,
    },

    /// The body was not the expected JSON shape.
    #[error("Invalid response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The GraphQL layer reported errors.
    #[error("Query rejected: {}", .0.join("; "))]
    Graphql(Vec<String>),

    /// Neither `data` nor `errors` was present.
    #[error("Response carried no data")]
    MissingData,
}
