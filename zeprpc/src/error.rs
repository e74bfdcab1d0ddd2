//! Error types for the JSON-RPC transport

/// Result type alias for transport operations
pub type Result<T> = std::result::Result<T, RpcError>;

/// Errors that can occur during a single JSON-RPC exchange
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    /// HTTP exchange failed (connect, timeout, read)
    #[error("HTTP request failed: {0}")]
    Http(#[from] ureq::Error),

    /// Server answered with a non-success HTTP status
    #[error("HTTP status {0}")]
    Status(u16),

    /// Request serialization or response parsing failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Response carried no usable `result` field
    #[error("response has no result")]
    NoResult,
}
