use thiserror::Error;

/// Failure of a single remote call to the data provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Transport or connectivity failure, including timeouts and non-success HTTP statuses.
    #[error("network error: {0}")]
    Network(String),

    /// The response did not match the expected schema.
    #[error("decode error: {0}")]
    Decode(String),

    /// The provider code cannot be used to address an indicator lookup.
    #[error("invalid provider code: {0:?}")]
    InvalidKey(String),
}
