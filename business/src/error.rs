use thiserror::Error;

/// Why a users batch could not be published.
///
/// Either kind discards the whole batch.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// Transport failure or a non-2xx status.
    #[error("network failure: {0}")]
    Network(String),
    /// Body is not the expected shape, or a record failed validation.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}
