use thiserror::Error;

/// Everything that can make a single submission fail.
///
/// All variants end in the same place: one failure notification carrying the
/// `Display` rendering below. The user-facing text does not distinguish
/// status codes from connection failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The required `server_url` setting is absent or blank. No request is
    /// issued in this case.
    #[error("no server URL is configured")]
    MissingServerUrl,
    /// The request could not be sent or no response arrived.
    #[error("network error: {0}")]
    Network(String),
    /// A response arrived but with a non-success status code.
    #[error("server returned status {0}")]
    HttpStatus(u16),
    /// A response arrived but its body was not valid JSON.
    #[error("malformed server response: {0}")]
    MalformedResponse(String),
}
