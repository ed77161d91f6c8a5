//! Error types for ladrilleria operations.

/// Error type covering input, marshalling, and storage-engine failures.
///
/// Engine-side rejections are classified into a closed set of kinds at the
/// storage adapter boundary. The HTTP layer currently reports every kind the
/// same way, but keeping them distinguishable here lets a later revision map
/// them to differentiated status codes without changing the adapter contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid input or parameter errors.
    InvalidInput(String),

    /// Engine-side validation rejection (malformed item, bad key type).
    Validation(String),

    /// Throughput or rate limit exceeded at the engine.
    Throttled(String),

    /// Network or connection failure reaching the engine.
    Connectivity(String),

    /// Credential or authorization failure.
    Unauthorized(String),

    /// Encoding or decoding errors in the attribute-value format.
    Encoding(String),

    /// Any other engine-side failure.
    Storage(String),

    /// Internal errors indicating bugs or invariant violations.
    Internal(String),
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Error::Validation(msg) => write!(f, "Validation error: {}", msg),
            Error::Throttled(msg) => write!(f, "Throughput exceeded: {}", msg),
            Error::Connectivity(msg) => write!(f, "Connectivity error: {}", msg),
            Error::Unauthorized(msg) => write!(f, "Authorization error: {}", msg),
            Error::Encoding(msg) => write!(f, "Encoding error: {}", msg),
            Error::Storage(msg) => write!(f, "Storage error: {}", msg),
            Error::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

/// Result type alias for ladrilleria operations.
pub type Result<T> = std::result::Result<T, Error>;
