//! Error types for the upstream catalog client.

/// Error kinds for catalog search and lookup requests.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum CatalogErrorKind {
    /// The HTTP request could not be sent or completed
    #[display("HTTP request failed: {}", _0)]
    Http(String),

    /// The upstream answered with a non-success status
    #[display("Upstream returned status {}", _0)]
    Status(u16),

    /// The response body could not be read
    #[display("Failed to read response body: {}", _0)]
    Body(String),

    /// The response body did not match the expected envelope
    #[display("Failed to deserialize response: {}", _0)]
    Deserialization(String),

    /// The client could not be configured
    #[display("Configuration error: {}", _0)]
    Configuration(String),
}

/// Catalog error with location tracking.
///
/// # Examples
///
/// ```
/// use appfinder_error::{CatalogError, CatalogErrorKind};
///
/// let err = CatalogError::new(CatalogErrorKind::Status(503));
/// assert!(format!("{}", err).contains("503"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Catalog Error: {} at line {} in {}", kind, line, file)]
pub struct CatalogError {
    /// The error kind
    pub kind: CatalogErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl CatalogError {
    /// Create a new CatalogError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CatalogErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
