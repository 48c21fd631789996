//! Cache error types.

/// Kinds of cache errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum CacheErrorKind {
    /// Could not connect to the cache store
    #[display("Failed to connect to cache: {}", _0)]
    Connection(String),
    /// A store command failed
    #[display("Cache command failed: {}", _0)]
    Command(String),
    /// A record could not be serialized for storage
    #[display("Failed to serialize record: {}", _0)]
    Serialization(String),
    /// A stored value could not be decoded into a record
    #[display("Failed to deserialize cached value: {}", _0)]
    Deserialization(String),
    /// Invalid cache configuration
    #[display("Invalid configuration: {}", _0)]
    Configuration(String),
}

/// Cache error with location tracking.
///
/// # Examples
///
/// ```
/// use appfinder_error::{CacheError, CacheErrorKind};
///
/// let err = CacheError::new(CacheErrorKind::Connection("refused".to_string()));
/// assert!(format!("{}", err).contains("connect"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Cache Error: {} at line {} in {}", kind, line, file)]
pub struct CacheError {
    /// The kind of error that occurred
    pub kind: CacheErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl CacheError {
    /// Create a new cache error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CacheErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for cache backend operations.
pub type CacheResult<T> = Result<T, CacheError>;
