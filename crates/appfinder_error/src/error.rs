//! Top-level error wrapper types.

use crate::{CacheError, CatalogError, ConfigError, TransportError};

/// Every error condition AppFinder can report.
///
/// # Examples
///
/// ```
/// use appfinder_error::{AppFinderError, ConfigError};
///
/// let config_err = ConfigError::new("Missing bot token");
/// let err: AppFinderError = config_err.into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum AppFinderErrorKind {
    /// Upstream catalog error
    #[from(CatalogError)]
    Catalog(CatalogError),
    /// Cache store error
    #[from(CacheError)]
    Cache(CacheError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Chat transport error
    #[from(TransportError)]
    Transport(TransportError),
}

/// AppFinder error with kind discrimination.
///
/// # Examples
///
/// ```
/// use appfinder_error::{AppFinderResult, ConfigError};
///
/// fn might_fail() -> AppFinderResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("AppFinder Error: {}", _0)]
pub struct AppFinderError(Box<AppFinderErrorKind>);

impl AppFinderError {
    /// Create a new error from a kind.
    pub fn new(kind: AppFinderErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &AppFinderErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to AppFinderErrorKind
impl<T> From<T> for AppFinderError
where
    T: Into<AppFinderErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for AppFinder operations.
pub type AppFinderResult<T> = std::result::Result<T, AppFinderError>;
