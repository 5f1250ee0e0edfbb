//! Error types for folio.
//!
//! This module defines the centralized error type [`FolioError`] and a type alias
//! [`Result`] used throughout the crate. The query core itself never fails; every
//! variant here belongs to the shell around it (loading records, reading config
//! and themes, persisting interactions, building share links).

use thiserror::Error;

/// The main error type for folio operations.
///
/// Most variants carry a description string; I/O, JSON, and TOML failures wrap the
/// underlying error via `#[from]` so `?` converts them automatically.
///
/// # Examples
///
/// ```
/// use folio::FolioError;
///
/// fn validate_page_size(size: usize) -> Result<(), FolioError> {
///     if size == 0 {
///         return Err(FolioError::Config("page_size must be positive".to_string()));
///     }
///     Ok(())
/// }
///
/// assert!(validate_page_size(0).is_err());
/// ```
#[derive(Debug, Error)]
pub enum FolioError {
    /// Interaction storage could not be read or written.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Record or interaction JSON could not be parsed or produced.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Config or theme TOML could not be parsed.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Theme file missing, unreadable, or malformed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Two records in one store share an id.
    #[error("Duplicate record id {id} in record store")]
    DuplicateRecord {
        /// The repeated identifier.
        id: u64,
    },

    /// No record with the requested id exists.
    #[error("No post with id {id}")]
    RecordNotFound {
        /// The identifier that was looked up.
        id: u64,
    },

    /// A link could not be built from the configured site origin.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// A specialized `Result` type for folio operations.
pub type Result<T> = std::result::Result<T, FolioError>;
