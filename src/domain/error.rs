//! Error types for the docket core.
//!
//! This module defines the centralized error type [`DocketError`] and a type alias
//! [`Result`] used throughout the crate. Most inconsistencies reported by the editor
//! surface never become errors at all: the document set absorbs them. What remains
//! here are contract violations, enumeration failures raised by open-file sources,
//! and configuration problems.

use thiserror::Error;

/// The main error type for docket operations.
///
/// # Examples
///
/// ```
/// use docket::domain::{DocketError, SortCriterion};
///
/// let err = SortCriterion::DisableSorting.descriptor().unwrap_err();
/// assert!(matches!(err, DocketError::UnsupportedOperation(_)));
/// ```
#[derive(Debug, Error)]
pub enum DocketError {
    /// An operation was requested that the receiver declares it cannot perform.
    ///
    /// Raised when a sort descriptor is requested from a criterion that has no
    /// ordering. Callers are expected to check `has_ordering()` first, so this
    /// always indicates a programming error and is propagated.
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// Enumerating the editor's open files failed part-way.
    ///
    /// Produced by open-file sources. `DocumentSetManager::synchronize` absorbs it
    /// and treats the whole pass as empty.
    #[error("Enumeration error: {0}")]
    Enumeration(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration or preference value is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Colour palette could not be loaded or parsed.
    #[error("Palette error: {0}")]
    Palette(String),
}

/// A specialized `Result` type for docket operations.
pub type Result<T> = std::result::Result<T, DocketError>;
