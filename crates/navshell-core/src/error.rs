//! Error types for the lookup and parsing helpers.
//!
//! The state transitions themselves are total; only the string-keyed entry
//! points can fail.

use thiserror::Error;

/// Errors returned when resolving identifiers that did not come from the
/// static catalogs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Identifier outside the icon vocabulary
    #[error("unknown icon identifier: {0}")]
    UnknownIcon(String),
    /// No entry with this title in either catalog
    #[error("no navigation entry titled \"{0}\"")]
    UnknownEntry(String),
    /// Theme name other than `light` or `dark`
    #[error("unknown theme mode: {0}")]
    UnknownTheme(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
