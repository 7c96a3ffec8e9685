//! Fatal configuration errors.
//!
//! Only unsupported calendar systems are fatal: there is no safe fallback
//! arithmetic for a calendar the date utilities do not implement, so
//! construction refuses instead of substituting behavior. Every other
//! configuration problem is corrected to a default with a warning.

use thiserror::Error;

/// Error refusing widget construction.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A calendar system other than `gregorian` was requested.
    #[error("unsupported calendar type `{0}`; only `gregorian` is supported")]
    UnsupportedCalendarType(String),
}
