//! Error types for tincture.

use thiserror::Error;

/// Errors returned when parsing a hex color string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// Wrong number of characters after trimming and stripping `#`.
    #[error("invalid hex string length {0} (expected 6)")]
    InvalidLength(usize),

    /// A character that is not a hexadecimal digit.
    #[error("invalid hex digit '{0}'")]
    InvalidDigit(char),
}
