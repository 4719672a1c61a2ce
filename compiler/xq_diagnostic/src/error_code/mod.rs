//! Error codes for XQuery diagnostics.
//!
//! Codes follow the W3C `err:` namespace naming: a two-letter family
//! (`XP` shared with XPath, `XQ` XQuery only), a category letter
//! (`S`tatic, `D`ynamic, `T`ype) followed by `T`, and a four-digit number.

use std::fmt;

/// Error codes for all front-end diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Syntax error, including constructs the selected XQuery dialect does
    /// not support.
    XPST0003,
    /// The declared XQuery version is not supported by the implementation.
    XQST0031,
}

impl ErrorCode {
    /// All error codes, for exhaustive iteration and parsing.
    pub const ALL: &[ErrorCode] = &[ErrorCode::XPST0003, ErrorCode::XQST0031];

    /// Get the error code as a string (e.g., `"XPST0003"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::XPST0003 => "XPST0003",
            ErrorCode::XQST0031 => "XQST0031",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"XPST0003"` or `"err:xqst0031"`.
///
/// Case-insensitive, with an optional `err:` prefix.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        let bare = upper.strip_prefix("ERR:").unwrap_or(&upper);
        Self::ALL
            .iter()
            .find(|code| code.as_str() == bare)
            .copied()
            .ok_or(())
    }
}
