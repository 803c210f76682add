// SPDX-License-Identifier: MIT
//
// Error types for color parsing and creation.
//
// Every variant carries the offending input verbatim so a broken seed string
// can be found in the theme tables without a debugger.

use thiserror::Error;

/// Errors raised while parsing or creating a color.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// The input starts with neither `oklch(` nor `rgb`.
    #[error("unsupported color format: {0}")]
    UnsupportedFormat(String),

    /// The input looks like OKLCH but does not match the grammar.
    #[error("invalid OKLCH color: {0}")]
    InvalidOklch(String),

    /// The input looks like RGB but does not match the grammar, or a channel
    /// is outside 0–255.
    #[error("invalid RGB color: {0}")]
    InvalidRgb(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_input() {
        let err = ColorError::UnsupportedFormat("hsl(0 0% 0%)".to_string());
        assert!(err.to_string().contains("unsupported color format"));
        assert!(err.to_string().contains("hsl(0 0% 0%)"));

        let err = ColorError::InvalidOklch("oklch(a b c)".to_string());
        assert!(err.to_string().contains("invalid OKLCH"));

        let err = ColorError::InvalidRgb("rgb(300 0 0)".to_string());
        assert!(err.to_string().contains("invalid RGB"));
        assert!(err.to_string().contains("300"));
    }
}
