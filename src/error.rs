//! Typed lexer failures.
//!
//! The original design terminated the process on every fatal condition;
//! here each one is a distinct [`LexError`] variant so embedding front-ends
//! choose their own recovery policy.

use thiserror::Error;

/// Errors that occur during configuration or scanning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// No usable recognition tables were supplied.
    #[error("lexer configuration has no comment, symbol, or keyword entries")]
    EmptyConfig,

    /// A character no scanning rule recognizes.
    #[error("unrecognized character '{escaped}' at line:{line},column:{column}", escaped = .ch.escape_default())]
    UnrecognizedChar { ch: char, line: u32, column: u32 },

    /// A string literal hit a line break or end of input before its
    /// closing quote.
    #[error("unterminated string literal at line:{line},column:{column}")]
    UnterminatedString { line: u32, column: u32 },
}

impl LexError {
    /// Line and column where the error occurred, when it has a location.
    pub fn line_column(&self) -> Option<(u32, u32)> {
        match self {
            LexError::EmptyConfig => None,
            LexError::UnrecognizedChar { line, column, .. }
            | LexError::UnterminatedString { line, column } => Some((*line, *column)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrecognized_char_message() {
        let err = LexError::UnrecognizedChar {
            ch: '@',
            line: 2,
            column: 7,
        };
        assert_eq!(
            format!("{}", err),
            "unrecognized character '@' at line:2,column:7"
        );
    }

    #[test]
    fn unrecognized_char_escapes_control_chars() {
        let err = LexError::UnrecognizedChar {
            ch: '\x01',
            line: 1,
            column: 1,
        };
        assert!(format!("{}", err).contains("\\u{1}"));
    }

    #[test]
    fn unterminated_string_message() {
        let err = LexError::UnterminatedString { line: 4, column: 9 };
        assert_eq!(
            format!("{}", err),
            "unterminated string literal at line:4,column:9"
        );
    }

    #[test]
    fn line_column_accessor() {
        assert_eq!(LexError::EmptyConfig.line_column(), None);
        let err = LexError::UnterminatedString { line: 4, column: 9 };
        assert_eq!(err.line_column(), Some((4, 9)));
    }
}
