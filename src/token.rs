//! Token model produced by the lexer.
//!
//! A [`Token`] pairs a [`TokenKind`] with the raw source slice it was
//! scanned from and the [`Loc`] where it begins. Tokens never own text:
//! identifier and string payloads borrow from the source buffer, and
//! keyword/symbol payloads are indices into the configured tables.

use std::fmt;

use crate::location::Loc;

/// A token from the source text.
///
/// Borrows from the source buffer; the buffer must outlive every token.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    /// The classified kind, with its kind-specific payload.
    pub kind: TokenKind<'src>,
    /// The raw source text this token was scanned from.
    ///
    /// Empty for synthesized tokens (`Eof` and the indent markers).
    pub text: &'src str,
    /// Location where the token begins.
    pub loc: Loc<'src>,
}

impl<'src> Token<'src> {
    /// Create a new token.
    #[inline]
    pub fn new(kind: TokenKind<'src>, text: &'src str, loc: Loc<'src>) -> Self {
        Self { kind, text, loc }
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?} @ {})", self.kind, self.text, self.loc)
    }
}

/// All token categories the lexer can produce.
///
/// Each variant carries only the payload relevant to it: literal values for
/// integers, source slices for identifiers and strings (quotes stripped),
/// and table indices for keywords and symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenKind<'src> {
    /// Placeholder for a token that has not been scanned yet.
    #[default]
    Unknown,
    /// End of input.
    Eof,
    /// End of a logical line, including any trailing comment.
    Eol,
    /// Identifier, borrowing its text from the source.
    Ident(&'src str),
    /// Non-negative integer literal: `42`.
    Int(u64),
    /// Negative integer literal: `-42`.
    IntNeg(i64),
    /// Reserved identifier; payload is the index into the keyword table.
    Keyword(usize),
    /// String literal body with the surrounding quotes stripped.
    String(&'src str),
    /// Configured operator/punctuation; payload is the symbol table index.
    Symbol(usize),
    /// Indentation increased by one level.
    IndentBlockBegin,
    /// Indentation decreased by one level.
    IndentBlockEnd,
}

impl TokenKind<'_> {
    /// Display name of this kind, for diagnostics and token printing.
    pub fn name(&self) -> &'static str {
        use TokenKind::*;
        match self {
            Unknown => "unknown",
            Eof => "eof",
            Eol => "eol",
            Ident(_) => "ident",
            Int(_) => "int",
            IntNeg(_) => "int-neg",
            Keyword(_) => "keyword",
            String(_) => "string",
            Symbol(_) => "symbol",
            IndentBlockBegin => "indent-block-begin",
            IndentBlockEnd => "indent-block-end",
        }
    }
}

impl fmt::Display for TokenKind<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names() {
        assert_eq!(TokenKind::Ident("x").name(), "ident");
        assert_eq!(TokenKind::Int(1).name(), "int");
        assert_eq!(TokenKind::IntNeg(-1).name(), "int-neg");
        assert_eq!(TokenKind::Keyword(0).name(), "keyword");
        assert_eq!(TokenKind::Symbol(0).name(), "symbol");
        assert_eq!(TokenKind::String("s").name(), "string");
        assert_eq!(TokenKind::Eol.name(), "eol");
        assert_eq!(TokenKind::Eof.name(), "eof");
        assert_eq!(TokenKind::IndentBlockBegin.name(), "indent-block-begin");
        assert_eq!(TokenKind::IndentBlockEnd.name(), "indent-block-end");
    }

    #[test]
    fn default_is_unknown() {
        assert_eq!(TokenKind::default(), TokenKind::Unknown);
    }

    #[test]
    fn token_debug_format() {
        let token = Token::new(TokenKind::Ident("foo"), "foo", Loc::new(None, 1, 5));
        let debug = format!("{:?}", token);
        assert!(debug.contains("Ident"));
        assert!(debug.contains("foo"));
        assert!(debug.contains("line:1,column:5"));
    }

    #[test]
    fn display_matches_name() {
        assert_eq!(format!("{}", TokenKind::Eol), "eol");
    }
}
