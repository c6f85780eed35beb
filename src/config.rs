//! Recognition tables supplied by the embedding front-end.
//!
//! A [`LexerConfig`] names the comment markers, symbol strings, and keyword
//! strings the lexer should recognize, plus an identifier predicate and the
//! indentation flag. It is read-only once scanning starts; the table
//! indices carried by `Keyword`/`Symbol` tokens are stable for the session.

/// Identifier-character predicate.
///
/// The second argument is `true` when classifying the first character of
/// an identifier.
pub type IdentFn = fn(char, bool) -> bool;

/// Configuration for a [`Lexer`](crate::Lexer).
///
/// Tables are borrowed ordered lists; `Keyword` and `Symbol` token payloads
/// index into `keywords` and `symbols` respectively. Empty entries are
/// ignored by the matchers.
#[derive(Debug, Clone, Copy)]
pub struct LexerConfig<'t> {
    /// Single-line comment openers, e.g. `";"` or `"//"`.
    pub comments: &'t [&'t str],
    /// Operator/punctuation strings, matched longest-first.
    pub symbols: &'t [&'t str],
    /// Reserved identifiers.
    pub keywords: &'t [&'t str],
    /// Emit `IndentBlockBegin`/`IndentBlockEnd` from leading tabs.
    pub enable_indent: bool,
    /// Identifier-character predicate; [`default_is_ident`] if in doubt.
    pub is_ident: IdentFn,
}

impl Default for LexerConfig<'_> {
    fn default() -> Self {
        Self {
            comments: &[],
            symbols: &[],
            keywords: &[],
            enable_indent: false,
            is_ident: default_is_ident,
        }
    }
}

impl LexerConfig<'_> {
    /// Whether any recognition table has a usable entry.
    ///
    /// A config where every table is empty cannot classify anything beyond
    /// bare identifiers and is rejected at lexer construction.
    pub(crate) fn has_tables(&self) -> bool {
        [self.comments, self.symbols, self.keywords]
            .iter()
            .any(|table| table.iter().any(|entry| !entry.is_empty()))
    }
}

/// Default identifier predicate.
///
/// First character: ASCII alphabetic or `_`. Remaining characters: ASCII
/// alphanumeric or `_`.
pub fn default_is_ident(ch: char, first: bool) -> bool {
    if first {
        ch.is_ascii_alphabetic() || ch == '_'
    } else {
        ch.is_ascii_alphanumeric() || ch == '_'
    }
}
