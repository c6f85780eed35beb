//! # sclex
//!
//! A small, table-driven lexical scanner for embedding in language
//! front-ends (toy interpreters, config DSLs).
//!
//! Callers supply a [`LexerConfig`] — comment markers, symbol and keyword
//! tables, the indentation flag, and optionally an identifier predicate —
//! plus the complete source text. The [`Lexer`] walks the buffer and
//! produces [`Token`]s that borrow their text from it; the buffer must
//! outlive every token.
//!
//! Tokens carry a [`Loc`] (1-based line/column, optional file path) for
//! diagnostics. Failures are typed [`LexError`]s so embedding code picks
//! its own recovery policy.
//!
//! # Example
//!
//! ```
//! use sclex::{default_is_ident, Lexer, LexerConfig, TokenKind};
//!
//! let config = LexerConfig {
//!     comments: &[";"],
//!     symbols: &["(", ")", "+", "+=", "-"],
//!     keywords: &["print"],
//!     enable_indent: false,
//!     is_ident: default_is_ident,
//! };
//!
//! let mut lexer = Lexer::new("print (1 += -2)", None, config)?;
//! let tokens = lexer.collect_all()?;
//!
//! assert_eq!(tokens[0].kind, TokenKind::Keyword(0));
//! assert_eq!(tokens[2].kind, TokenKind::Int(1));
//! assert_eq!(tokens[4].kind, TokenKind::IntNeg(-2));
//! # Ok::<(), sclex::LexError>(())
//! ```

mod config;
mod cursor;
mod error;
mod lexer;
mod location;
mod source;
mod token;

pub use config::{IdentFn, LexerConfig, default_is_ident};
pub use error::LexError;
pub use lexer::Lexer;
pub use location::Loc;
pub use source::read_source;
pub use token::{Token, TokenKind};
