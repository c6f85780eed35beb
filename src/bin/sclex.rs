//! Token printer demo.
//!
//! Scans one file with a toy front-end configuration and prints every
//! produced token with its location. Exits non-zero when no file path is
//! given or the scan fails.

use anyhow::{Context, Result};
use sclex::{Lexer, LexerConfig, Token, TokenKind, default_is_ident, read_source};

const COMMENTS: &[&str] = &[";"];
const KEYWORDS: &[&str] = &["print"];
const SYMBOLS: &[&str] = &["(", ")", "+", "+=", "-"];

fn print_token(token: &Token<'_>, config: &LexerConfig<'_>) {
    let name = token.kind.name();
    match token.kind {
        TokenKind::Ident(text) => {
            println!("<{name}: len={}, '{text}'> {}", text.len(), token.loc)
        }
        TokenKind::Int(value) => println!("<{name}: {value}> {}", token.loc),
        TokenKind::IntNeg(value) => println!("<{name}: {value}> {}", token.loc),
        TokenKind::Keyword(index) => {
            println!("<{name}: '{}'> {}", config.keywords[index], token.loc)
        }
        TokenKind::String(text) => {
            println!("<{name}: len={}, '{text}'> {}", text.len(), token.loc)
        }
        TokenKind::Symbol(index) => {
            println!("<{name}: {index}: '{}'> {}", config.symbols[index], token.loc)
        }
        _ => println!("<{name}> {}", token.loc),
    }
}

fn main() -> Result<()> {
    let path = std::env::args().nth(1).context("usage: sclex <file>")?;
    let source = read_source(&path).with_context(|| format!("failed to read {path}"))?;

    let config = LexerConfig {
        comments: COMMENTS,
        symbols: SYMBOLS,
        keywords: KEYWORDS,
        enable_indent: true,
        is_ident: default_is_ident,
    };

    let mut lexer = Lexer::new(&source, Some(path.as_str()), config)?;
    for token in lexer.collect_all()? {
        print_token(&token, &config);
    }

    Ok(())
}
