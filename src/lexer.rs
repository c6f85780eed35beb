//! Table-driven scanning engine.
//!
//! The [`Lexer`] walks a source buffer and classifies input against the
//! tables in a [`LexerConfig`]. Dispatch order at each position is fixed:
//! indentation markers, end of input, end of line / comments, integers,
//! strings, symbols, then identifiers. The first rule that matches wins;
//! anything left over is an error.

use rustc_hash::FxHashMap;

use crate::config::LexerConfig;
use crate::cursor::Cursor;
use crate::error::LexError;
use crate::location::Loc;
use crate::token::{Token, TokenKind};

/// Lexer over a single source buffer.
///
/// Created from a [`LexerConfig`] and the complete source text; tokens
/// borrow from that text and the buffer must outlive them. Single-threaded
/// and stateful: every [`next_token`](Self::next_token) call advances the
/// cursor and the indentation bookkeeping.
#[derive(Debug)]
pub struct Lexer<'src, 't> {
    /// Low-level character cursor.
    cursor: Cursor<'src>,
    /// Recognition tables, read-only for the lexer's lifetime.
    config: LexerConfig<'t>,
    /// Keyword string to table index, built once at construction.
    keyword_index: FxHashMap<&'t str, usize>,
    /// Display name for locations, if the caller supplied one.
    path: Option<&'src str>,
    /// Indentation depth last reported via block markers.
    last_indent: u32,
    /// Whether the cursor sits right after a line break.
    ///
    /// Starts `true` so leading tabs on the first line open a block.
    after_eol: bool,
}

impl<'src, 't> Lexer<'src, 't> {
    /// Create a lexer for `source`, validating the configuration.
    ///
    /// At least one of the comment/symbol/keyword tables must contain a
    /// non-empty entry, otherwise [`LexError::EmptyConfig`] is returned.
    /// `path` is only used when displaying token locations.
    pub fn new(
        source: &'src str,
        path: Option<&'src str>,
        config: LexerConfig<'t>,
    ) -> Result<Self, LexError> {
        if !config.has_tables() {
            return Err(LexError::EmptyConfig);
        }

        // First occurrence wins for duplicate keyword entries.
        let mut keyword_index = FxHashMap::default();
        for (index, keyword) in config.keywords.iter().enumerate() {
            if !keyword.is_empty() {
                keyword_index.entry(*keyword).or_insert(index);
            }
        }

        Ok(Self {
            cursor: Cursor::new(source),
            config,
            keyword_index,
            path,
            last_indent: 0,
            after_eol: true,
        })
    }

    /// The configuration this lexer was built with.
    #[inline]
    pub fn config(&self) -> &LexerConfig<'t> {
        &self.config
    }

    /// Consume and return the next token.
    ///
    /// Returns an `Eof` token once the input is exhausted (and on every
    /// call after that). An `Err` is fatal for the current position:
    /// calling again retries the same input and fails the same way.
    pub fn next_token(&mut self) -> Result<Token<'src>, LexError> {
        // Leading tabs are significant right after a line break; one block
        // marker per call until the recorded depth matches the line.
        if self.config.enable_indent
            && self.after_eol
            && let Some(token) = self.scan_indent()
        {
            return Ok(token);
        }

        self.skip_blanks();

        if self.cursor.is_eof() {
            // Close any block still open so every begin has a matching end.
            if self.last_indent > 0 {
                self.last_indent -= 1;
                return Ok(self.marker(TokenKind::IndentBlockEnd));
            }
            return Ok(self.marker(TokenKind::Eof));
        }

        let loc = self.loc();
        let start = self.cursor.offset();

        let Some(ch) = self.cursor.peek() else {
            return Ok(self.marker(TokenKind::Eof));
        };

        if ch == '\n' || self.at_comment() {
            return Ok(self.scan_eol(start, loc));
        }

        // Integer: a digit, or a minus sign immediately followed by one.
        if ch.is_ascii_digit()
            || (ch == '-' && self.cursor.peek_nth(1).is_some_and(|c| c.is_ascii_digit()))
        {
            return Ok(self.scan_int(start, loc));
        }

        if ch == '"' {
            return self.scan_string(start, loc);
        }

        if let Some(token) = self.scan_symbol(start, loc) {
            return Ok(token);
        }

        if (self.config.is_ident)(ch, true) {
            return Ok(self.scan_ident(start, loc));
        }

        Err(LexError::UnrecognizedChar {
            ch,
            line: loc.line,
            column: loc.column,
        })
    }

    /// Scan the remaining input into an ordered token sequence.
    ///
    /// Consecutive `Eol` tokens are folded to one, and the final `Eof` is
    /// not stored. Errors propagate and abandon the scan.
    pub fn collect_all(&mut self) -> Result<Vec<Token<'src>>, LexError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            match token.kind {
                TokenKind::Eof => break,
                TokenKind::Eol
                    if matches!(tokens.last(), Some(Token { kind: TokenKind::Eol, .. })) => {}
                _ => tokens.push(token),
            }
        }
        Ok(tokens)
    }

    // =========================================
    // Internal: position helpers
    // =========================================

    /// Location at the current cursor position.
    fn loc(&self) -> Loc<'src> {
        Loc::new(self.path, self.cursor.line(), self.cursor.column())
    }

    /// Zero-length token at the current position (`Eof`, indent markers).
    fn marker(&self, kind: TokenKind<'src>) -> Token<'src> {
        Token::new(kind, self.cursor.slice_from(self.cursor.offset()), self.loc())
    }

    /// Skip whitespace other than line breaks.
    fn skip_blanks(&mut self) {
        self.cursor
            .eat_while(|c| c.is_ascii_whitespace() && c != '\n');
    }

    /// Whether the upcoming text opens a configured comment.
    fn at_comment(&self) -> bool {
        self.config
            .comments
            .iter()
            .any(|comment| !comment.is_empty() && self.cursor.check_str(comment))
    }

    // =========================================
    // Scanning: indentation markers
    // =========================================

    /// Compare the line's leading tabs against the recorded depth.
    ///
    /// Emits at most one marker per call, moving the recorded depth a
    /// single level; larger jumps surface as consecutive markers over
    /// successive calls. At equal depth the line is handed over to normal
    /// scanning. The tabs themselves stay in the input until then and are
    /// consumed as ordinary blanks.
    fn scan_indent(&mut self) -> Option<Token<'src>> {
        let depth = self
            .cursor
            .rest()
            .bytes()
            .take_while(|&b| b == b'\t')
            .count() as u32;

        if depth > self.last_indent {
            self.last_indent += 1;
            Some(self.marker(TokenKind::IndentBlockBegin))
        } else if depth < self.last_indent {
            self.last_indent -= 1;
            Some(self.marker(TokenKind::IndentBlockEnd))
        } else {
            self.after_eol = false;
            None
        }
    }

    // =========================================
    // Scanning: line ends and comments
    // =========================================

    /// Consume through the next line break (or end of input) and emit `Eol`.
    ///
    /// Covers both bare line breaks and configured line comments; the raw
    /// token text includes everything consumed.
    fn scan_eol(&mut self, start: u32, loc: Loc<'src>) -> Token<'src> {
        while let Some(ch) = self.cursor.advance() {
            if ch == '\n' {
                break;
            }
        }
        self.after_eol = true;
        Token::new(TokenKind::Eol, self.cursor.slice_from(start), loc)
    }

    // =========================================
    // Scanning: literals
    // =========================================

    /// Base-10 accumulation into an unsigned magnitude.
    ///
    /// No overflow checking: the magnitude wraps, matching fixed-width
    /// integer semantics.
    fn scan_int(&mut self, start: u32, loc: Loc<'src>) -> Token<'src> {
        let negative = self.cursor.peek() == Some('-');
        if negative {
            self.cursor.advance();
        }

        let mut magnitude: u64 = 0;
        while let Some(digit) = self.cursor.peek().and_then(|c| c.to_digit(10)) {
            magnitude = magnitude.wrapping_mul(10).wrapping_add(u64::from(digit));
            self.cursor.advance();
        }

        let kind = if negative {
            TokenKind::IntNeg((magnitude as i64).wrapping_neg())
        } else {
            TokenKind::Int(magnitude)
        };
        Token::new(kind, self.cursor.slice_from(start), loc)
    }

    /// Scan a double-quoted string on a single logical line.
    ///
    /// Characters are taken verbatim (no escape processing). The payload
    /// excludes the quotes; the raw token text includes them. A line break
    /// or end of input before the closing quote fails the scan.
    fn scan_string(&mut self, start: u32, loc: Loc<'src>) -> Result<Token<'src>, LexError> {
        self.cursor.advance(); // opening quote
        let body_start = self.cursor.offset();

        loop {
            match self.cursor.peek() {
                None | Some('\n') => {
                    return Err(LexError::UnterminatedString {
                        line: loc.line,
                        column: loc.column,
                    });
                }
                Some('"') => {
                    let body = self.cursor.slice_from(body_start);
                    self.cursor.advance(); // closing quote
                    return Ok(Token::new(
                        TokenKind::String(body),
                        self.cursor.slice_from(start),
                        loc,
                    ));
                }
                Some(_) => {
                    self.cursor.advance();
                }
            }
        }
    }

    // =========================================
    // Scanning: symbols, identifiers, keywords
    // =========================================

    /// Match the input against every configured symbol string.
    ///
    /// The longest match wins; later table entries override earlier ones of
    /// equal length, so `"+="` beats `"+"` regardless of table order.
    fn scan_symbol(&mut self, start: u32, loc: Loc<'src>) -> Option<Token<'src>> {
        let mut best: Option<(usize, usize)> = None; // (table index, byte length)
        for (index, symbol) in self.config.symbols.iter().enumerate() {
            if symbol.is_empty() || !self.cursor.check_str(symbol) {
                continue;
            }
            if best.is_none_or(|(_, len)| symbol.len() >= len) {
                best = Some((index, symbol.len()));
            }
        }

        let (index, len) = best?;
        self.cursor.advance_bytes(len);
        Some(Token::new(
            TokenKind::Symbol(index),
            self.cursor.slice_from(start),
            loc,
        ))
    }

    /// Scan an identifier, reclassifying it as a keyword on a table hit.
    fn scan_ident(&mut self, start: u32, loc: Loc<'src>) -> Token<'src> {
        let is_ident = self.config.is_ident;
        self.cursor.advance();
        self.cursor.eat_while(|c| is_ident(c, false));

        let lexeme = self.cursor.slice_from(start);
        let kind = match self.keyword_index.get(lexeme) {
            Some(&index) => TokenKind::Keyword(index),
            None => TokenKind::Ident(lexeme),
        };
        Token::new(kind, lexeme, loc)
    }
}

/// Token streaming; ends once `Eof` is reached.
///
/// An `Err` item is fatal: the stream will keep yielding the same error,
/// so callers should stop at the first one (as `collect::<Result<_, _>>`
/// does).
impl<'src> Iterator for Lexer<'src, '_> {
    type Item = Result<Token<'src>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(token) if token.kind == TokenKind::Eof => None,
            other => Some(other),
        }
    }
}
