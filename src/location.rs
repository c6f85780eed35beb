//! Source location tracking for tokens and diagnostics.
//!
//! Every token records the [`Loc`] where it begins so embedding front-ends
//! can report errors against the original source.

use std::fmt;

/// Where a token begins: an optional file path plus 1-based line and column.
///
/// The path is borrowed from the caller (typically the same buffer the
/// source came from) and is only used for display.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Loc<'src> {
    /// Display name of the scanned file, if the caller supplied one.
    pub path: Option<&'src str>,
    /// Line number (1-indexed).
    pub line: u32,
    /// Column number (1-indexed, byte-based).
    pub column: u32,
}

impl<'src> Loc<'src> {
    /// Create a new location.
    #[inline]
    pub fn new(path: Option<&'src str>, line: u32, column: u32) -> Self {
        Self { path, line, column }
    }
}

impl fmt::Debug for Loc<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl fmt::Display for Loc<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(path) = self.path {
            write!(f, "{path},")?;
        }
        write!(f, "line:{},column:{}", self.line, self.column)
    }
}
