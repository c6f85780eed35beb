//! File loading for callers that scan from disk.
//!
//! Scanning itself never performs I/O: the lexer expects the complete
//! source text up front. This helper front-loads a file for the common
//! case; anything that can produce a `String` works just as well.

use std::fs;
use std::io;
use std::path::Path;

/// Read an entire source file into memory.
pub fn read_source(path: impl AsRef<Path>) -> io::Result<String> {
    fs::read_to_string(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_whole_file() {
        let path = std::env::temp_dir().join("sclex-read-source-test.sc");
        fs::write(&path, "print (1 + 2)\n").unwrap();

        let source = read_source(&path).unwrap();
        assert_eq!(source, "print (1 + 2)\n");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(read_source("/nonexistent/sclex-no-such-file.sc").is_err());
    }
}
