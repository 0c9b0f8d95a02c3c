//! Source positions for diagnostic rendering.

use std::fmt;

// Re-export from text-size; ranges in diagnostics are byte offsets
pub use text_size::{TextRange, TextSize};

/// A line and column position in source text.
///
/// Both are 0-indexed internally and displayed 1-indexed. Columns count
/// UTF-8 bytes, not characters.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct LineCol {
    /// 0-indexed line number
    pub line: u32,
    /// 0-indexed column in UTF-8 bytes
    pub col: u32,
}

impl LineCol {
    /// Create a new LineCol position.
    #[inline]
    pub const fn new(line: u32, col: u32) -> Self {
        Self { line, col }
    }
}

impl fmt::Debug for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.col + 1)
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.col + 1)
    }
}

/// Byte-offset → line/column conversion for one file's text.
#[derive(Clone, Debug)]
pub struct LineIndex {
    /// Byte offset of the start of each line
    line_starts: Vec<TextSize>,
}

impl LineIndex {
    /// Build a line index from source text.
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::from(0)];

        for (offset, c) in text.char_indices() {
            if c == '\n' {
                line_starts.push(TextSize::from(offset as u32 + 1));
            }
        }

        Self { line_starts }
    }

    /// Convert a byte offset to a line/column position.
    ///
    /// Offsets past the end of the text land on the last line.
    pub fn line_col(&self, offset: TextSize) -> LineCol {
        let line = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        let col = u32::from(offset) - u32::from(self.line_starts[line]);
        LineCol::new(line as u32, col)
    }

    /// Number of lines in the indexed text.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_col_single_line() {
        let index = LineIndex::new("import ballerina/udp;");

        assert_eq!(index.line_count(), 1);
        assert_eq!(index.line_col(TextSize::from(0)), LineCol::new(0, 0));
        assert_eq!(index.line_col(TextSize::from(7)), LineCol::new(0, 7));
    }

    #[test]
    fn test_line_col_multi_line() {
        let index = LineIndex::new("import ballerina/udp;\n\nservice on lsn {\n}\n");

        assert_eq!(index.line_count(), 5);
        assert_eq!(index.line_col(TextSize::from(20)), LineCol::new(0, 20));
        assert_eq!(index.line_col(TextSize::from(22)), LineCol::new(1, 0));
        assert_eq!(index.line_col(TextSize::from(23)), LineCol::new(2, 0));
        assert_eq!(index.line_col(TextSize::from(30)), LineCol::new(2, 7));
    }

    #[test]
    fn test_line_col_past_end() {
        let index = LineIndex::new("udp");
        assert_eq!(index.line_col(TextSize::from(10)), LineCol::new(0, 10));
    }

    #[test]
    fn test_line_col_display_is_one_indexed() {
        assert_eq!(LineCol::new(0, 0).to_string(), "1:1");
        assert_eq!(LineCol::new(2, 10).to_string(), "3:11");
    }
}
