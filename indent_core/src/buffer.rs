//! Text buffer and position types

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

/// Cursor position in the buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub const fn zero() -> Self {
        Self { row: 0, col: 0 }
    }
}

/// Position outside the document bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionError {
    RowOutOfBounds { row: usize, line_count: usize },
    ColOutOfBounds { row: usize, col: usize, line_length: usize },
    ColSplitsCharacter { row: usize, col: usize },
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::RowOutOfBounds { row, line_count } => {
                write!(f, "row {} outside document of {} lines", row, line_count)
            }
            PositionError::ColOutOfBounds {
                row,
                col,
                line_length,
            } => {
                write!(
                    f,
                    "column {} outside line {} of length {}",
                    col, row, line_length
                )
            }
            PositionError::ColSplitsCharacter { row, col } => {
                write!(f, "column {} splits a character on line {}", col, row)
            }
        }
    }
}

impl core::error::Error for PositionError {}

/// Text buffer with line-based storage
///
/// Columns are byte offsets into a line and always lie on character
/// boundaries; `ensure_position` rejects offsets that would split a
/// character. There is always at least one (possibly empty) line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    lines: Vec<String>,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
        }
    }

    pub fn from_string(content: String) -> Self {
        let lines = if content.is_empty() {
            vec![String::new()]
        } else {
            content.lines().map(|s| s.into()).collect()
        };
        Self { lines }
    }

    pub fn as_string(&self) -> String {
        self.lines.join("\n")
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(|s| s.as_str())
    }

    pub fn line_length(&self, row: usize) -> usize {
        self.lines.get(row).map(|s| s.len()).unwrap_or(0)
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    /// Check that a row exists
    pub fn ensure_row(&self, row: usize) -> Result<(), PositionError> {
        if row >= self.lines.len() {
            return Err(PositionError::RowOutOfBounds {
                row,
                line_count: self.lines.len(),
            });
        }
        Ok(())
    }

    /// Check that a position is addressable; the column may equal the line
    /// length (cursor past the last character) but must not land inside a
    /// multi-byte character
    pub fn ensure_position(&self, pos: Position) -> Result<(), PositionError> {
        self.ensure_row(pos.row)?;
        let line = &self.lines[pos.row];
        if pos.col > line.len() {
            return Err(PositionError::ColOutOfBounds {
                row: pos.row,
                col: pos.col,
                line_length: line.len(),
            });
        }
        if !line.is_char_boundary(pos.col) {
            return Err(PositionError::ColSplitsCharacter {
                row: pos.row,
                col: pos.col,
            });
        }
        Ok(())
    }

    /// Insert a character at position
    pub fn insert_char(&mut self, pos: Position, ch: char) -> bool {
        if pos.row >= self.lines.len() {
            return false;
        }

        let line = &mut self.lines[pos.row];
        if pos.col > line.len() {
            return false;
        }

        line.insert(pos.col, ch);
        true
    }

    /// Insert a string within a line at position
    pub fn insert_str(&mut self, pos: Position, text: &str) -> bool {
        if pos.row >= self.lines.len() {
            return false;
        }

        let line = &mut self.lines[pos.row];
        if pos.col > line.len() {
            return false;
        }

        line.insert_str(pos.col, text);
        true
    }

    /// Insert a newline at position, splitting the line
    pub fn insert_newline(&mut self, pos: Position) -> bool {
        if pos.row >= self.lines.len() {
            return false;
        }

        let line = &mut self.lines[pos.row];
        if pos.col > line.len() {
            return false;
        }

        let rest = line.split_off(pos.col);
        self.lines.insert(pos.row + 1, rest);
        true
    }

    /// Delete character at position
    pub fn delete_char(&mut self, pos: Position) -> bool {
        if pos.row >= self.lines.len() {
            return false;
        }

        let line = &mut self.lines[pos.row];
        if pos.col >= line.len() {
            return false;
        }

        line.remove(pos.col);
        true
    }

    /// Remove the column range [start, end) within a line
    pub fn remove_in_line(&mut self, row: usize, start: usize, end: usize) -> bool {
        if row >= self.lines.len() {
            return false;
        }

        let line = &mut self.lines[row];
        if start > end || end > line.len() {
            return false;
        }

        line.replace_range(start..end, "");
        true
    }

    /// Delete character before position (backspace)
    /// Returns new cursor position if successful
    pub fn backspace(&mut self, pos: Position) -> Option<Position> {
        if pos.col > 0 {
            // Remove the whole character ending at the cursor
            let line = &mut self.lines[pos.row];
            let ch = line.get(..pos.col)?.chars().next_back()?;
            let start = pos.col - ch.len_utf8();
            line.replace_range(start..pos.col, "");
            Some(Position::new(pos.row, start))
        } else if pos.row > 0 {
            // Join with previous line
            let current_line = self.lines.remove(pos.row);
            let prev_line = &mut self.lines[pos.row - 1];
            let new_col = prev_line.len();
            prev_line.push_str(&current_line);
            Some(Position::new(pos.row - 1, new_col))
        } else {
            None
        }
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}
