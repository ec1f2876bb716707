//! Cursor state for an editing session

use indent_core::TextBuffer;

pub use indent_core::Position;

/// Cursor with bounded movement over a text buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    position: Position,
}

impl Cursor {
    pub fn new() -> Self {
        Self {
            position: Position::zero(),
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn set_position(&mut self, pos: Position) {
        self.position = pos;
    }

    pub fn move_up(&mut self, buffer: &TextBuffer) {
        if self.position.row > 0 {
            self.position.row -= 1;
            self.clamp_col(buffer);
        }
    }

    pub fn move_down(&mut self, buffer: &TextBuffer) {
        if self.position.row < buffer.line_count().saturating_sub(1) {
            self.position.row += 1;
            self.clamp_col(buffer);
        }
    }

    pub fn move_left(&mut self, buffer: &TextBuffer) {
        let line = buffer.line(self.position.row).unwrap_or("");
        if let Some(ch) = line
            .get(..self.position.col)
            .and_then(|head| head.chars().next_back())
        {
            self.position.col -= ch.len_utf8();
        }
    }

    pub fn move_right(&mut self, buffer: &TextBuffer) {
        let line = buffer.line(self.position.row).unwrap_or("");
        if let Some(ch) = line
            .get(self.position.col..)
            .and_then(|rest| rest.chars().next())
        {
            self.position.col += ch.len_utf8();
        }
    }

    pub fn move_line_start(&mut self) {
        self.position.col = 0;
    }

    pub fn move_line_end(&mut self, buffer: &TextBuffer) {
        self.position.col = buffer.line_length(self.position.row);
    }

    /// Clamp column to a character boundary within the current line
    fn clamp_col(&mut self, buffer: &TextBuffer) {
        let line = buffer.line(self.position.row).unwrap_or("");
        if self.position.col > line.len() {
            self.position.col = line.len();
        }
        while !line.is_char_boundary(self.position.col) {
            self.position.col -= 1;
        }
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}
