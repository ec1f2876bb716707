//! Indentation-aware editing commands
//!
//! Newline, backspace, and space reuse the line classifier so ordinary
//! typing keeps indentation consistent: new lines inherit or deepen the
//! current indent, backspace in leading whitespace retreats by whole
//! units, and a space at the indentation boundary advances to the next
//! unit. Region shifts move whole blocks one or more units sideways.

use alloc::string::String;

use crate::buffer::{Position, PositionError, TextBuffer};
use crate::classify;
use crate::indent::Indenter;
use crate::scan;

impl Indenter {
    /// Split the line at the cursor and indent the new line
    ///
    /// The lower line starts with engine-controlled whitespace: the upper
    /// line's indent width, one unit deeper when the upper line opens a
    /// block. Splitting a blank line or splitting inside leading whitespace
    /// keeps the width as-is. Finishing a comment line seeds the new line
    /// with `# ` so multi-line comments continue.
    pub fn newline(
        &self,
        buffer: &mut TextBuffer,
        cursor: Position,
    ) -> Result<Position, PositionError> {
        buffer.ensure_position(cursor)?;

        let line = buffer.line(cursor.row).unwrap_or("");
        let width = classify::indent_width(line);
        let blank = classify::is_blank(line);
        let in_leading = cursor.col <= width;

        buffer.insert_newline(cursor);
        let next_row = cursor.row + 1;

        let upper = buffer.line(cursor.row).unwrap_or("");
        let continue_comment = classify::is_comment(upper);
        let target = if blank || in_leading {
            width
        } else if classify::wants_deeper_indent(buffer, next_row, self.options()) {
            width + self.unit()
        } else {
            width
        };

        // Whitespace split onto the lower line is replaced, not kept
        let carried = classify::indent_width(buffer.line(next_row).unwrap_or(""));
        if carried > 0 {
            buffer.remove_in_line(next_row, 0, carried);
        }

        let mut prefix: String = " ".repeat(target);
        if continue_comment {
            prefix.push_str("# ");
        }
        let col = prefix.len();
        if !prefix.is_empty() {
            buffer.insert_str(Position::new(next_row, 0), &prefix);
        }
        Ok(Position::new(next_row, col))
    }

    /// Delete backward, retreating by indentation units inside leading
    /// whitespace
    ///
    /// With `repeat == 1` and the cursor at the end of the line's leading
    /// whitespace (and outside any string), the indent retreats to the
    /// nearest lower unit boundary, a full unit when already aligned.
    /// Every other invocation deletes `repeat` single characters, joining
    /// lines at column 0 and stopping at the buffer start.
    pub fn backspace(
        &self,
        buffer: &mut TextBuffer,
        cursor: Position,
        repeat: usize,
    ) -> Result<Position, PositionError> {
        buffer.ensure_position(cursor)?;

        if repeat == 1 && self.dedent_eligible(buffer, cursor) {
            let unit = self.unit();
            let remainder = cursor.col % unit;
            let remove = if remainder == 0 { unit } else { remainder };
            let remove = remove.min(cursor.col);
            buffer.remove_in_line(cursor.row, cursor.col - remove, cursor.col);
            return Ok(Position::new(cursor.row, cursor.col - remove));
        }

        let mut position = cursor;
        for _ in 0..repeat {
            match buffer.backspace(position) {
                Some(moved) => position = moved,
                None => break,
            }
        }
        Ok(position)
    }

    /// Insert spaces, advancing to the next indentation unit at the
    /// whitespace boundary
    ///
    /// With `repeat == 1` and the cursor at the end of the line's leading
    /// whitespace, the column rounds up to the next multiple of the unit;
    /// on a blank line existing whitespace is discarded and one full unit
    /// laid down. Every other invocation inserts exactly `repeat` spaces.
    pub fn space(
        &self,
        buffer: &mut TextBuffer,
        cursor: Position,
        repeat: usize,
    ) -> Result<Position, PositionError> {
        buffer.ensure_position(cursor)?;

        let line = buffer.line(cursor.row).unwrap_or("");
        let width = classify::indent_width(line);
        let blank = classify::is_blank(line);

        if repeat == 1 && cursor.col == width {
            let unit = self.unit();
            if blank {
                buffer.remove_in_line(cursor.row, 0, width);
                let spaces: String = " ".repeat(unit);
                buffer.insert_str(Position::new(cursor.row, 0), &spaces);
                return Ok(Position::new(cursor.row, unit));
            }
            let target = (cursor.col / unit + 1) * unit;
            let pad: String = " ".repeat(target - cursor.col);
            buffer.insert_str(cursor, &pad);
            return Ok(Position::new(cursor.row, target));
        }

        if repeat > 0 {
            let spaces: String = " ".repeat(repeat);
            buffer.insert_str(cursor, &spaces);
        }
        Ok(Position::new(cursor.row, cursor.col + repeat))
    }

    /// Shift every non-blank line in the inclusive row range one or more
    /// units deeper
    pub fn shift_right(
        &self,
        buffer: &mut TextBuffer,
        first_row: usize,
        last_row: usize,
        levels: usize,
    ) -> Result<(), PositionError> {
        buffer.ensure_row(first_row)?;
        buffer.ensure_row(last_row)?;

        let amount = levels * self.unit();
        if amount == 0 {
            return Ok(());
        }
        let spaces: String = " ".repeat(amount);
        for row in first_row..=last_row {
            let blank = classify::is_blank(buffer.line(row).unwrap_or(""));
            if !blank {
                buffer.insert_str(Position::new(row, 0), &spaces);
            }
        }
        Ok(())
    }

    /// Shift every non-blank line in the inclusive row range shallower,
    /// clamping at column 0
    pub fn shift_left(
        &self,
        buffer: &mut TextBuffer,
        first_row: usize,
        last_row: usize,
        levels: usize,
    ) -> Result<(), PositionError> {
        buffer.ensure_row(first_row)?;
        buffer.ensure_row(last_row)?;

        let amount = levels * self.unit();
        if amount == 0 {
            return Ok(());
        }
        for row in first_row..=last_row {
            let line = buffer.line(row).unwrap_or("");
            let width = classify::indent_width(line);
            if classify::is_blank(line) {
                continue;
            }
            let remove = width.min(amount);
            if remove > 0 {
                buffer.remove_in_line(row, 0, remove);
            }
        }
        Ok(())
    }

    fn dedent_eligible(&self, buffer: &TextBuffer, cursor: Position) -> bool {
        let line = buffer.line(cursor.row).unwrap_or("");
        cursor.col > 0
            && cursor.col == classify::indent_width(line)
            && !scan::in_string(buffer, cursor)
    }
}
