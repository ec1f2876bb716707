//! Valid-indent computation and the tab-cycle controller
//!
//! The first indent command on a line snaps it to the single most likely
//! column; repeating the command rotates through every remaining legal
//! column in descending order and wraps back to the best guess. Whether a
//! given invocation repeats an earlier one is decided from the `CycleState`
//! the caller threads through, never from ambient session state.

use alloc::vec::Vec;

use crate::buffer::{Position, PositionError, TextBuffer};
use crate::classify::{self, LineInfo};
use crate::config::{IndentOptions, OptionsError};

/// Marker handed back by [`Indenter::indent_line`]
///
/// Passing it into the next call marks that call as a repeat of this one.
/// The state is keyed by row: a stale marker from another line leaves the
/// next invocation fresh. Callers drop the marker whenever any other
/// command runs in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleState {
    row: usize,
}

impl CycleState {
    pub fn row(&self) -> usize {
        self.row
    }
}

/// Result of one indent command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndentOutcome {
    pub cursor: Position,
    pub cycle: CycleState,
}

/// The indentation engine
///
/// Owns a validated, immutable set of [`IndentOptions`]; all queries and
/// commands are methods so the option sets are injected exactly once.
#[derive(Debug, Clone)]
pub struct Indenter {
    options: IndentOptions,
}

impl Indenter {
    /// Build an engine from options, rejecting invalid configuration before
    /// any editing command can run
    pub fn new(options: IndentOptions) -> Result<Self, OptionsError> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &IndentOptions {
        &self.options
    }

    pub fn unit(&self) -> usize {
        self.options.unit
    }

    /// Legal indentation columns for the cursor's line, most likely first
    ///
    /// With a block opener on the preceding non-blank line the head is the
    /// deeper column; otherwise "stay level" and "one deeper" lead. The tail
    /// walks every shallower level down to 0.
    pub fn valid_indents(
        &self,
        buffer: &TextBuffer,
        row: usize,
    ) -> Result<Vec<usize>, PositionError> {
        buffer.ensure_row(row)?;
        let wants = classify::wants_deeper_indent(buffer, row, &self.options);
        let previous = classify::previous_indent_width(buffer, row, self.options.unit);
        Ok(self.candidate_columns(wants, previous))
    }

    fn candidate_columns(&self, wants: bool, previous: usize) -> Vec<usize> {
        let unit = self.options.unit;
        let mut columns = Vec::new();
        if wants {
            columns.push(previous + unit);
            push_descending(&mut columns, previous, unit);
        } else {
            columns.push(previous);
            columns.push(previous + unit);
            if previous > 0 {
                push_descending(&mut columns, previous.saturating_sub(unit), unit);
            }
        }
        columns
    }

    /// Re-indent the cursor's line to the next target column
    ///
    /// `cycle` is the state returned by the previous call, or `None` for a
    /// fresh gesture. Cursors inside the leading whitespace land on the new
    /// indentation boundary; cursors in the content keep their offset into
    /// it.
    pub fn indent_line(
        &self,
        buffer: &mut TextBuffer,
        cursor: Position,
        cycle: Option<CycleState>,
    ) -> Result<IndentOutcome, PositionError> {
        buffer.ensure_position(cursor)?;
        let row = cursor.row;
        let current = classify::indent_width(buffer.line(row).unwrap_or(""));
        let columns = self.valid_indents(buffer, row)?;
        let cycling = cycle.map_or(false, |state| state.row == row);

        let first = columns[0];
        let next = columns
            .iter()
            .position(|&column| column == current)
            .and_then(|index| columns.get(index + 1))
            .copied();

        let target = if (!cycling || current == 0 || next.is_none()) && current != first {
            first
        } else {
            next.unwrap_or(first)
        };

        replace_indentation(buffer, row, current, target);

        let col = if cursor.col <= current {
            target
        } else {
            cursor.col - current + target
        };
        Ok(IndentOutcome {
            cursor: Position::new(row, col),
            cycle: CycleState { row },
        })
    }

    /// Classification record for a line, gathered in one query
    pub fn classify_line(&self, buffer: &TextBuffer, row: usize) -> Result<LineInfo, PositionError> {
        buffer.ensure_row(row)?;
        let line = buffer.line(row).unwrap_or("");
        Ok(LineInfo {
            is_blank: classify::is_blank(line),
            is_comment: classify::is_comment(line),
            indent_width: classify::indent_width(line),
            wants_deeper_indent: classify::wants_deeper_indent(buffer, row, &self.options),
        })
    }
}

impl Default for Indenter {
    fn default() -> Self {
        // Default options always validate
        Self {
            options: IndentOptions::default(),
        }
    }
}

/// Append `from, from - unit, ..., 0`
fn push_descending(columns: &mut Vec<usize>, from: usize, unit: usize) {
    let mut column = from;
    loop {
        columns.push(column);
        if column == 0 {
            break;
        }
        column = column.saturating_sub(unit);
    }
}

/// Replace the line's leading whitespace with `target` spaces
fn replace_indentation(buffer: &mut TextBuffer, row: usize, current: usize, target: usize) {
    use alloc::string::String;

    if current > 0 {
        buffer.remove_in_line(row, 0, current);
    }
    if target > 0 {
        let spaces: String = " ".repeat(target);
        buffer.insert_str(Position::new(row, 0), &spaces);
    }
}
