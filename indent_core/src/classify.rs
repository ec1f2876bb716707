//! Line classification primitives
//!
//! Pure queries over lines and their predecessors. All whitespace questions
//! treat `' '` and `'\t'` as one column each; hosts rendering tabs wider must
//! expand them before handing text to the engine.

use crate::buffer::TextBuffer;
use crate::config::IndentOptions;

fn is_horizontal_whitespace(ch: char) -> bool {
    ch == ' ' || ch == '\t'
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// True iff the line contains only horizontal whitespace
pub fn is_blank(line: &str) -> bool {
    line.chars().all(is_horizontal_whitespace)
}

/// True iff the first non-whitespace character is the comment marker
pub fn is_comment(line: &str) -> bool {
    line.chars().find(|&ch| !is_horizontal_whitespace(ch)) == Some('#')
}

/// Leading-whitespace width of the line; on a blank line this is the line
/// length
pub fn indent_width(line: &str) -> usize {
    line.chars().take_while(|&ch| is_horizontal_whitespace(ch)).count()
}

/// True iff every character before the column is horizontal whitespace
pub fn in_leading_whitespace(line: &str, col: usize) -> bool {
    col <= indent_width(line)
}

/// True iff the line ends in an opener character or leads with an indenter
/// keyword, meaning the next line conventionally sits one unit deeper.
///
/// Keyword matching is word-bounded: `class x` and `if(x)` open a block,
/// `classify x` does not.
pub fn opens_block(line: &str, options: &IndentOptions) -> bool {
    let content = line.trim_matches(is_horizontal_whitespace);
    if let Some(last) = content.chars().last() {
        if options.trailing_openers.contains(&last) {
            return true;
        }
    }
    for keyword in &options.keywords {
        if let Some(rest) = content.strip_prefix(keyword.as_str()) {
            let bounded = rest.chars().next().map_or(true, |ch| !is_word_char(ch));
            if bounded {
                return true;
            }
        }
    }
    false
}

/// Nearest preceding non-blank row, skipping blank lines
pub fn previous_nonblank_row(buffer: &TextBuffer, row: usize) -> Option<usize> {
    (0..row)
        .rev()
        .find(|&r| buffer.line(r).map_or(false, |line| !is_blank(line)))
}

/// Indentation width of the nearest preceding non-blank line, rounded up to
/// a multiple of `unit`; 0 at buffer start. `unit` must be nonzero.
pub fn previous_indent_width(buffer: &TextBuffer, row: usize, unit: usize) -> usize {
    match previous_nonblank_row(buffer, row) {
        Some(prev_row) => {
            let width = indent_width(buffer.line(prev_row).unwrap_or(""));
            width.div_ceil(unit) * unit
        }
        None => 0,
    }
}

/// True iff the nearest preceding non-blank line opens a block
pub fn wants_deeper_indent(buffer: &TextBuffer, row: usize, options: &IndentOptions) -> bool {
    previous_nonblank_row(buffer, row)
        .and_then(|r| buffer.line(r))
        .map_or(false, |line| opens_block(line, options))
}

/// Classification record for one line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineInfo {
    pub is_blank: bool,
    pub is_comment: bool,
    pub indent_width: usize,
    pub wants_deeper_indent: bool,
}
