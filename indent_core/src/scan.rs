//! Lexical string/comment context
//!
//! Full rescan from the buffer start on every query. The scanner is a pure
//! function of the document, so edits never leave stale context behind; the
//! cost is linear in the text before the position, which is fine at the
//! file sizes this engine serves.

use crate::buffer::{Position, TextBuffer};

/// Lexical context of a buffer position
///
/// The answer describes the state on arrival at the position; the character
/// at the position itself is not consumed. Strings span line breaks,
/// comments end at them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxContext {
    Code,
    InString { quote: char },
    InComment,
}

impl SyntaxContext {
    pub fn is_string(&self) -> bool {
        matches!(self, SyntaxContext::InString { .. })
    }

    pub fn is_comment(&self) -> bool {
        matches!(self, SyntaxContext::InComment)
    }
}

/// Scan the buffer from the start and report the context at `pos`
///
/// Rows past the end of the document and columns past the end of a line are
/// clamped; callers that need strict bounds check them first.
pub fn context_at(buffer: &TextBuffer, pos: Position) -> SyntaxContext {
    let mut context = SyntaxContext::Code;
    let line_count = buffer.line_count();
    let (last_row, last_col) = if pos.row >= line_count {
        (line_count.saturating_sub(1), usize::MAX)
    } else {
        (pos.row, pos.col)
    };

    for row in 0..=last_row {
        let line = buffer.line(row).unwrap_or("");
        let limit = if row == last_row {
            last_col.min(line.len())
        } else {
            line.len()
        };

        // A pending escape never survives the line break
        let mut escaped = false;
        for (idx, ch) in line.char_indices() {
            if idx >= limit {
                break;
            }
            match context {
                SyntaxContext::Code => match ch {
                    '"' | '\'' => context = SyntaxContext::InString { quote: ch },
                    '#' => context = SyntaxContext::InComment,
                    _ => {}
                },
                SyntaxContext::InString { quote } => {
                    if escaped {
                        escaped = false;
                    } else if ch == '\\' {
                        escaped = true;
                    } else if ch == quote {
                        context = SyntaxContext::Code;
                    }
                }
                SyntaxContext::InComment => {}
            }
        }

        // The line break closes a comment but not a string
        if row < last_row && context == SyntaxContext::InComment {
            context = SyntaxContext::Code;
        }
    }

    context
}

/// True iff the position lies inside an open string literal
pub fn in_string(buffer: &TextBuffer, pos: Position) -> bool {
    context_at(buffer, pos).is_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;

    fn buffer(content: &str) -> TextBuffer {
        TextBuffer::from_string(String::from(content))
    }

    #[test]
    fn test_plain_code() {
        let buf = buffer("x = 1");
        assert_eq!(context_at(&buf, Position::new(0, 3)), SyntaxContext::Code);
    }

    #[test]
    fn test_inside_double_quoted_string() {
        let buf = buffer("x = \"abc\"");
        assert_eq!(
            context_at(&buf, Position::new(0, 6)),
            SyntaxContext::InString { quote: '"' }
        );
        // Past the closing quote the context is code again
        assert_eq!(context_at(&buf, Position::new(0, 9)), SyntaxContext::Code);
    }

    #[test]
    fn test_inside_single_quoted_string() {
        let buf = buffer("x = 'abc'");
        assert!(in_string(&buf, Position::new(0, 6)));
    }

    #[test]
    fn test_other_quote_does_not_close() {
        let buf = buffer("x = \"a'b\"");
        assert_eq!(
            context_at(&buf, Position::new(0, 8)),
            SyntaxContext::InString { quote: '"' }
        );
    }

    #[test]
    fn test_escaped_quote_stays_open() {
        let buf = buffer(r#"x = "a\"b"#);
        assert!(in_string(&buf, Position::new(0, 8)));
    }

    #[test]
    fn test_comment_context() {
        let buf = buffer("x = 1 # note");
        assert_eq!(
            context_at(&buf, Position::new(0, 9)),
            SyntaxContext::InComment
        );
        assert!(!in_string(&buf, Position::new(0, 9)));
    }

    #[test]
    fn test_quote_inside_comment_ignored() {
        let buf = buffer("# it's fine\nx = 1");
        assert_eq!(context_at(&buf, Position::new(1, 2)), SyntaxContext::Code);
    }

    #[test]
    fn test_comment_ends_at_line_break() {
        let buf = buffer("x = 1 # note\ny = 2");
        assert_eq!(context_at(&buf, Position::new(1, 0)), SyntaxContext::Code);
    }

    #[test]
    fn test_string_spans_line_break() {
        let buf = buffer("x = \"abc\n  more");
        assert!(in_string(&buf, Position::new(1, 0)));
        assert!(in_string(&buf, Position::new(1, 2)));
    }

    #[test]
    fn test_hash_inside_string_is_not_comment() {
        let buf = buffer("x = \"a # b\" + 1");
        assert_eq!(context_at(&buf, Position::new(0, 14)), SyntaxContext::Code);
    }

    #[test]
    fn test_escape_does_not_survive_line_break() {
        // Backslash at end of line; the newline is not escaped away
        let buf = buffer("x = \"abc\\\n\"y");
        // Row 1 col 1 sits right after the closing quote
        assert_eq!(context_at(&buf, Position::new(1, 1)), SyntaxContext::Code);
    }

    #[test]
    fn test_out_of_range_positions_clamp() {
        let buf = buffer("x = \"abc");
        assert!(in_string(&buf, Position::new(0, 100)));
        assert!(in_string(&buf, Position::new(5, 0)));
    }

    #[test]
    fn test_column_inside_multibyte_char_does_not_panic() {
        let buf = buffer("é = \"abc");
        assert!(in_string(&buf, Position::new(0, 6)));
        // Column 1 falls inside the two-byte character
        assert_eq!(context_at(&buf, Position::new(0, 1)), SyntaxContext::Code);
    }
}
