//! One open document driven by structured input events

use indent_core::{
    CycleState, Indenter, IndentOptions, OptionsError, Position, PositionError, SessionSnapshot,
    TextBuffer,
};
use input_types::{InputEvent, KeyCode, KeyEvent};
use thiserror::Error;

use crate::state::Cursor;

/// Session error
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Position error: {0}")]
    Position(#[from] PositionError),

    #[error("Options error: {0}")]
    Options(#[from] OptionsError),
}

/// Session result
pub type SessionResult<T> = Result<T, SessionError>;

/// Outcome of processing one input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Event consumed without changing the document
    Continue,
    /// The document changed
    Changed,
}

/// An editing session over one document
///
/// The session owns the buffer, the cursor, and the indent engine's cycle
/// marker. Tab runs the cycle controller; Enter, Backspace and Space run
/// the engine's co-commands; every other handled key either inserts text
/// or moves the cursor. Any command other than Tab drops the cycle marker,
/// so the next Tab starts a fresh cycle.
pub struct EditSession {
    buffer: TextBuffer,
    cursor: Cursor,
    indenter: Indenter,
    cycle: Option<CycleState>,
    dirty: bool,
    status_message: String,
}

impl EditSession {
    /// Create a session with default indentation options
    pub fn new() -> Self {
        Self::with_indenter(Indenter::default())
    }

    /// Create a session from options, validating them first
    pub fn with_options(options: IndentOptions) -> SessionResult<Self> {
        Ok(Self::with_indenter(Indenter::new(options)?))
    }

    /// Create a session around an already-validated engine
    pub fn with_indenter(indenter: Indenter) -> Self {
        Self {
            buffer: TextBuffer::new(),
            cursor: Cursor::new(),
            indenter,
            cycle: None,
            dirty: false,
            status_message: String::new(),
        }
    }

    /// Replace the document content, resetting cursor and cycle state
    pub fn load_content(&mut self, content: String) {
        self.buffer = TextBuffer::from_string(content);
        self.cursor = Cursor::new();
        self.cycle = None;
        self.dirty = false;
        self.set_status_message("Document loaded");
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn cursor(&self) -> Position {
        self.cursor.position()
    }

    pub fn indenter(&self) -> &Indenter {
        &self.indenter
    }

    pub fn content(&self) -> String {
        self.buffer.as_string()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    pub fn set_status_message(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    /// Row pinned by the pending cycle marker, if any
    pub fn cycle_row(&self) -> Option<usize> {
        self.cycle.map(|state| state.row())
    }

    /// Capture the session state for parity testing
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            cursor: self.cursor.position(),
            buffer_lines: self.buffer.lines().to_vec(),
            cycle_row: self.cycle_row(),
            dirty: self.dirty,
        }
    }

    /// Process an input event
    pub fn process_input(&mut self, event: InputEvent) -> SessionResult<SessionOutcome> {
        // Only process key press and auto-repeat events; releases do not
        // count as commands and leave the cycle marker alone
        let key_event = match event.as_key() {
            Some(ke) if ke.is_pressed() || ke.is_repeat() => ke.clone(),
            _ => return Ok(SessionOutcome::Continue),
        };
        self.handle_key(&key_event)
    }

    fn handle_key(&mut self, event: &KeyEvent) -> SessionResult<SessionOutcome> {
        // Every command except Tab ends the current indent cycle
        let cycle = self.cycle.take();

        // Chorded keys belong to the host's command layer
        let mods = event.modifiers;
        if mods.is_ctrl() || mods.is_alt() || mods.is_meta() {
            return Ok(SessionOutcome::Continue);
        }

        match event.code {
            KeyCode::Tab => {
                let outcome =
                    self.indenter
                        .indent_line(&mut self.buffer, self.cursor.position(), cycle)?;
                self.cursor.set_position(outcome.cursor);
                self.cycle = Some(outcome.cycle);
                self.dirty = true;
                Ok(SessionOutcome::Changed)
            }
            KeyCode::Enter => {
                let cursor = self.indenter.newline(&mut self.buffer, self.cursor.position())?;
                self.cursor.set_position(cursor);
                self.dirty = true;
                Ok(SessionOutcome::Changed)
            }
            KeyCode::Backspace => {
                let cursor =
                    self.indenter
                        .backspace(&mut self.buffer, self.cursor.position(), 1)?;
                self.cursor.set_position(cursor);
                self.dirty = true;
                Ok(SessionOutcome::Changed)
            }
            KeyCode::Space => {
                let cursor = self
                    .indenter
                    .space(&mut self.buffer, self.cursor.position(), 1)?;
                self.cursor.set_position(cursor);
                self.dirty = true;
                Ok(SessionOutcome::Changed)
            }
            KeyCode::Delete => {
                if self.buffer.delete_char(self.cursor.position()) {
                    self.dirty = true;
                    Ok(SessionOutcome::Changed)
                } else {
                    Ok(SessionOutcome::Continue)
                }
            }
            KeyCode::Char(ch) => {
                let pos = self.cursor.position();
                if self.buffer.insert_char(pos, ch) {
                    self.cursor
                        .set_position(Position::new(pos.row, pos.col + ch.len_utf8()));
                    self.dirty = true;
                    Ok(SessionOutcome::Changed)
                } else {
                    Ok(SessionOutcome::Continue)
                }
            }
            KeyCode::Up => {
                self.cursor.move_up(&self.buffer);
                Ok(SessionOutcome::Continue)
            }
            KeyCode::Down => {
                self.cursor.move_down(&self.buffer);
                Ok(SessionOutcome::Continue)
            }
            KeyCode::Left => {
                self.cursor.move_left(&self.buffer);
                Ok(SessionOutcome::Continue)
            }
            KeyCode::Right => {
                self.cursor.move_right(&self.buffer);
                Ok(SessionOutcome::Continue)
            }
            KeyCode::Home => {
                self.cursor.move_line_start();
                Ok(SessionOutcome::Continue)
            }
            KeyCode::End => {
                self.cursor.move_line_end(&self.buffer);
                Ok(SessionOutcome::Continue)
            }
            _ => Ok(SessionOutcome::Continue),
        }
    }
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new()
    }
}
