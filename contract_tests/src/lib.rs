//! # Engine Contract Tests
//!
//! This crate provides "golden" tests for the indentation engine's contracts
//! to ensure they don't drift accidentally over time.
//!
//! ## Philosophy
//!
//! - **Explicit over implicit**: Observable behavior is written down as code
//! - **Testability first**: Contract tests fail when behavior or formats change
//! - **Mechanism not policy**: Define what must be stable, not how to use it
//!
//! ## Structure
//!
//! Each contract area has a module with tests that verify:
//! - Valid-indent sequences and tab-cycle rotation
//! - Co-command editing behavior (newline, backspace, space, shift)
//! - Serialized wire formats (events, snapshots, configuration)

pub mod cycling;
pub mod editing;
pub mod formats;

/// Common test helpers for driving engines and sessions
pub mod test_helpers {
    use edit_session::EditSession;
    use indent_core::{IndentOptions, Indenter, TextBuffer};
    use input_types::{InputEvent, KeyCode, KeyEvent, Modifiers};

    /// Creates an unmodified key-press event
    pub fn press(code: KeyCode) -> InputEvent {
        InputEvent::key(KeyEvent::pressed(code, Modifiers::none()))
    }

    /// Creates a buffer from literal text
    pub fn buffer(content: &str) -> TextBuffer {
        TextBuffer::from_string(content.to_string())
    }

    /// Creates an engine with default options
    pub fn engine() -> Indenter {
        Indenter::default()
    }

    /// Creates an engine with the given indent unit
    pub fn engine_with_unit(unit: usize) -> Indenter {
        Indenter::new(IndentOptions::with_unit(unit)).expect("Failed to build engine")
    }

    /// Creates a session preloaded with content
    pub fn session_with(content: &str) -> EditSession {
        let mut session = EditSession::new();
        session.load_content(content.to_string());
        session
    }

    /// Drives one key press through a session
    pub fn tap(session: &mut EditSession, code: KeyCode) {
        session
            .process_input(press(code))
            .expect("Failed to process key press");
    }
}
