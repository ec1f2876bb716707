//! # Editing Session Service
//!
//! This crate hosts BrewEdit's indentation engine inside stateful editing
//! sessions driven by structured input events.
//!
//! ## Philosophy
//!
//! - **Engine stays pure**: All indentation decisions live in `indent_core`;
//!   the session only threads buffer, cursor and cycle state through it
//! - **Events, not keymaps**: Input arrives as typed KeyEvent messages;
//!   there is no keybinding layer to configure
//! - **Config at the edge**: Options are parsed and validated once, when a
//!   session or host is built, never re-read mid-edit
//! - **Testable**: Sessions are driven end to end with injected key events
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - A terminal or TTY emulation
//! - A full-featured editor with syntax highlighting
//! - A compiler or REPL integration
//! - Scriptable or pluggable
//!
//! ## Design
//!
//! - Each `EditSession` owns one document, one cursor and one cycle marker
//! - Tab indents through the cycle controller; Enter, Backspace and Space go
//!   through the engine's co-commands; plain characters insert directly
//! - A `SessionHost` fans events out to sessions by id, sharing one
//!   validated engine configuration

pub mod config;
pub mod host;
pub mod session;
pub mod state;

pub use config::{ConfigError, SessionConfig};
pub use host::{HostError, SessionHost, SessionId};
pub use session::{EditSession, SessionError, SessionOutcome, SessionResult};
pub use state::{Cursor, Position};
