#![no_std]

//! # Indent Core
//!
//! CoffeeScript-aware indentation engine for BrewEdit.
//!
//! ## Philosophy
//!
//! - **No_std compatible**: Uses alloc but not std
//! - **Deterministic**: Same document, cursor and options => same answer
//! - **Explicit state**: Cycle repetition state is passed in and handed back,
//!   never read from ambient session globals
//! - **Heuristic, not semantic**: Lines are classified from local lexical cues
//!   (trailing characters, leading keywords, indentation deltas); the engine
//!   never builds an AST and never looks past the nearest preceding non-blank
//!   line
//!
//! ## Design
//!
//! The core provides:
//! - TextBuffer/Position: Line-based document storage
//! - Indenter: Valid-indent computation, the tab-cycle controller, and the
//!   newline/backspace/space co-commands
//! - SyntaxContext: Lexical string/comment context as a pure query
//! - SessionSnapshot: Deterministic state for parity testing

extern crate alloc;

pub mod buffer;
pub mod classify;
pub mod config;
pub mod edit;
pub mod indent;
pub mod scan;
pub mod snapshot;

pub use buffer::{Position, PositionError, TextBuffer};
pub use classify::LineInfo;
pub use config::{IndentOptions, OptionsError, DEFAULT_INDENT_UNIT};
pub use indent::{CycleState, IndentOutcome, Indenter};
pub use scan::SyntaxContext;
pub use snapshot::SessionSnapshot;
