//! Editing co-command contract tests
//!
//! These tests pin the observable behavior of the newline, backspace and
//! space co-commands and the region shift operations, both at the engine
//! level and as dispatched through a session.

// ===== Contract Tests =====
