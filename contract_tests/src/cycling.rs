//! Indent-cycle contract tests
//!
//! These tests pin the engine's valid-indent sequences and the tab-cycle
//! rotation order. The sequences below are observable behavior that hosts
//! depend on; changing any of them is a breaking change.

// ===== Contract Fixtures =====

/// A line with no indent context on either side
const LEVEL_LINE: &str = "blah = 1";

/// A function body below a trailing-arrow opener
const ARROW_BLOCK: &str = "blah = ->\nfunc()";

/// An indented body below an indented `if`
const KEYWORD_BLOCK: &str = "  if 1 == 1\n  func()";

// ===== Expected Candidate Sequences =====

const LEVEL_LINE_CANDIDATES: &[usize] = &[0, 2];
const ARROW_BLOCK_CANDIDATES: &[usize] = &[2, 0];
const KEYWORD_BLOCK_CANDIDATES: &[usize] = &[4, 2, 0];

// ===== Contract Tests =====
