//! Wire format contract tests
//!
//! These tests pin the JSON shapes of the types that cross crate
//! boundaries: input events, session snapshots, and configuration files.
//! A host that stores or replays any of these depends on the exact field
//! names and tags below.

use serde::{Deserialize, Serialize};

use indent_core::SessionSnapshot;
use input_types::InputEvent;

// ===== Canonical Payload Structures =====

/// One recorded exchange: the event a host fed in and the snapshot the
/// session produced. Replay tooling stores a sequence of these.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReplayRecord {
    pub event: InputEvent,
    pub snapshot: SessionSnapshot,
}

// ===== Contract Tests =====
