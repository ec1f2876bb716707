//! Multi-session host
//!
//! Owns one validated engine configuration and fans input events out to
//! editing sessions by id. Sessions are isolated: each keeps its own
//! buffer, cursor and cycle marker.

use std::collections::BTreeMap;
use std::fmt;

use indent_core::{Indenter, IndentOptions, OptionsError};
use input_types::InputEvent;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::session::{EditSession, SessionError, SessionOutcome};

/// Unique identifier for an editing session
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Creates a new random session ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a session ID from a UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Session({})", self.0)
    }
}

/// Host error
#[derive(Debug, Error)]
pub enum HostError {
    #[error("Unknown session: {0}")]
    UnknownSession(SessionId),

    #[error("Options error: {0}")]
    Options(#[from] OptionsError),

    #[error("Session error: {0}")]
    Session(#[from] SessionError),
}

/// Host for any number of editing sessions sharing one configuration
pub struct SessionHost {
    indenter: Indenter,
    sessions: BTreeMap<SessionId, EditSession>,
}

impl SessionHost {
    /// Create a host with default indentation options
    pub fn new() -> Self {
        Self {
            indenter: Indenter::default(),
            sessions: BTreeMap::new(),
        }
    }

    /// Create a host from options, validating them first
    pub fn with_options(options: IndentOptions) -> Result<Self, HostError> {
        Ok(Self {
            indenter: Indenter::new(options)?,
            sessions: BTreeMap::new(),
        })
    }

    /// Open an empty session
    pub fn open_session(&mut self) -> SessionId {
        let id = SessionId::new();
        self.sessions
            .insert(id, EditSession::with_indenter(self.indenter.clone()));
        id
    }

    /// Open a session over existing document content
    pub fn open_session_with_content(&mut self, content: String) -> SessionId {
        let id = self.open_session();
        if let Some(session) = self.sessions.get_mut(&id) {
            session.load_content(content);
        }
        id
    }

    /// Close a session, dropping its state
    pub fn close_session(&mut self, id: SessionId) -> Result<(), HostError> {
        self.sessions
            .remove(&id)
            .map(|_| ())
            .ok_or(HostError::UnknownSession(id))
    }

    pub fn session(&self, id: SessionId) -> Option<&EditSession> {
        self.sessions.get(&id)
    }

    pub fn session_mut(&mut self, id: SessionId) -> Option<&mut EditSession> {
        self.sessions.get_mut(&id)
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    pub fn session_ids(&self) -> Vec<SessionId> {
        self.sessions.keys().copied().collect()
    }

    /// Route an input event to a session
    pub fn dispatch(
        &mut self,
        id: SessionId,
        event: InputEvent,
    ) -> Result<SessionOutcome, HostError> {
        let session = self
            .sessions
            .get_mut(&id)
            .ok_or(HostError::UnknownSession(id))?;
        Ok(session.process_input(event)?)
    }
}

impl Default for SessionHost {
    fn default() -> Self {
        Self::new()
    }
}
