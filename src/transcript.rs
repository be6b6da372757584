//! Chat transcript storage.
//!
//! The chat panel persists its message list so a reopened session shows
//! prior turns. The store is an explicit append / full-read / clear
//! surface, optionally backed by a JSON file on disk. The renderer never
//! reads it: rendering stays a pure function of the text it is handed.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The person asking about candidates
    User,
    /// The assistant answering
    Assistant,
}

/// One stored chat message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Message author
    pub role: Role,

    /// Raw reply text; rendered on every display pass, never cached
    pub content: String,

    /// When the message was appended
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Create a message stamped with the current time.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Create an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

/// Append / full-read store for a chat transcript.
///
/// Every mutation persists immediately when the store is file-backed, so a
/// crash never loses an appended message.
pub struct TranscriptStore {
    path: Option<PathBuf>,
    messages: Vec<Message>,
}

impl TranscriptStore {
    /// Create an in-memory store with no persistence.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            messages: Vec::new(),
        }
    }

    /// Open a file-backed store. A missing file starts an empty transcript;
    /// an unreadable or corrupt file is an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let messages = if path.exists() {
            let data = fs::read_to_string(&path)?;
            serde_json::from_str(&data)
                .map_err(|e| Error::Transcript(format!("corrupt transcript file: {}", e)))?
        } else {
            Vec::new()
        };

        Ok(Self {
            path: Some(path),
            messages,
        })
    }

    /// Append one message and persist.
    pub fn append(&mut self, message: Message) -> Result<()> {
        self.messages.push(message);
        self.save()
    }

    /// Full read of the stored transcript, oldest first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Number of stored messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Check if the transcript is empty.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Drop all messages and persist the empty transcript.
    pub fn clear(&mut self) -> Result<()> {
        self.messages.clear();
        self.save()
    }

    /// The backing file, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn save(&self) -> Result<()> {
        if let Some(path) = &self.path {
            let data = serde_json::to_string_pretty(&self.messages)
                .map_err(|e| Error::Transcript(format!("serialize transcript: {}", e)))?;
            fs::write(path, data)?;
        }
        Ok(())
    }
}
