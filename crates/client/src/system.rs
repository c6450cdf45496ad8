//! System clipboard seam.
//!
//! Responsibilities:
//! - Abstract reading and writing the OS clipboard behind a trait so
//!   the service and watcher can run against an in-memory fake.
//!
//! Does NOT handle:
//! - History bookkeeping or notifications (see `service`).

use std::sync::Mutex;

use crate::error::{Result, ServiceError};

/// Text-level access to a clipboard.
pub trait SystemClipboard: Send + Sync {
    /// Current clipboard text; empty string when the clipboard holds
    /// nothing (or nothing textual).
    fn get_text(&self) -> Result<String>;

    /// Replace the clipboard contents.
    fn set_text(&self, text: &str) -> Result<()>;
}

/// OS clipboard backed by arboard.
pub struct ArboardClipboard {
    inner: Mutex<arboard::Clipboard>,
}

impl ArboardClipboard {
    pub fn new() -> Result<Self> {
        let clipboard =
            arboard::Clipboard::new().map_err(|e| ServiceError::Clipboard(e.to_string()))?;
        Ok(Self {
            inner: Mutex::new(clipboard),
        })
    }
}

impl SystemClipboard for ArboardClipboard {
    fn get_text(&self) -> Result<String> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| ServiceError::Clipboard("clipboard lock poisoned".to_string()))?;
        match guard.get_text() {
            Ok(text) => Ok(text),
            // An empty or non-text clipboard is not an error for us.
            Err(arboard::Error::ContentNotAvailable) => Ok(String::new()),
            Err(e) => Err(ServiceError::Clipboard(e.to_string())),
        }
    }

    fn set_text(&self, text: &str) -> Result<()> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| ServiceError::Clipboard("clipboard lock poisoned".to_string()))?;
        guard
            .set_text(text)
            .map_err(|e| ServiceError::Clipboard(e.to_string()))
    }
}

/// In-memory clipboard for tests and headless environments.
#[derive(Default)]
pub struct MemoryClipboard {
    text: Mutex<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SystemClipboard for MemoryClipboard {
    fn get_text(&self) -> Result<String> {
        self.text
            .lock()
            .map(|t| t.clone())
            .map_err(|_| ServiceError::Clipboard("clipboard lock poisoned".to_string()))
    }

    fn set_text(&self, text: &str) -> Result<()> {
        self.text
            .lock()
            .map(|mut t| *t = text.to_string())
            .map_err(|_| ServiceError::Clipboard("clipboard lock poisoned".to_string()))
    }
}
