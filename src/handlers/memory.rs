//! In-memory handler for tests and inspection

use crate::core::{Handler, Message, Result};
use parking_lot::Mutex;
use std::sync::Arc;

/// Keeps every message it receives.
///
/// Clones share the same storage: register one clone with a logger and read
/// the collected messages through another.
#[derive(Debug, Clone, Default)]
pub struct MemoryHandler {
    messages: Arc<Mutex<Vec<Message>>>,
}

impl MemoryHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every message received so far, in arrival order
    pub fn messages(&self) -> Vec<Message> {
        self.messages.lock().clone()
    }

    /// Text of every message received so far
    pub fn texts(&self) -> Vec<String> {
        self.messages.lock().iter().map(|m| m.text.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.messages.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.lock().is_empty()
    }

    pub fn clear(&self) {
        self.messages.lock().clear();
    }
}

impl Handler for MemoryHandler {
    fn handle(&self, messages: &[Message]) -> Result<()> {
        self.messages.lock().extend_from_slice(messages);
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
