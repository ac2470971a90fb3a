//! Handler trait for secondary consumers of dispatched messages

use super::{error::Result, message::Message};
use std::sync::Arc;

/// A pluggable consumer that receives every message a logger dispatches.
///
/// Messages arrive as a batch so that buffering handlers can be built on the
/// same contract; the logger itself always passes a single message. Errors
/// are the handler's own concern: the logger counts and reports them but
/// never propagates them, and continues with the next handler.
///
/// Handlers run while the logger's lock is held. A handler that logs through
/// the same logger will deadlock, and a slow handler delays every caller.
pub trait Handler: Send + Sync {
    fn handle(&self, messages: &[Message]) -> Result<()>;

    fn name(&self) -> &str {
        "handler"
    }

    /// Flush anything the handler buffers
    fn flush(&self) -> Result<()> {
        Ok(())
    }
}

impl<H: Handler + ?Sized> Handler for Arc<H> {
    fn handle(&self, messages: &[Message]) -> Result<()> {
        (**self).handle(messages)
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn flush(&self) -> Result<()> {
        (**self).flush()
    }
}

impl<H: Handler + ?Sized> Handler for Box<H> {
    fn handle(&self, messages: &[Message]) -> Result<()> {
        (**self).handle(messages)
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn flush(&self) -> Result<()> {
        (**self).flush()
    }
}
