//! Options that can be applied to a message when it is logged
//!
//! Options compose freely and are applied left to right:
//!
//! ```
//! use rust_logfmt_logger::{with_code, with_status, with_value, Context, Logger};
//!
//! let logger = Logger::builder().sink(std::io::sink()).build();
//! let m = logger.warn(
//!     &Context::new(),
//!     "quota exceeded",
//!     [with_value("user", "u-17"), with_code("QUOTA"), with_status(429)],
//! );
//! assert_eq!(m.code(), Some("QUOTA"));
//! assert_eq!(m.status(), Some(429));
//! ```

use super::context::Property;
use super::message::Message;
use crate::logfmt::Value;
use std::error::Error;
use std::sync::Arc;

/// Boxed error accepted by [`with_error`]
pub type BoxError = Box<dyn Error + Send + Sync>;

/// A single change applied to a [`Message`] before it is dispatched
#[derive(Debug, Clone)]
pub enum MessageOption {
    /// Set the error; the last one set wins
    Error(Arc<dyn Error + Send + Sync>),
    /// Append an explicit property
    Value(Property),
    /// Set the application code; the last one set wins
    Code(String),
    /// Set the status; the last one set wins
    Status(i32),
}

impl MessageOption {
    pub fn apply(self, message: &mut Message) {
        match self {
            MessageOption::Error(err) => message.set_error(err),
            MessageOption::Value(property) => message.add_property(property),
            MessageOption::Code(code) => message.set_code(code),
            MessageOption::Status(status) => message.set_status(status),
        }
    }
}

/// Attach the error that caused the message
pub fn with_error(err: impl Into<BoxError>) -> MessageOption {
    MessageOption::Error(Arc::from(err.into()))
}

/// Append a named value to the message
pub fn with_value(name: impl Into<String>, value: impl Into<Value>) -> MessageOption {
    MessageOption::Value(Property::new(name, value))
}

/// Associate an arbitrary application code with the message
pub fn with_code(code: impl Into<String>) -> MessageOption {
    MessageOption::Code(code.into())
}

/// Associate a status, e.g. an HTTP status code, with the message
pub fn with_status(status: i32) -> MessageOption {
    MessageOption::Status(status)
}
