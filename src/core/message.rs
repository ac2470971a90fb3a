//! Log message structure and its logfmt rendering

use super::context::{Context, Property};
use super::level::Level;
use super::option::MessageOption;
use crate::logfmt::{format_timestamp, Buffer, Value};
use chrono::{DateTime, FixedOffset, Local, Utc};
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Rendering options applied by a logger to every line it writes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputFlags {
    /// Convert timestamps to UTC before formatting
    pub utc: bool,
    /// Terminate lines with a bare line feed instead of the platform EOL
    pub line_feed: bool,
}

impl OutputFlags {
    pub const fn new() -> Self {
        Self {
            utc: false,
            line_feed: false,
        }
    }

    #[must_use]
    pub const fn utc(mut self, utc: bool) -> Self {
        self.utc = utc;
        self
    }

    #[must_use]
    pub const fn line_feed(mut self, line_feed: bool) -> Self {
        self.line_feed = line_feed;
        self
    }
}

/// A single log record
///
/// Built once per logging call. `context` is a snapshot of the propagation
/// context taken when the message was created; later changes to the caller's
/// context do not affect it.
///
/// A `Message` is also an error whose description is its `text`, so a
/// logging call can be returned directly from a failing function:
///
/// ```
/// use rust_logfmt_logger::{with_value, Context, Logger, Message};
///
/// fn connect(logger: &Logger, ctx: &Context, port: u16) -> Result<(), Message> {
///     Err(logger.error(ctx, "cannot connect", [with_value("port", port)]))
/// }
///
/// let logger = Logger::builder().sink(std::io::sink()).build();
/// let err = connect(&logger, &Context::new(), 8080).unwrap_err();
/// assert_eq!(err.to_string(), "cannot connect");
/// ```
#[derive(Debug, Clone)]
pub struct Message {
    pub timestamp: DateTime<FixedOffset>,
    pub level: Level,
    pub text: String,
    pub error: Option<Arc<dyn Error + Send + Sync>>,
    /// Properties supplied with the logging call, in the order given
    pub properties: Vec<Property>,
    /// Properties taken from the propagation context, newest first
    pub context: Vec<Property>,
    code: Option<String>,
    status: Option<i32>,
}

impl Message {
    /// Create a message stamped with the current local time
    pub fn new(level: Level, text: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now().fixed_offset(),
            level,
            text: text.into(),
            error: None,
            properties: Vec::new(),
            context: Vec::new(),
            code: None,
            status: None,
        }
    }

    /// Create a message carrying a snapshot of `ctx`'s properties
    pub fn from_context(ctx: &Context, level: Level, text: impl Into<String>) -> Self {
        let mut message = Self::new(level, text);
        message.context = ctx.properties();
        message
    }

    /// Replace the timestamp, e.g. with a fixed clock
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<FixedOffset>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Apply options in order
    pub fn apply_options<I>(&mut self, options: I) -> &mut Self
    where
        I: IntoIterator<Item = MessageOption>,
    {
        for option in options {
            option.apply(self);
        }
        self
    }

    pub fn set_error(&mut self, error: Arc<dyn Error + Send + Sync>) {
        self.error = Some(error);
    }

    pub fn add_property(&mut self, property: Property) {
        self.properties.push(property);
    }

    /// Application-defined code; the last value set wins
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn set_code(&mut self, code: impl Into<String>) {
        self.code = Some(code.into());
    }

    /// Status associated with the message, typically an HTTP status code
    pub fn status(&self) -> Option<i32> {
        self.status
    }

    pub fn set_status(&mut self, status: i32) {
        self.status = Some(status);
    }

    /// Write every field of the record, without a line terminator
    pub fn write_fields(&self, buf: &mut Buffer, flags: OutputFlags) {
        if flags.utc {
            buf.write_timestamp(&self.timestamp.with_timezone(&Utc));
        } else {
            buf.write_timestamp(&self.timestamp);
        }

        match self.level.name() {
            Some(name) => buf.write_key(name),
            None => buf.write_key(&self.level.to_string()),
        }

        buf.write_text_property("msg", &self.text);
        if let Some(ref error) = self.error {
            buf.write_text_property("error", &error.to_string());
        }

        for p in self.properties.iter().chain(&self.context) {
            buf.write_property(&p.key, &p.value);
        }

        if let Some(ref code) = self.code {
            buf.write_text_property("code", code);
        }
        if let Some(status) = self.status {
            buf.write_property("status", &Value::Int(status.into()));
        }
    }

    /// Write the full record followed by the terminator chosen by `flags`
    pub fn write_line(&self, buf: &mut Buffer, flags: OutputFlags) {
        self.write_fields(buf, flags);
        if flags.line_feed {
            buf.write_newline();
        } else {
            buf.write_eol();
        }
    }

    /// The record as a logfmt string with no line terminator
    #[must_use]
    pub fn logfmt(&self) -> String {
        let mut buf = Buffer::new();
        self.write_fields(&mut buf, OutputFlags::default());
        buf.as_str().to_string()
    }

    /// The record as a complete line
    #[must_use]
    pub fn render(&self, flags: OutputFlags) -> String {
        let mut buf = Buffer::new();
        self.write_line(&mut buf, flags);
        buf.as_str().to_string()
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Error for Message {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.error
            .as_deref()
            .map(|e| e as &(dyn Error + 'static))
    }
}

impl Serialize for Message {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Message", 8)?;
        state.serialize_field("timestamp", &format_timestamp(&self.timestamp))?;
        state.serialize_field("level", &self.level)?;
        state.serialize_field("msg", &self.text)?;
        match self.error {
            Some(ref error) => state.serialize_field("error", &error.to_string())?,
            None => state.skip_field("error")?,
        }
        state.serialize_field("properties", &self.properties)?;
        state.serialize_field("context", &self.context)?;
        match self.code {
            Some(ref code) => state.serialize_field("code", code)?,
            None => state.skip_field("code")?,
        }
        match self.status {
            Some(status) => state.serialize_field("status", &status)?,
            None => state.skip_field("status")?,
        }
        state.end()
    }
}
