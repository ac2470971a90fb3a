//! Append-only logfmt record builder
//!
//! Tokens are separated by a single space; no separator is ever written
//! before the first token. Backing storage comes from the process-wide pool
//! and goes back to it on [`Buffer::reset`] or drop.

use super::pool;
use super::timestamp::TIME_FORMAT;
use super::value::{write_value_str, Value};
use chrono::{DateTime, TimeZone};
use std::fmt::{self, Write as _};
use std::io;

/// Platform line terminator
pub const EOL: &str = if cfg!(windows) { "\r\n" } else { "\n" };

/// Builder for a single logfmt line
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use rust_logfmt_logger::logfmt::Buffer;
/// use rust_logfmt_logger::Value;
///
/// let mut buf = Buffer::new();
/// buf.write_timestamp(&Utc.timestamp_opt(1234567890, 987654321).unwrap());
/// buf.write_key("info");
/// buf.write_property("key1", &Value::from(1));
/// buf.write_property("key2", &Value::from("value 2"));
///
/// assert_eq!(
///     buf.as_str(),
///     r#"2009-02-13T23:31:30.987654+0000 info key1=1 key2="value 2""#
/// );
/// ```
#[derive(Debug, Default)]
pub struct Buffer {
    buf: Option<String>,
}

impl Buffer {
    pub const fn new() -> Self {
        Self { buf: None }
    }

    fn allocate(&mut self) -> &mut String {
        self.buf.get_or_insert_with(pool::acquire)
    }

    /// Storage with a separator appended if anything was written before
    fn spaced(&mut self) -> &mut String {
        let buf = self.allocate();
        if !buf.is_empty() {
            buf.push(' ');
        }
        buf
    }

    pub fn write_timestamp<Tz>(&mut self, timestamp: &DateTime<Tz>)
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let buf = self.spaced();
        let _ = write!(buf, "{}", timestamp.format(TIME_FORMAT));
    }

    /// Write a bare key with no value. The key is not quoted.
    pub fn write_key(&mut self, key: &str) {
        self.spaced().push_str(key);
    }

    /// Write `key=value`, quoting the value when needed
    pub fn write_property(&mut self, key: &str, value: &Value) {
        let buf = self.spaced();
        buf.push_str(key);
        buf.push('=');
        value.encode_into(buf);
    }

    /// Write `key=text`, treating `text` as a string value
    pub fn write_text_property(&mut self, key: &str, text: &str) {
        let buf = self.spaced();
        buf.push_str(key);
        buf.push('=');
        write_value_str(buf, text);
    }

    /// Write a single line feed regardless of platform
    pub fn write_newline(&mut self) {
        self.allocate().push('\n');
    }

    /// Write the platform line terminator
    pub fn write_eol(&mut self) {
        self.allocate().push_str(EOL);
    }

    pub fn as_str(&mut self) -> &str {
        self.allocate().as_str()
    }

    pub fn len(&mut self) -> usize {
        self.allocate().len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.as_ref().map_or(true, String::is_empty)
    }

    /// Write the accumulated text to `w`, returning the number of bytes written
    pub fn write_to<W: io::Write + ?Sized>(&mut self, w: &mut W) -> io::Result<usize> {
        let text = self.allocate();
        w.write_all(text.as_bytes())?;
        Ok(text.len())
    }

    /// Release the storage back to the pool. The buffer is empty afterwards
    /// and can be written again.
    pub fn reset(&mut self) {
        if let Some(buf) = self.buf.take() {
            pool::release(buf);
        }
    }
}

impl fmt::Display for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.buf.as_deref().unwrap_or(""))
    }
}

impl Drop for Buffer {
    fn drop(&mut self) {
        self.reset();
    }
}
