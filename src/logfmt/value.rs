//! Property values and their logfmt text encoding
//!
//! A [`Value`] is an opaque scalar. Numbers and booleans are written bare;
//! every textual form goes through [`write_value_str`], which only quotes when
//! the text contains characters that would break the `key=value` grammar.

use super::timestamp::format_timestamp;
use chrono::{DateTime, FixedOffset, Local, Utc};
use serde::{Serialize, Serializer};
use std::fmt::{self, Write};
use std::time::SystemTime;

/// Scalar value attached to a property
///
/// Primitive numbers, booleans, strings and timestamps convert with `From`.
/// Application types pick the capability they want to be logged through:
///
/// ```
/// use rust_logfmt_logger::Value;
///
/// #[derive(Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let v = Value::debug(&Point { x: 1, y: 2 });
/// assert_eq!(v.encode(), r#""Point { x: 1, y: 2 }""#);
///
/// let v = Value::display(&std::net::Ipv4Addr::LOCALHOST);
/// assert_eq!(v.encode(), "127.0.0.1");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float32(f32),
    Float64(f64),
    Complex32 { re: f32, im: f32 },
    Complex64 { re: f64, im: f64 },
    /// Message text of an error value
    Error(String),
    Time(DateTime<FixedOffset>),
    Str(String),
    /// Output of a custom `Display` implementation
    Display(String),
    /// Text form produced by a `Serialize` implementation
    Text(String),
    /// Generic structural dump via `Debug`
    Debug(String),
}

impl Value {
    pub fn complex(re: f64, im: f64) -> Self {
        Value::Complex64 { re, im }
    }

    pub fn error<E: std::error::Error + ?Sized>(err: &E) -> Self {
        Value::Error(err.to_string())
    }

    pub fn display<T: fmt::Display + ?Sized>(value: &T) -> Self {
        Value::Display(value.to_string())
    }

    /// Capture the serde text form of `value`.
    ///
    /// A value that serializes to a JSON string is used unwrapped, anything
    /// else is kept as compact JSON. A serialization failure is captured as
    /// the failure's message so that encoding never fails.
    pub fn serialized<T: Serialize + ?Sized>(value: &T) -> Self {
        let text = match serde_json::to_value(value) {
            Ok(serde_json::Value::String(s)) => s,
            Ok(other) => other.to_string(),
            Err(err) => err.to_string(),
        };
        Value::Text(text)
    }

    pub fn debug<T: fmt::Debug + ?Sized>(value: &T) -> Self {
        Value::Debug(format!("{:?}", value))
    }

    /// Encode as a logfmt value
    #[must_use]
    pub fn encode(&self) -> String {
        let mut out = String::new();
        self.encode_into(&mut out);
        out
    }

    /// Append the logfmt encoding of this value to `out`
    pub fn encode_into(&self, out: &mut String) {
        match self {
            Value::Bool(v) => push_display(out, v),
            Value::Int(v) => push_display(out, v),
            Value::Uint(v) => push_display(out, v),
            Value::Float32(v) => push_display(out, v),
            Value::Float64(v) => push_display(out, v),
            Value::Complex32 { .. } | Value::Complex64 { .. } | Value::Time(_) => {
                write_value_str(out, &self.to_string())
            }
            Value::Error(s) | Value::Str(s) | Value::Display(s) | Value::Text(s) | Value::Debug(s) => {
                write_value_str(out, s)
            }
        }
    }
}

fn push_display<T: fmt::Display>(out: &mut String, value: &T) {
    // fmt::Write for String cannot fail
    let _ = write!(out, "{}", value);
}

/// Write text destined to be a logfmt value.
///
/// Text containing `"`, `=`, CR, LF, TAB or any character at or below space
/// is quoted. Inside quotes CR is dropped, LF and TAB become `\n` and `\t`,
/// and `\` and `"` gain a leading backslash. Unquoted text is written as-is,
/// so a lone backslash stays unescaped.
pub fn write_value_str(out: &mut String, value: &str) {
    let needs_quotes = value
        .chars()
        .any(|c| matches!(c, '"' | '=') || c <= ' ');

    if !needs_quotes {
        out.push_str(value);
        return;
    }

    out.push('"');
    for c in value.chars() {
        match c {
            '\r' => {}
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\\' | '"' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out.push('"');
}

/// Unquoted text form of the value
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(v) => write!(f, "{}", v),
            Value::Int(v) => write!(f, "{}", v),
            Value::Uint(v) => write!(f, "{}", v),
            Value::Float32(v) => write!(f, "{}", v),
            Value::Float64(v) => write!(f, "{}", v),
            Value::Complex32 { re, im } => write!(f, "({}{:+}i)", re, im),
            Value::Complex64 { re, im } => write!(f, "({}{:+}i)", re, im),
            Value::Time(t) => f.write_str(&format_timestamp(t)),
            Value::Error(s) | Value::Str(s) | Value::Display(s) | Value::Text(s) | Value::Debug(s) => {
                f.write_str(s)
            }
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Bool(v) => serializer.serialize_bool(*v),
            Value::Int(v) => serializer.serialize_i64(*v),
            Value::Uint(v) => serializer.serialize_u64(*v),
            Value::Float32(v) => serializer.serialize_f32(*v),
            Value::Float64(v) => serializer.serialize_f64(*v),
            _ => serializer.collect_str(self),
        }
    }
}

macro_rules! impl_from_int {
    ($variant:ident, $target:ty, $($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::$variant(v as $target)
                }
            }
        )*
    };
}

impl_from_int!(Int, i64, i8, i16, i32, i64, isize);
impl_from_int!(Uint, u64, u8, u16, u32, u64, usize);

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float32(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float64(v)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::Str(s.clone())
    }
}

impl From<DateTime<FixedOffset>> for Value {
    fn from(t: DateTime<FixedOffset>) -> Self {
        Value::Time(t)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(t: DateTime<Utc>) -> Self {
        Value::Time(t.fixed_offset())
    }
}

impl From<DateTime<Local>> for Value {
    fn from(t: DateTime<Local>) -> Self {
        Value::Time(t.fixed_offset())
    }
}

impl From<SystemTime> for Value {
    fn from(t: SystemTime) -> Self {
        Value::Time(DateTime::<Local>::from(t).fixed_offset())
    }
}
