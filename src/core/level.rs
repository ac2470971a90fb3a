//! Log level definitions

use super::error::LoggerError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Severity of a log message.
///
/// A level is an integer code. The four canonical levels are exposed as
/// associated constants and order as `DEBUG < INFO < WARNING < ERROR`.
/// Codes outside that set are still valid values: they compare by code and
/// render as `unknown <n>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(i32);

impl Level {
    /// Debugging only
    pub const DEBUG: Level = Level(0);
    /// Informational
    pub const INFO: Level = Level(1);
    /// Warning
    pub const WARNING: Level = Level(2);
    /// Error condition
    pub const ERROR: Level = Level(3);

    pub const fn from_code(code: i32) -> Self {
        Level(code)
    }

    pub const fn code(&self) -> i32 {
        self.0
    }

    /// Canonical lowercase name, or `None` for an unknown code.
    pub fn name(&self) -> Option<&'static str> {
        match *self {
            Level::DEBUG => Some("debug"),
            Level::INFO => Some("info"),
            Level::WARNING => Some("warn"),
            Level::ERROR => Some("error"),
            _ => None,
        }
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::INFO
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "unknown {}", self.0),
        }
    }
}

impl FromStr for Level {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(Level::DEBUG),
            "info" | "information" => Ok(Level::INFO),
            "warn" | "warning" => Ok(Level::WARNING),
            "error" => Ok(Level::ERROR),
            _ => Err(LoggerError::invalid_level(s)),
        }
    }
}

impl Serialize for Level {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
