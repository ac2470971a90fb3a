//! Serializable logger configuration
//!
//! Where the configuration comes from (file, environment, command line) is
//! up to the application; any serde format can produce a [`LoggerConfig`].

use super::level::Level;
use super::message::OutputFlags;
use serde::{Deserialize, Serialize};

/// Settings applied by [`LoggerBuilder::config`](super::LoggerBuilder::config)
///
/// # Example
///
/// ```
/// use rust_logfmt_logger::{Level, LoggerConfig};
///
/// let config: LoggerConfig = serde_json::from_str(r#"{"min_level":"Warning","utc":true}"#).unwrap();
/// assert_eq!(config.min_level, Level::WARNING);
/// assert!(config.utc);
/// assert!(!config.line_feed);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Messages below this level are not written
    pub min_level: Level,
    /// Render timestamps in UTC
    pub utc: bool,
    /// Force `\n` line endings
    pub line_feed: bool,
}

impl LoggerConfig {
    pub fn flags(&self) -> OutputFlags {
        OutputFlags::new().utc(self.utc).line_feed(self.line_feed)
    }
}
