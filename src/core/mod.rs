//! Core logger types and traits

pub mod config;
pub mod context;
pub mod error;
pub mod global;
pub mod handler;
pub mod level;
pub mod logger;
pub mod message;
pub mod metrics;
pub mod option;
pub mod writer;

pub use config::LoggerConfig;
pub use context::{Context, Property};
pub use error::{LoggerError, Result};
pub use handler::Handler;
pub use level::Level;
pub use logger::{Logger, LoggerBuilder};
pub use message::{Message, OutputFlags};
pub use metrics::LoggerMetrics;
pub use option::{with_code, with_error, with_status, with_value, BoxError, MessageOption};
pub use writer::LogWriter;
