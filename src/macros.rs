//! Logging macros for ergonomic message formatting.
//!
//! These macros build the message text with `format!` syntax and take the
//! message options after a `;`. Prefer constant texts with the variable
//! parts passed as properties: constant texts are easier to search for and
//! aggregate.
//!
//! # Examples
//!
//! ```
//! use rust_logfmt_logger::prelude::*;
//! use rust_logfmt_logger::{error, info};
//!
//! let logger = Logger::builder().sink(std::io::sink()).build();
//! let ctx = Context::new().with_property("service", "billing");
//!
//! // Constant text
//! info!(logger, &ctx, "Server started");
//!
//! // Constant text with properties
//! let port = 8080;
//! info!(logger, &ctx, "Server listening"; with_value("port", port));
//!
//! // Formatted text with options
//! let m = error!(logger, &ctx, "Shard {} unavailable", 3; with_code("SHARD"), with_status(503));
//! assert_eq!(m.text, "Shard 3 unavailable");
//! ```

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use rust_logfmt_logger::prelude::*;
/// # let logger = Logger::builder().sink(std::io::sink()).build();
/// use rust_logfmt_logger::log;
/// let ctx = Context::new();
/// log!(logger, Level::INFO, &ctx, "Simple message");
/// log!(logger, Level::ERROR, &ctx, "Error code: {}", 500; with_status(500));
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $ctx:expr, $fmt:literal $(, $arg:expr)* $(; $($opt:expr),+)?) => {
        $logger.log($level, $ctx, format!($fmt $(, $arg)*), [$($($opt),+)?])
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use rust_logfmt_logger::prelude::*;
/// # let logger = Logger::builder().sink(std::io::sink()).build();
/// use rust_logfmt_logger::debug;
/// logger.set_min_level(Level::DEBUG);
/// let m = debug!(logger, &Context::new(), "Counter value: {}", 10);
/// assert_eq!(m.level, Level::DEBUG);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $ctx:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::DEBUG, $ctx, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use rust_logfmt_logger::prelude::*;
/// # let logger = Logger::builder().sink(std::io::sink()).build();
/// use rust_logfmt_logger::info;
/// info!(logger, &Context::new(), "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $ctx:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::INFO, $ctx, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use rust_logfmt_logger::prelude::*;
/// # let logger = Logger::builder().sink(std::io::sink()).build();
/// use rust_logfmt_logger::warn;
/// warn!(logger, &Context::new(), "Low disk space"; with_value("free_mb", 12));
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $ctx:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::WARNING, $ctx, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use rust_logfmt_logger::prelude::*;
/// # let logger = Logger::builder().sink(std::io::sink()).build();
/// use rust_logfmt_logger::error;
/// let err = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
/// error!(logger, &Context::new(), "Failed to persist"; with_error(err));
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $ctx:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::ERROR, $ctx, $($arg)+)
    };
}
