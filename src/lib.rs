//! # Rust logfmt Logger
//!
//! Context-aware structured logging. Messages are constant texts; everything
//! variable travels as named properties, either attached to the call or
//! inherited from an immutable [`Context`] passed down the call chain. Each
//! message is rendered as one [logfmt](https://brandur.org/logfmt) line:
//!
//! ```text
//! 2009-02-13T23:31:30.987654+0000 error msg="cannot connect" error="connection refused" port=8080 request_id=r-17
//! ```
//!
//! ## Features
//!
//! - **Persistent context**: child contexts share their parent's properties
//!   and can be passed freely between threads
//! - **Message options**: errors, properties, codes and statuses compose at
//!   the call site
//! - **Handlers**: every dispatched message is also handed to pluggable
//!   consumers, each isolated from the others' failures
//! - **Thread safe**: one lock per logger keeps lines whole and ordered
//!
//! ## Example
//!
//! ```
//! use rust_logfmt_logger::prelude::*;
//!
//! let logger = Logger::builder()
//!     .min_level(Level::DEBUG)
//!     .sink(std::io::sink())
//!     .build();
//!
//! let ctx = Context::new().with_property("request_id", "r-17");
//! let err = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
//! let m = logger.error(&ctx, "cannot connect", [with_error(err), with_value("port", 8080)]);
//!
//! assert!(m
//!     .logfmt()
//!     .ends_with(r#"error msg="cannot connect" error="connection refused" port=8080 request_id=r-17"#));
//! ```

pub mod core;
pub mod handlers;
pub mod logfmt;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        with_code, with_error, with_status, with_value, Context, Handler, Level, LogWriter,
        Logger, LoggerBuilder, LoggerConfig, LoggerError, Message, MessageOption, OutputFlags,
        Property, Result,
    };
    pub use crate::handlers::MemoryHandler;
    pub use crate::logfmt::Value;
}

pub use crate::core::global::{
    add_handler, debug, default_logger, error, error_with, info, new_writer, set_flags,
    set_min_level, set_sink, warn,
};
pub use crate::core::{
    with_code, with_error, with_status, with_value, BoxError, Context, Handler, Level, LogWriter,
    Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, Message, MessageOption,
    OutputFlags, Property, Result,
};
#[cfg(feature = "json")]
pub use crate::handlers::JsonHandler;
pub use crate::handlers::MemoryHandler;
pub use crate::logfmt::{Buffer, Value};
