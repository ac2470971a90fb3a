//! Process-wide default logger
//!
//! One [`Logger`] is created lazily on first use, writing to standard output
//! at info level. These functions forward to it, so libraries can log without
//! threading a logger through every call. Its configuration can be changed at
//! any time from any thread.

use super::{
    context::Context,
    handler::Handler,
    level::Level,
    logger::Logger,
    message::{Message, OutputFlags},
    option::{BoxError, MessageOption},
    writer::LogWriter,
};
use std::io::Write;
use std::sync::LazyLock;

static DEFAULT_LOGGER: LazyLock<Logger> = LazyLock::new(Logger::new);

/// The process-wide logger
pub fn default_logger() -> &'static Logger {
    &DEFAULT_LOGGER
}

pub fn debug(
    ctx: &Context,
    text: impl Into<String>,
    options: impl IntoIterator<Item = MessageOption>,
) -> Message {
    DEFAULT_LOGGER.debug(ctx, text, options)
}

pub fn info(
    ctx: &Context,
    text: impl Into<String>,
    options: impl IntoIterator<Item = MessageOption>,
) -> Message {
    DEFAULT_LOGGER.info(ctx, text, options)
}

pub fn warn(
    ctx: &Context,
    text: impl Into<String>,
    options: impl IntoIterator<Item = MessageOption>,
) -> Message {
    DEFAULT_LOGGER.warn(ctx, text, options)
}

pub fn error(
    ctx: &Context,
    text: impl Into<String>,
    options: impl IntoIterator<Item = MessageOption>,
) -> Message {
    DEFAULT_LOGGER.error(ctx, text, options)
}

pub fn error_with(
    ctx: &Context,
    err: impl Into<BoxError>,
    text: impl Into<String>,
    options: impl IntoIterator<Item = MessageOption>,
) -> Message {
    DEFAULT_LOGGER.error_with(ctx, err, text, options)
}

pub fn set_min_level(level: Level) {
    DEFAULT_LOGGER.set_min_level(level);
}

pub fn set_flags(flags: OutputFlags) {
    DEFAULT_LOGGER.set_flags(flags);
}

pub fn set_sink<W: Write + Send + 'static>(sink: W) {
    DEFAULT_LOGGER.set_sink(sink);
}

pub fn add_handler<H: Handler + 'static>(handler: H) {
    DEFAULT_LOGGER.add_handler(handler);
}

pub fn new_writer(ctx: &Context) -> LogWriter<'static> {
    DEFAULT_LOGGER.new_writer(ctx)
}
