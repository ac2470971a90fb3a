//! Main logger implementation

use super::{
    config::LoggerConfig,
    context::Context,
    error::Result,
    handler::Handler,
    level::Level,
    message::{Message, OutputFlags},
    metrics::LoggerMetrics,
    option::{with_error, BoxError, MessageOption},
    writer::LogWriter,
};
use crate::logfmt::Buffer;
use parking_lot::Mutex;
use std::any::Any;
use std::fmt;
use std::io::{self, Write};
use std::panic::{self, AssertUnwindSafe};

/// Failures are reported on stderr the first time and then once per this many
const ALERT_INTERVAL: u64 = 1000;

type Sink = Box<dyn Write + Send>;

struct LoggerState {
    sink: Sink,
    handlers: Vec<Box<dyn Handler>>,
    min_level: Level,
    flags: OutputFlags,
}

/// Filters messages by level, writes them to a sink as logfmt lines and
/// hands them to every registered handler.
///
/// Every dispatch and every configuration change runs under one lock, so
/// lines reach the sink in the order their dispatches take the lock, and
/// handlers see a message only after it was written to the sink. Work done
/// by the sink and handlers is done under that lock: a slow sink slows
/// every thread that logs through this logger.
///
/// Logging calls never fail. Each returns the [`Message`] it built, whether
/// or not it passed the level threshold, so it can double as an error value.
///
/// # Example
///
/// ```
/// use rust_logfmt_logger::{with_value, Context, Level, Logger, OutputFlags};
///
/// let logger = Logger::builder()
///     .min_level(Level::INFO)
///     .flags(OutputFlags::new().line_feed(true))
///     .sink(std::io::sink())
///     .build();
///
/// let ctx = Context::new().with_property("env", "prod");
/// let m = logger.info(&ctx, "started", [with_value("port", 8080)]);
/// assert!(m.logfmt().ends_with("info msg=started port=8080 env=prod"));
///
/// // Below the threshold: nothing is written, the message is still returned
/// let m = logger.debug(&ctx, "started", []);
/// assert_eq!(m.text, "started");
/// ```
pub struct Logger {
    state: Mutex<LoggerState>,
    metrics: LoggerMetrics,
}

impl Logger {
    /// A logger writing to standard output that skips debug messages
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn debug(
        &self,
        ctx: &Context,
        text: impl Into<String>,
        options: impl IntoIterator<Item = MessageOption>,
    ) -> Message {
        self.log(Level::DEBUG, ctx, text, options)
    }

    pub fn info(
        &self,
        ctx: &Context,
        text: impl Into<String>,
        options: impl IntoIterator<Item = MessageOption>,
    ) -> Message {
        self.log(Level::INFO, ctx, text, options)
    }

    pub fn warn(
        &self,
        ctx: &Context,
        text: impl Into<String>,
        options: impl IntoIterator<Item = MessageOption>,
    ) -> Message {
        self.log(Level::WARNING, ctx, text, options)
    }

    pub fn error(
        &self,
        ctx: &Context,
        text: impl Into<String>,
        options: impl IntoIterator<Item = MessageOption>,
    ) -> Message {
        self.log(Level::ERROR, ctx, text, options)
    }

    /// Log an error-level message caused by `err`.
    ///
    /// Same as [`Logger::error`] with [`with_error`] applied after `options`.
    pub fn error_with(
        &self,
        ctx: &Context,
        err: impl Into<BoxError>,
        text: impl Into<String>,
        options: impl IntoIterator<Item = MessageOption>,
    ) -> Message {
        let mut message = Message::from_context(ctx, Level::ERROR, text);
        message.apply_options(options);
        with_error(err).apply(&mut message);
        self.dispatch(&message);
        message
    }

    /// Build a message at `level` from `ctx` and `options`, then dispatch it
    pub fn log(
        &self,
        level: Level,
        ctx: &Context,
        text: impl Into<String>,
        options: impl IntoIterator<Item = MessageOption>,
    ) -> Message {
        let mut message = Message::from_context(ctx, level, text);
        message.apply_options(options);
        self.dispatch(&message);
        message
    }

    /// Write `message` to the sink and pass it to every handler, unless it
    /// is below the minimum level.
    pub fn dispatch(&self, message: &Message) {
        let mut state = self.state.lock();

        if message.level < state.min_level {
            self.metrics.record_suppressed();
            return;
        }
        self.metrics.record_dispatched();

        let mut buf = Buffer::new();
        message.write_line(&mut buf, state.flags);
        let sink = &mut state.sink;
        match panic::catch_unwind(AssertUnwindSafe(|| buf.write_to(sink))) {
            Ok(Ok(_)) => {}
            Ok(Err(e)) => self.sink_failed(&e.to_string()),
            Err(panic_info) => self.sink_failed(&panic_message(&*panic_info)),
        }
        drop(buf);

        let batch = std::slice::from_ref(message);
        for (idx, handler) in state.handlers.iter().enumerate() {
            match panic::catch_unwind(AssertUnwindSafe(|| handler.handle(batch))) {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    let previous = self.metrics.record_handler_failure();
                    if should_alert(previous) {
                        eprintln!(
                            "[LOGGER ERROR] Handler #{} ({}) failed: {}",
                            idx,
                            handler.name(),
                            e
                        );
                    }
                }
                Err(panic_info) => {
                    let previous = self.metrics.record_handler_failure();
                    if should_alert(previous) {
                        eprintln!(
                            "[LOGGER CRITICAL] Handler #{} ({}) panicked: {}. \
                             Other handlers continue to function.",
                            idx,
                            handler.name(),
                            panic_message(&*panic_info)
                        );
                    }
                }
            }
        }
    }

    fn sink_failed(&self, reason: &str) {
        let previous = self.metrics.record_sink_failure();
        if should_alert(previous) {
            eprintln!(
                "[LOGGER ERROR] Sink write failed ({} failures so far): {}",
                previous + 1,
                reason
            );
        }
    }

    pub fn min_level(&self) -> Level {
        self.state.lock().min_level
    }

    pub fn set_min_level(&self, level: Level) {
        self.state.lock().min_level = level;
    }

    /// True if a message at `level` would currently be dispatched
    pub fn is_enabled(&self, level: Level) -> bool {
        level >= self.min_level()
    }

    pub fn flags(&self) -> OutputFlags {
        self.state.lock().flags
    }

    pub fn set_flags(&self, flags: OutputFlags) {
        self.state.lock().flags = flags;
    }

    /// Replace the sink. The previous sink is flushed and dropped.
    pub fn set_sink<W: Write + Send + 'static>(&self, sink: W) {
        let mut state = self.state.lock();
        let _ = state.sink.flush();
        state.sink = Box::new(sink);
    }

    /// Register a handler; handlers run in registration order
    pub fn add_handler<H: Handler + 'static>(&self, handler: H) {
        self.state.lock().handlers.push(Box::new(handler));
    }

    /// Adapter that logs each line written to it through this logger
    pub fn new_writer(&self, ctx: &Context) -> LogWriter<'_> {
        LogWriter::new(self, ctx.clone())
    }

    /// Flush the sink and every handler
    pub fn flush(&self) -> Result<()> {
        let mut state = self.state.lock();
        state.sink.flush()?;
        for handler in state.handlers.iter() {
            handler.flush()?;
        }
        Ok(())
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }
}

fn should_alert(previous_failures: u64) -> bool {
    previous_failures == 0 || (previous_failures + 1) % ALERT_INTERVAL == 0
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("Logger")
            .field("min_level", &state.min_level)
            .field("flags", &state.flags)
            .field("handlers", &state.handlers.len())
            .field("metrics", &self.metrics)
            .finish()
    }
}

/// Builder for configuring a [`Logger`]
///
/// # Example
///
/// ```
/// use rust_logfmt_logger::{Level, Logger, MemoryHandler};
///
/// let handler = MemoryHandler::new();
/// let logger = Logger::builder()
///     .min_level(Level::DEBUG)
///     .sink(std::io::sink())
///     .handler(handler.clone())
///     .build();
///
/// assert_eq!(logger.min_level(), Level::DEBUG);
/// ```
pub struct LoggerBuilder {
    min_level: Level,
    sink: Option<Sink>,
    handlers: Vec<Box<dyn Handler>>,
    flags: OutputFlags,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            min_level: Level::INFO,
            sink: None,
            handlers: Vec::new(),
            flags: OutputFlags::default(),
        }
    }

    #[must_use]
    pub fn min_level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }

    /// Destination for rendered lines; standard output if never set
    #[must_use]
    pub fn sink<W: Write + Send + 'static>(mut self, sink: W) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    #[must_use]
    pub fn handler<H: Handler + 'static>(mut self, handler: H) -> Self {
        self.handlers.push(Box::new(handler));
        self
    }

    #[must_use]
    pub fn flags(mut self, flags: OutputFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Apply level and output settings from a loaded configuration
    #[must_use]
    pub fn config(mut self, config: &LoggerConfig) -> Self {
        self.min_level = config.min_level;
        self.flags = config.flags();
        self
    }

    pub fn build(self) -> Logger {
        let sink = self.sink.unwrap_or_else(|| Box::new(io::stdout()));
        Logger {
            state: Mutex::new(LoggerState {
                sink,
                handlers: self.handlers,
                min_level: self.min_level,
                flags: self.flags,
            }),
            metrics: LoggerMetrics::new(),
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
