//! `io::Write` adapter that turns written lines into log messages

use super::{context::Context, level::Level, logger::Logger};
use std::io::{self, Write};

/// Substrings that promote a written line to error level, matched case-insensitively
const ERROR_MARKERS: [&str; 3] = ["error", "panic", "fatal"];

/// Logs every buffer written to it as one message through a [`Logger`].
///
/// Only the first line of each write is kept, without its line ending, and
/// invalid UTF-8 is replaced. The line is logged at error level if it
/// mentions an error, a panic or a fatal condition, and at info level
/// otherwise. Writes always report the whole buffer as consumed.
///
/// `write!` and `writeln!` may split formatted output over several writes,
/// each logged separately; format the line first and write it once.
///
/// Useful for routing the output of components that only know how to write
/// text into structured logs:
///
/// ```
/// use std::io::Write;
/// use rust_logfmt_logger::{Context, Level, Logger, MemoryHandler};
///
/// let handler = MemoryHandler::new();
/// let logger = Logger::builder().sink(std::io::sink()).handler(handler.clone()).build();
///
/// let mut w = logger.new_writer(&Context::new().with_property("component", "http"));
/// w.write_all(b"listening on :8080\n").unwrap();
/// w.write_all(b"FATAL: accept failed\n").unwrap();
///
/// let messages = handler.messages();
/// assert_eq!(messages[0].level, Level::INFO);
/// assert_eq!(messages[0].text, "listening on :8080");
/// assert_eq!(messages[1].level, Level::ERROR);
/// ```
#[derive(Debug)]
pub struct LogWriter<'a> {
    logger: &'a Logger,
    context: Context,
}

impl<'a> LogWriter<'a> {
    pub fn new(logger: &'a Logger, context: Context) -> Self {
        Self { logger, context }
    }

    pub fn context(&self) -> &Context {
        &self.context
    }
}

impl Write for LogWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text = String::from_utf8_lossy(first_line(buf));
        let level = classify(&text);
        self.logger.log(level, &self.context, text.into_owned(), []);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn first_line(buf: &[u8]) -> &[u8] {
    let line = match buf.iter().position(|&b| b == b'\n') {
        Some(end) => &buf[..end],
        None => buf,
    };
    line.strip_suffix(b"\r").unwrap_or(line)
}

fn classify(line: &str) -> Level {
    let lower = line.to_lowercase();
    if ERROR_MARKERS.iter().any(|marker| lower.contains(marker)) {
        Level::ERROR
    } else {
        Level::INFO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::MemoryHandler;

    fn setup() -> (Logger, MemoryHandler) {
        let handler = MemoryHandler::new();
        let logger = Logger::builder()
            .sink(io::sink())
            .handler(handler.clone())
            .build();
        (logger, handler)
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify("server started"), Level::INFO);
        assert_eq!(classify("Error: disk full"), Level::ERROR);
        assert_eq!(classify("goroutine PANIC"), Level::ERROR);
        assert_eq!(classify("fatal signal"), Level::ERROR);
        assert_eq!(classify("ErRoRs everywhere"), Level::ERROR);
        assert_eq!(classify(""), Level::INFO);
    }

    #[test]
    fn test_first_line() {
        assert_eq!(first_line(b"one\ntwo\n"), b"one");
        assert_eq!(first_line(b"crlf\r\n"), b"crlf");
        assert_eq!(first_line(b"no newline"), b"no newline");
        assert_eq!(first_line(b"\n"), b"");
    }

    #[test]
    fn test_write_logs_message() {
        let (logger, handler) = setup();
        let ctx = Context::new().with_property("source", "stdlib");
        let mut w = logger.new_writer(&ctx);

        let input = b"connection error\nsecond line ignored\n";
        let n = w.write(input).unwrap();
        assert_eq!(n, input.len());
        w.flush().unwrap();

        let messages = handler.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].level, Level::ERROR);
        assert_eq!(messages[0].text, "connection error");
        assert_eq!(messages[0].context[0].key, "source");
    }

    #[test]
    fn test_write_invalid_utf8() {
        let (logger, handler) = setup();
        let mut w = logger.new_writer(&Context::new());

        w.write_all(b"bad \xff byte").unwrap();
        assert_eq!(handler.messages()[0].text, "bad \u{fffd} byte");
    }

    #[test]
    fn test_writer_respects_min_level() {
        let (logger, handler) = setup();
        logger.set_min_level(Level::ERROR);
        let mut w = logger.new_writer(&Context::new());

        w.write_all(b"routine\n").unwrap();
        w.write_all(b"panic: boom\n").unwrap();

        let messages = handler.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].text, "panic: boom");
    }
}
