//! Integration tests for the logfmt logger
//!
//! These tests verify:
//! - End-to-end rendering to a file sink
//! - Log injection prevention
//! - Level filtering and handler delivery
//! - Handler failure isolation
//! - The writer adapter
//! - JSON handler output

use rust_logfmt_logger::handlers::{JsonHandler, MemoryHandler};
use rust_logfmt_logger::{
    with_code, with_error, with_status, with_value, Context, Handler, Level, Logger,
    LoggerConfig, LoggerError, Message, OutputFlags, Result,
};
use std::fs::{self, File};
use std::io::Write;
use tempfile::TempDir;

/// Strip the timestamp, which varies between runs
fn without_timestamp(line: &str) -> &str {
    line.split_once(' ').map(|(_, rest)| rest).unwrap_or(line)
}

fn file_logger(temp_dir: &TempDir, name: &str) -> (Logger, std::path::PathBuf) {
    let path = temp_dir.path().join(name);
    let file = File::create(&path).expect("Failed to create log file");
    let logger = Logger::builder()
        .sink(file)
        .flags(OutputFlags::new().line_feed(true))
        .build();
    (logger, path)
}

#[test]
fn test_end_to_end_file_sink() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let (logger, path) = file_logger(&temp_dir, "app.log");

    let ctx = Context::new().with_property("env", "prod");
    logger.info(&ctx, "started", []);
    let request = ctx.with_properties([("request_id", "r-1"), ("user", "u 2")]);
    logger.warn(&request, "slow request", [with_value("took_ms", 1500)]);
    logger.flush().expect("Failed to flush");

    let content = fs::read_to_string(&path).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().map(without_timestamp).collect();
    assert_eq!(
        lines,
        [
            "info msg=started env=prod",
            r#"warn msg="slow request" took_ms=1500 request_id=r-1 user="u 2" env=prod"#,
        ]
    );
}

#[test]
fn test_log_injection_prevention() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let (logger, path) = file_logger(&temp_dir, "injection_test.log");

    let malicious = "User login\nerror msg=\"Fake error injected\"\r\ninfo msg=continuation";
    logger.info(&Context::new(), malicious, [with_value("input", malicious)]);
    logger.flush().expect("Failed to flush");

    let content = fs::read_to_string(&path).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 1, "Log should be a single line, not multiple");
    assert!(lines[0].contains(r#"msg="User login\nerror msg=\"Fake error injected\"\ninfo msg=continuation""#));
}

#[test]
fn test_level_filtering_with_handler() {
    let handler = MemoryHandler::new();
    let logger = Logger::builder()
        .sink(std::io::sink())
        .handler(handler.clone())
        .build();
    let ctx = Context::new();

    for level in [Level::DEBUG, Level::INFO, Level::WARNING, Level::ERROR] {
        logger.log(level, &ctx, "probe", []);
    }
    assert_eq!(handler.len(), 3);

    logger.set_min_level(Level::DEBUG);
    for level in [Level::DEBUG, Level::INFO, Level::WARNING, Level::ERROR] {
        logger.log(level, &ctx, "probe", []);
    }
    assert_eq!(handler.len(), 7);

    let metrics = logger.metrics();
    assert_eq!(metrics.dispatched_count(), 7);
    assert_eq!(metrics.suppressed_count(), 1);
}

#[test]
fn test_config_driven_logger() {
    let config: LoggerConfig =
        serde_json::from_str(r#"{"min_level":"WARN","utc":true,"line_feed":true}"#)
            .expect("Failed to parse config");

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.log");
    let logger = Logger::builder()
        .config(&config)
        .sink(File::create(&path).expect("Failed to create log file"))
        .build();

    logger.info(&Context::new(), "hidden", []);
    logger.error(&Context::new(), "shown", []);
    logger.flush().expect("Failed to flush");

    let content = fs::read_to_string(&path).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with("+0000 error msg=shown"));
}

struct RejectingHandler;

impl Handler for RejectingHandler {
    fn handle(&self, _messages: &[Message]) -> Result<()> {
        Err(LoggerError::handler("rejecting", "downstream unavailable"))
    }

    fn name(&self) -> &str {
        "rejecting"
    }
}

struct PanickingHandler;

impl Handler for PanickingHandler {
    fn handle(&self, messages: &[Message]) -> Result<()> {
        panic!("cannot handle {}", messages[0].text);
    }
}

#[test]
fn test_handler_failures_do_not_reach_caller() {
    let survivor = MemoryHandler::new();
    let logger = Logger::builder()
        .sink(std::io::sink())
        .handler(RejectingHandler)
        .handler(PanickingHandler)
        .handler(survivor.clone())
        .build();

    for i in 0..3 {
        let m = logger.error(&Context::new(), "boom", [with_value("attempt", i)]);
        assert_eq!(m.text, "boom");
    }

    assert_eq!(survivor.len(), 3);
    assert_eq!(logger.metrics().handler_failure_count(), 6);
}

#[test]
fn test_message_returned_as_error() {
    fn load(logger: &Logger, ctx: &Context) -> std::result::Result<(), Message> {
        let cause = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        Err(logger.error(ctx, "cannot load config", [with_error(cause), with_code("CFG"), with_status(500)]))
    }

    let logger = Logger::builder().sink(std::io::sink()).build();
    let err = load(&logger, &Context::new().with_property("path", "/etc/app.toml")).unwrap_err();

    assert_eq!(err.to_string(), "cannot load config");
    assert_eq!(std::error::Error::source(&err).unwrap().to_string(), "no such file");
    assert_eq!(
        without_timestamp(&err.logfmt()),
        r#"error msg="cannot load config" error="no such file" path=/etc/app.toml code=CFG status=500"#
    );
}

#[test]
fn test_writer_adapter() {
    let handler = MemoryHandler::new();
    let logger = Logger::builder()
        .sink(std::io::sink())
        .handler(handler.clone())
        .build();

    {
        let mut writer = logger.new_writer(&Context::new().with_property("component", "legacy"));
        // One write per line: formatted writes may be split into several calls
        let line = format!("accepted connection from {}\n", "10.0.0.1");
        writer.write_all(line.as_bytes()).unwrap();
        writer.write_all(b"panic: index out of range\n").unwrap();
    }

    let messages = handler.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].level, Level::INFO);
    assert_eq!(messages[0].text, "accepted connection from 10.0.0.1");
    assert_eq!(messages[1].level, Level::ERROR);
    assert!(messages.iter().all(|m| m.context[0].key == "component"));
}

#[test]
fn test_json_handler_alongside_sink() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let (logger, log_path) = file_logger(&temp_dir, "app.log");
    let json_path = temp_dir.path().join("app.jsonl");
    logger.add_handler(JsonHandler::create(&json_path).expect("Failed to create handler"));

    let ctx = Context::new().with_property("user_id", 123);
    logger.info(&ctx, "User logged in", [with_value("action", "login")]);
    logger.flush().expect("Failed to flush");

    let logfmt = fs::read_to_string(&log_path).expect("Failed to read log file");
    assert!(logfmt.contains("info msg=\"User logged in\" action=login user_id=123"));

    let json = fs::read_to_string(&json_path).expect("Failed to read json file");
    let parsed: serde_json::Value = serde_json::from_str(json.trim()).expect("Invalid JSON");
    assert_eq!(parsed["msg"], "User logged in");
    assert_eq!(parsed["context"][0]["key"], "user_id");
    assert_eq!(parsed["context"][0]["value"], 123);
}
