//! Logging setup
//!
//! - human-readable lines on stdout (colored when stdout is a terminal)
//! - optional one-line JSON file log, rotated daily, when a log directory is
//!   configured
//! - `log` records (infrastructure code, reqwest) are forwarded to `tracing`
//!
//! `RUST_LOG` overrides the configured level for both outputs.

use log::LevelFilter;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_log::LogTracer;
use tracing_subscriber::fmt::{format::Writer, FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Layer, Registry};

use crate::config::LogLevel;

const LOG_FILE_PREFIX: &str = "glados-checkin.log";
const APP_TARGETS: &[&str] = &["glados_app", "glados_infrastructure", "glados_domain"];

static INITIALIZED: OnceLock<()> = OnceLock::new();
static FILE_WRITER_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Logging options resolved from settings
#[derive(Debug, Clone, Default)]
pub struct LoggingOptions {
    pub level: LogLevel,
    pub log_dir: Option<PathBuf>,
}

/// Install the global subscriber. Calling it again is a no-op.
pub fn init_logger(options: &LoggingOptions) -> anyhow::Result<()> {
    if INITIALIZED.get().is_some() {
        return Ok(());
    }

    let file_layer = match &options.log_dir {
        Some(log_dir) => {
            std::fs::create_dir_all(log_dir)?;
            let file_appender = rolling::daily(log_dir, LOG_FILE_PREFIX);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let _ = FILE_WRITER_GUARD.set(guard);

            Some(
                fmt::layer()
                    .with_writer(non_blocking)
                    .event_format(JsonLineFormatter::new())
                    .with_filter(build_filter(options.level)),
            )
        }
        None => None,
    };

    let stdout_layer = fmt::layer()
        .with_ansi(std::io::stdout().is_terminal())
        .event_format(ConsoleFormatter::new(std::io::stdout().is_terminal()))
        .with_filter(build_filter(options.level));

    let subscriber = Registry::default().with(stdout_layer).with(file_layer);

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    // `log` bridge goes in last; a failed init must leave it free
    let _ = LogTracer::builder()
        .with_max_level(LevelFilter::Trace)
        .init();

    let _ = INITIALIZED.set(());

    tracing::debug!(
        target: "glados_infrastructure::logging",
        level = %options.level,
        log_dir = ?options.log_dir,
        version = env!("CARGO_PKG_VERSION"),
        "Logger initialized"
    );

    Ok(())
}

/// `RUST_LOG` when set, otherwise the configured level for our crates and
/// warnings for dependencies
fn build_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive(level)))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

fn default_directive(level: LogLevel) -> String {
    let mut directive = String::from("warn");
    for target in APP_TARGETS {
        directive.push_str(&format!(",{}={}", target, level.as_str()));
    }
    directive
}

/// One-line JSON records for the file log
struct JsonLineFormatter {
    pid: u32,
}

impl JsonLineFormatter {
    fn new() -> Self {
        Self {
            pid: std::process::id(),
        }
    }
}

impl<S, N> FormatEvent<S, N> for JsonLineFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let metadata = event.metadata();

        let mut collected = EventFields::new();
        event.record(&mut collected);
        let message = collected
            .fields
            .remove("message")
            .unwrap_or(serde_json::Value::Null);

        let mut record = serde_json::Map::new();
        record.insert(
            "ts".into(),
            chrono::Local::now()
                .format("%Y-%m-%dT%H:%M:%S%.3f%:z")
                .to_string()
                .into(),
        );
        record.insert("level".into(), metadata.level().as_str().into());
        record.insert("target".into(), metadata.target().into());
        record.insert("pid".into(), self.pid.into());
        record.insert("msg".into(), message);
        if let Some(line) = metadata.line() {
            record.insert(
                "at".into(),
                format!("{}:{}", metadata.file().unwrap_or("?"), line).into(),
            );
        }
        if !collected.fields.is_empty() {
            record.insert("fields".into(), collected.fields.into());
        }

        writeln!(writer, "{}", serde_json::Value::Object(record))
    }
}

/// Format: `2026-10-16 08:00:01.123 [INFO] (glados_app::runner) key=value message`
struct ConsoleFormatter {
    ansi: bool,
}

impl ConsoleFormatter {
    fn new(ansi: bool) -> Self {
        Self { ansi }
    }

    fn level_label(&self, level: &Level) -> &'static str {
        if !self.ansi {
            return match *level {
                Level::ERROR => "ERROR",
                Level::WARN => "WARN",
                Level::INFO => "INFO",
                Level::DEBUG => "DEBUG",
                Level::TRACE => "TRACE",
            };
        }
        match *level {
            Level::ERROR => "\x1b[31mERROR\x1b[0m",
            Level::WARN => "\x1b[33mWARN\x1b[0m",
            Level::INFO => "\x1b[32mINFO\x1b[0m",
            Level::DEBUG => "\x1b[36mDEBUG\x1b[0m",
            Level::TRACE => "\x1b[35mTRACE\x1b[0m",
        }
    }
}

impl<S, N> FormatEvent<S, N> for ConsoleFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let metadata = event.metadata();
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");

        let mut collected = EventFields::new();
        event.record(&mut collected);

        let message = collected
            .fields
            .get("message")
            .and_then(|v| v.as_str())
            .unwrap_or("")
            .to_string();

        let field_parts: Vec<String> = collected
            .fields
            .iter()
            .filter(|(key, _)| key.as_str() != "message")
            .map(|(key, value)| match value.as_str() {
                Some(text) => format!("{}={}", key, text),
                None => format!("{}={}", key, value),
            })
            .collect();
        let fields_str = if field_parts.is_empty() {
            String::new()
        } else {
            format!("{} ", field_parts.join(" "))
        };

        writeln!(
            writer,
            "{} [{}] ({}) {}{}",
            timestamp,
            self.level_label(metadata.level()),
            metadata.target(),
            fields_str,
            message
        )
    }
}

/// Event fields keyed by name, `message` included
struct EventFields {
    fields: serde_json::Map<String, serde_json::Value>,
}

impl EventFields {
    fn new() -> Self {
        Self {
            fields: serde_json::Map::new(),
        }
    }

    fn put(&mut self, field: &Field, value: serde_json::Value) {
        self.fields.insert(field.name().to_string(), value);
    }
}

impl Visit for EventFields {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.put(field, value.into());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.put(field, value.into());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.put(field, value.into());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.put(field, value.into());
    }

    // floats, errors and `?value` fields land here
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.put(field, format!("{:?}", value).into());
    }
}
