use std::sync::Once;
use std::time::Instant;

use log::LevelFilter;
use tracing::level_filters::LevelFilter as TracingLevel;

use crate::shared::errors::AppError;

static LOGGER: Once = Once::new();

/// Install the `log` and `tracing` backends at `level`.
/// Only the first call takes effect.
pub fn init_logger(level: LevelFilter) {
    LOGGER.call_once(|| {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(level)
            .filter_module("tierboard_lib", level)
            // Driver and runtime chatter only from warn up
            .filter_module("diesel", LevelFilter::Warn)
            .filter_module("tokio", LevelFilter::Warn)
            .format_timestamp_secs()
            .format_target(false)
            .try_init();

        // Repositories report through `tracing`
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing_level(level))
            .with_target(false)
            .try_init();

        log::info!("tierboard logging at {}", level);
    });
}

fn tracing_level(level: LevelFilter) -> TracingLevel {
    match level {
        LevelFilter::Off => TracingLevel::OFF,
        LevelFilter::Error => TracingLevel::ERROR,
        LevelFilter::Warn => TracingLevel::WARN,
        LevelFilter::Info => TracingLevel::INFO,
        LevelFilter::Debug => TracingLevel::DEBUG,
        LevelFilter::Trace => TracingLevel::TRACE,
    }
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        log::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        log::debug!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        log::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        log::error!($($arg)*)
    };
}

/// Shared log lines for the service and storage layers
pub struct LogContext;

impl LogContext {
    /// Statement finished against `table`, touching `rows` rows.
    pub fn db_operation(operation: &str, table: &str, rows: usize) {
        crate::log_debug!("{} on {}: {} row(s)", operation, table, rows);
    }

    /// A use case returned `err` to its caller. Store failures go out at
    /// error level, rejected commands at warn.
    pub fn domain_failure(operation: &str, err: &AppError) {
        match err {
            AppError::PersistenceError(_) => crate::log_error!("{} failed: {}", operation, err),
            _ => crate::log_warn!("{} rejected: {}", operation, err),
        }
    }

    pub fn error_with_context(error: &dyn std::error::Error, context: &str) {
        crate::log_error!("{}: {}", context, error);
    }

    /// Annotated timings are surfaced at info, plain ones stay at debug.
    pub fn performance_metric(operation: &str, duration_ms: u64, note: Option<&str>) {
        match note {
            Some(note) => crate::log_info!("{} took {}ms ({})", operation, duration_ms, note),
            None => crate::log_debug!("{} took {}ms", operation, duration_ms),
        }
    }
}

/// Wall-clock timer for one storage round trip
pub struct TimedOperation {
    operation: &'static str,
    started: Instant,
}

impl TimedOperation {
    pub fn new(operation: &'static str) -> Self {
        Self {
            operation,
            started: Instant::now(),
        }
    }

    fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    /// Log the elapsed time at debug and return it in milliseconds.
    pub fn finish(self) -> u64 {
        let elapsed = self.elapsed_ms();
        LogContext::performance_metric(self.operation, elapsed, None);
        elapsed
    }

    pub fn finish_with_info(self, info: &str) -> u64 {
        let elapsed = self.elapsed_ms();
        LogContext::performance_metric(self.operation, elapsed, Some(info));
        elapsed
    }
}
