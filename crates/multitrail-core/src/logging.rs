//! Subscriber setup for hosts embedding the library
//!
//! The library itself only emits `tracing` events and never installs a
//! subscriber on its own.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LoggingConfig;

/// Environment variable read after `RUST_LOG`
pub const LOG_ENV: &str = "MULTITRAIL_LOG";

/// Log the time elapsed since `$start` at trace level, tagged with the
/// operation name and any extra `field = value` pairs.
///
/// ```rust,ignore
/// let start = Instant::now();
/// let graph = loader.load_str(text)?;
/// trace_time!(start, "load_graph", vertices = graph.vertex_count());
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr $(, $field:ident = $value:expr)* $(,)?) => {
        tracing::trace!(
            operation = $name,
            $($field = $value,)*
            elapsed = ?$start.elapsed()
        )
    };
}

/// Install the global subscriber.
///
/// An explicit `log_level` wins over `verbose`. Fails if a global subscriber
/// is already set.
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let level = log_level.unwrap_or(if verbose { "debug" } else { "warn" });

    let compact = (!log_json).then(|| {
        fmt::layer()
            .compact()
            .with_target(false)
            .with_writer(std::io::stderr)
            .with_ansi(false)
    });
    let json = log_json.then(|| {
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_span_events(fmt::format::FmtSpan::NEW | fmt::format::FmtSpan::CLOSE)
    });

    tracing_subscriber::registry()
        .with(env_filter(level))
        .with(compact)
        .with(json)
        .try_init()?;
    Ok(())
}

/// Install the global subscriber from the `[logging]` configuration section
pub fn init_from_config(config: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    init_tracing(false, config.level.as_deref(), config.json)
}

/// `RUST_LOG`, then [`LOG_ENV`], then `level`
fn env_filter(level: &str) -> EnvFilter {
    [EnvFilter::DEFAULT_ENV, LOG_ENV]
        .into_iter()
        .find_map(|var| EnvFilter::try_from_env(var).ok())
        .unwrap_or_else(|| EnvFilter::new(filter_directive(level)))
}

/// Scope a bare level to this crate; full directives pass through
fn filter_directive(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        format!("multitrail_core={}", level)
    }
}
