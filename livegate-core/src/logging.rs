use std::sync::Arc;

use tracing::Level;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan, writer::BoxMakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

use crate::config::LoggingConfig;

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Initialize structured logging
///
/// `json` for production, `pretty` for development. Output goes to
/// `file_path` when set, otherwise to stdout. `RUST_LOG` wins over the
/// configured level.
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<()> {
    let log_level = parse_log_level(&config.level)?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_string()));

    let writer = log_writer(config.file_path.as_deref())?;

    tracing_subscriber::registry()
        .with(fmt_layer(&config.format, writer))
        .with(env_filter)
        .try_init()?;

    Ok(())
}

/// Append to the log file if one is configured, else stdout
fn log_writer(file_path: Option<&str>) -> std::io::Result<BoxMakeWriter> {
    let Some(path) = file_path else {
        return Ok(BoxMakeWriter::new(std::io::stdout));
    };

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    Ok(BoxMakeWriter::new(Arc::new(file)))
}

fn fmt_layer(format: &str, writer: BoxMakeWriter) -> BoxedLayer {
    let base = fmt::layer()
        .with_writer(writer)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(true)
        .with_line_number(true);

    if format == "json" {
        base.json()
            .with_current_span(true)
            .with_span_list(true)
            .with_file(true)
            .boxed()
    } else {
        base.pretty().with_file(false).boxed()
    }
}

/// Parse log level string to tracing Level
pub(crate) fn parse_log_level(level: &str) -> anyhow::Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(anyhow::anyhow!("Invalid log level: {level}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert!(parse_log_level("trace").is_ok());
        assert!(parse_log_level("debug").is_ok());
        assert!(parse_log_level("info").is_ok());
        assert!(parse_log_level("WARN").is_ok());
        assert!(parse_log_level("error").is_ok());
        assert!(parse_log_level("invalid").is_err());
    }

    #[test]
    fn test_init_logging_rejects_invalid_level() {
        let config = LoggingConfig {
            level: "chatty".to_string(),
            ..LoggingConfig::default()
        };
        assert!(init_logging(&config).is_err());
    }

    #[test]
    fn test_log_writer_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("livegate.log");

        log_writer(path.to_str()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_log_writer_rejects_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("livegate.log");

        assert!(log_writer(path.to_str()).is_err());
    }
}
