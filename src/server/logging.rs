//! Logging initialization and configuration.

use std::fs::OpenOptions;
use std::io::{self, IsTerminal};
use std::sync::Arc;

use tracing_subscriber::{
    EnvFilter,
    fmt::{self, writer::BoxMakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use super::config::{LogFormat, LoggingConfig};

/// Initialize the tracing subscriber based on configuration.
pub fn init(config: &LoggingConfig) -> Result<(), LoggingError> {
    let filter = EnvFilter::try_new(&config.level)
        .map_err(|e| LoggingError::InvalidFilter(e.to_string()))?;

    let (writer, ansi) = match config.output.as_str() {
        "stdout" => (BoxMakeWriter::new(io::stdout), io::stdout().is_terminal()),
        "stderr" => (BoxMakeWriter::new(io::stderr), io::stderr().is_terminal()),
        path => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| LoggingError::FileOpen(path.to_string(), e))?;
            (BoxMakeWriter::new(Arc::new(file)), false)
        }
    };

    match config.format {
        LogFormat::Text => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(writer).with_ansi(ansi))
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(writer))
            .init(),
    }

    Ok(())
}

/// Errors that can occur during logging initialization.
#[derive(Debug)]
pub enum LoggingError {
    /// Invalid log filter string.
    InvalidFilter(String),
    /// Failed to open log file.
    FileOpen(String, io::Error),
}

impl std::fmt::Display for LoggingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoggingError::InvalidFilter(msg) => write!(f, "Invalid log filter: {}", msg),
            LoggingError::FileOpen(path, e) => {
                write!(f, "Failed to open log file '{}': {}", path, e)
            }
        }
    }
}

impl std::error::Error for LoggingError {}
