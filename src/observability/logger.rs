//! Logging configuration and subscriber installation.

use tracing_subscriber::{fmt, EnvFilter};

/// Output format of log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    /// Unknown names fall back to `Pretty`
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set
    pub level: String,
    pub format: LogFormat,
}

impl LoggingConfig {
    /// Install the global tracing subscriber.
    ///
    /// `RUST_LOG` wins over the configured level. A second call is a no-op.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        let installed = match self.format {
            LogFormat::Json => fmt().json().with_env_filter(filter).try_init(),
            LogFormat::Pretty => fmt().with_env_filter(filter).try_init(),
        };

        if installed.is_err() {
            tracing::debug!("tracing subscriber already installed");
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
        }
    }
}
