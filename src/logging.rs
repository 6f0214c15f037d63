//! # Structured Logging Module
//!
//! Environment-aware `tracing` setup for the handlers plus a few structured
//! log helpers. The host's trace sink is write-only: nothing logged here ever
//! feeds back into control flow.

use crate::config::{HelpersConfig, LogFormat};
use chrono::Utc;
use std::sync::OnceLock;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize structured logging once per process.
///
/// `RUST_LOG` wins over the configured level when set.
pub fn init_structured_logging(config: &HelpersConfig) {
    LOGGER_INITIALIZED.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.log_level()));

        let layer = match config.logging.format {
            LogFormat::Pretty => fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_level(true)
                .with_ansi(true)
                .boxed(),
            LogFormat::Json => fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_level(true)
                .with_ansi(false)
                .json()
                .boxed(),
        };

        // The host may already have installed a global subscriber
        if tracing_subscriber::registry()
            .with(layer.with_filter(filter))
            .try_init()
            .is_err()
        {
            tracing::debug!("Global tracing subscriber already initialized - continuing with existing subscriber");
        }

        tracing::info!(
            environment = %config.environment,
            level = %config.log_level(),
            format = ?config.logging.format,
            "STRUCTURED LOGGING: Initialized"
        );
    });
}

/// Detect the deployment environment from the process environment
pub fn detect_environment() -> String {
    std::env::var("HELPERS_ENV")
        .or_else(|_| std::env::var("APP_ENV"))
        .unwrap_or_else(|_| "development".to_string())
}

/// Log a handler lifecycle event (started, completed, failed)
pub fn log_handler_operation(
    message_name: &str,
    correlation_id: &str,
    status: &str,
    details: Option<&str>,
) {
    tracing::info!(
        message_name = %message_name,
        correlation_id = %correlation_id,
        status = %status,
        details = details,
        timestamp = %Utc::now().to_rfc3339(),
        "HANDLER_OPERATION"
    );
}

/// Log a name or metadata lookup and its outcome
pub fn log_lookup(entity: &str, attribute: &str, value: &str, status: &str) {
    tracing::debug!(
        entity = %entity,
        attribute = %attribute,
        value = %value,
        status = %status,
        timestamp = %Utc::now().to_rfc3339(),
        "LOOKUP"
    );
}

/// Log error with full context
pub fn log_error(component: &str, operation: &str, error: &str, context: Option<&str>) {
    tracing::error!(
        component = %component,
        operation = %operation,
        error = %error,
        context = context,
        timestamp = %Utc::now().to_rfc3339(),
        "ERROR"
    );
}
