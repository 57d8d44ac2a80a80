use crate::application::ports::logger::Logger;

/// Forwards service log lines to `tracing` under the `newsroom::service` target.
#[derive(Default, Clone)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, message: &str) {
        tracing::info!(target: "newsroom::service", "{message}");
    }

    fn warn(&self, message: &str) {
        tracing::warn!(target: "newsroom::service", "{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "newsroom::service", "{message}");
    }
}
