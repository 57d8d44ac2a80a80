// src/application/ports/logger.rs

/// Line-oriented logger handed to services as an optional collaborator.
/// Only `log` is required; `warn` and `error` fall back to doing nothing.
pub trait Logger: Send + Sync {
    fn log(&self, message: &str);

    fn warn(&self, _message: &str) {}

    fn error(&self, _message: &str) {}
}
