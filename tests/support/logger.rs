// tests/support/logger.rs
use newsroom::application::ports::logger::Logger;
use std::sync::{Arc, Mutex};

/// Logger that keeps every line so tests can assert on the service log output.
#[derive(Clone, Default)]
pub struct CapturingLogger {
    pub lines: Arc<Mutex<Vec<String>>>,
}

impl CapturingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_lines(&self) -> Vec<String> {
        self.lines.lock().expect("mutex poisoned").clone()
    }
}

impl Logger for CapturingLogger {
    fn log(&self, message: &str) {
        self.lines.lock().expect("mutex poisoned").push(message.to_string());
    }
}
