// src/application/ports/mod.rs
pub mod comment;
pub mod logger;
pub mod notification;
pub mod time;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type ClockPort = dyn time::Clock;
pub type LoggerPort = dyn logger::Logger;
pub type NotificationPort = dyn notification::NotificationService;
