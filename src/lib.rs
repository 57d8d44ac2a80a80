pub mod application;
pub mod config;
pub mod domain;
pub mod doubles;
pub mod infrastructure;
