mod memory;

pub use memory::{InMemoryArticleRepository, InMemoryUserRepository};
