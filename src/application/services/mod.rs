// src/application/services/mod.rs
mod article_publisher;
mod user_service;

pub use article_publisher::{ArticlePublisher, PublishArticleCommand};
pub use user_service::{RegisterUserCommand, UserService};
