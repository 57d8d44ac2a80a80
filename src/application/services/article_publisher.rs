// src/application/services/article_publisher.rs
use std::sync::Arc;

use crate::{
    application::{
        error::ApplicationResult,
        ports::{ClockPort, LoggerPort, NotificationPort},
    },
    domain::article::{Article, ArticleRepository, NewArticle},
};

pub struct PublishArticleCommand {
    pub author_id: String,
    pub title: String,
    pub content: String,
}

impl PublishArticleCommand {
    pub fn new(
        author_id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            author_id: author_id.into(),
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Creates articles, persists them and fans out the optional side effects
/// (author notification, service log line).
pub struct ArticlePublisher {
    repository: Arc<dyn ArticleRepository>,
    clock: Arc<ClockPort>,
    logger: Option<Arc<LoggerPort>>,
    notifications: Option<Arc<NotificationPort>>,
}

impl ArticlePublisher {
    pub fn new(repository: Arc<dyn ArticleRepository>, clock: Arc<ClockPort>) -> Self {
        Self {
            repository,
            clock,
            logger: None,
            notifications: None,
        }
    }

    pub fn with_logger(mut self, logger: Arc<LoggerPort>) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn with_notifications(mut self, notifications: Arc<NotificationPort>) -> Self {
        self.notifications = Some(notifications);
        self
    }

    pub async fn publish(&self, command: PublishArticleCommand) -> ApplicationResult<Article> {
        let article = Article::create(
            NewArticle::new(command.author_id, command.title, command.content),
            self.clock.now(),
        )?;

        self.repository.save(&article).await?;
        tracing::debug!(article_id = %article.id(), "article saved");

        if let Some(notifications) = &self.notifications {
            notifications
                .notify_article_published(
                    article.author_id(),
                    article.id(),
                    article.title().as_str(),
                )
                .await?;
        }

        if let Some(logger) = &self.logger {
            logger.log(&format!(
                "Article published: {} by {} - {}",
                article.id(),
                article.author_id(),
                article.title()
            ));
        }

        Ok(article)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::error::ApplicationError;
    use crate::doubles::{ArticleRepositoryFake, DummyLogger, FixedClock, NotificationServiceSpy};
    use crate::domain::errors::DomainError;

    #[tokio::test]
    async fn publish_saves_article_without_optional_collaborators() {
        let repo = Arc::new(ArticleRepositoryFake::new());
        let publisher = ArticlePublisher::new(repo.clone(), Arc::new(FixedClock::default()));

        let article = publisher
            .publish(PublishArticleCommand::new("author-1", "Title", "Body"))
            .await
            .expect("publish failed");

        assert!(repo.was_saved(article.id()));
        assert_eq!(repo.saved_article(article.id()), Some(article));
    }

    #[tokio::test]
    async fn publish_notifies_when_notifier_configured() {
        let repo = Arc::new(ArticleRepositoryFake::new());
        let spy = Arc::new(NotificationServiceSpy::new());
        let publisher = ArticlePublisher::new(repo, Arc::new(FixedClock::default()))
            .with_logger(Arc::new(DummyLogger))
            .with_notifications(spy.clone());

        publisher
            .publish(PublishArticleCommand::new("author-2", "Hello", "World"))
            .await
            .unwrap();

        assert!(spy.was_notified_of_article_publication("author-2", "Hello"));
        assert_eq!(spy.total_notifications_sent(), 1);
    }

    #[tokio::test]
    async fn publish_with_empty_title_saves_nothing() {
        let repo = Arc::new(ArticleRepositoryFake::new());
        let spy = Arc::new(NotificationServiceSpy::new());
        let publisher = ArticlePublisher::new(repo.clone(), Arc::new(FixedClock::default()))
            .with_notifications(spy.clone());

        let err = publisher
            .publish(PublishArticleCommand::new("author-3", "", "Body"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::Validation(_))
        ));
        assert!(repo.all_saved().is_empty());
        assert_eq!(spy.total_notifications_sent(), 0);
    }
}
