// tests/support/failing.rs
use async_trait::async_trait;
use newsroom::application::{
    ApplicationResult, error::ApplicationError, ports::notification::NotificationService,
};
use newsroom::domain::{
    article::{Article, ArticleId, ArticleRepository},
    errors::{DomainError, DomainResult},
};

/// Notifier whose every delivery fails, as an unreachable mail gateway would.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnreachableNotificationService;

#[async_trait]
impl NotificationService for UnreachableNotificationService {
    async fn notify_article_published(
        &self,
        _author_id: &str,
        _article_id: &ArticleId,
        _title: &str,
    ) -> ApplicationResult<()> {
        Err(ApplicationError::notification("mail gateway unreachable"))
    }

    async fn notify_comment_added(
        &self,
        _author_id: &str,
        _article_id: &ArticleId,
        _commenter_name: &str,
    ) -> ApplicationResult<()> {
        Err(ApplicationError::notification("mail gateway unreachable"))
    }

    async fn notify_user_email_changed(
        &self,
        _user_id: &str,
        _message: &str,
    ) -> ApplicationResult<()> {
        Err(ApplicationError::notification("mail gateway unreachable"))
    }

    async fn notify_user_registered(&self, _user_id: &str, _email: &str) -> ApplicationResult<()> {
        Err(ApplicationError::notification("mail gateway unreachable"))
    }
}

/// Article store that refuses writes. Reads see an empty store.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReadOnlyArticleRepository;

#[async_trait]
impl ArticleRepository for ReadOnlyArticleRepository {
    async fn save(&self, _article: &Article) -> DomainResult<()> {
        Err(DomainError::Persistence("store is read-only".into()))
    }

    async fn find_by_id(&self, _id: &ArticleId) -> DomainResult<Option<Article>> {
        Ok(None)
    }

    async fn find_all(&self) -> DomainResult<Vec<Article>> {
        Ok(Vec::new())
    }

    async fn delete(&self, _id: &ArticleId) -> DomainResult<()> {
        Err(DomainError::Persistence("store is read-only".into()))
    }
}
