// src/application/ports/notification.rs
use crate::application::ApplicationResult;
use crate::domain::article::ArticleId;
use async_trait::async_trait;

/// Outbound notifications (email, push, ...) triggered by application services.
#[async_trait]
pub trait NotificationService: Send + Sync {
    async fn notify_article_published(
        &self,
        author_id: &str,
        article_id: &ArticleId,
        title: &str,
    ) -> ApplicationResult<()>;

    async fn notify_comment_added(
        &self,
        author_id: &str,
        article_id: &ArticleId,
        commenter_name: &str,
    ) -> ApplicationResult<()>;

    async fn notify_user_email_changed(&self, user_id: &str, message: &str)
    -> ApplicationResult<()>;

    async fn notify_user_registered(&self, user_id: &str, email: &str) -> ApplicationResult<()>;
}
