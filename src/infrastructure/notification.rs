use crate::application::{ApplicationResult, ports::notification::NotificationService};
use crate::domain::article::ArticleId;
use async_trait::async_trait;

/// Notification sender that emits one structured event per message instead of
/// talking to a mail or push gateway.
#[derive(Default, Clone)]
pub struct TracingNotificationService;

#[async_trait]
impl NotificationService for TracingNotificationService {
    async fn notify_article_published(
        &self,
        author_id: &str,
        article_id: &ArticleId,
        title: &str,
    ) -> ApplicationResult<()> {
        tracing::info!(
            recipient = author_id,
            %article_id,
            title,
            "article published notification sent"
        );
        Ok(())
    }

    async fn notify_comment_added(
        &self,
        author_id: &str,
        article_id: &ArticleId,
        commenter_name: &str,
    ) -> ApplicationResult<()> {
        tracing::info!(
            recipient = author_id,
            %article_id,
            commenter = commenter_name,
            "comment notification sent"
        );
        Ok(())
    }

    async fn notify_user_email_changed(
        &self,
        user_id: &str,
        message: &str,
    ) -> ApplicationResult<()> {
        tracing::info!(recipient = user_id, detail = message, "email change notification sent");
        Ok(())
    }

    async fn notify_user_registered(&self, user_id: &str, email: &str) -> ApplicationResult<()> {
        tracing::info!(recipient = user_id, email, "welcome notification sent");
        Ok(())
    }
}
