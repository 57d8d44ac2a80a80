use crate::application::{
    ApplicationResult,
    ports::{comment::CommentService, logger::Logger, notification::NotificationService},
};
use crate::domain::{article::ArticleId, user::UserId};
use async_trait::async_trait;

/// Logger for tests where logging is irrelevant. Every call is discarded.
#[derive(Debug, Default, Clone, Copy)]
pub struct DummyLogger;

impl Logger for DummyLogger {
    fn log(&self, _message: &str) {}

    fn warn(&self, _message: &str) {}

    fn error(&self, _message: &str) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DummyNotificationService;

#[async_trait]
impl NotificationService for DummyNotificationService {
    async fn notify_article_published(
        &self,
        _author_id: &str,
        _article_id: &ArticleId,
        _title: &str,
    ) -> ApplicationResult<()> {
        Ok(())
    }

    async fn notify_comment_added(
        &self,
        _author_id: &str,
        _article_id: &ArticleId,
        _commenter_name: &str,
    ) -> ApplicationResult<()> {
        Ok(())
    }

    async fn notify_user_email_changed(
        &self,
        _user_id: &str,
        _message: &str,
    ) -> ApplicationResult<()> {
        Ok(())
    }

    async fn notify_user_registered(&self, _user_id: &str, _email: &str) -> ApplicationResult<()> {
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DummyCommentService;

#[async_trait]
impl CommentService for DummyCommentService {
    async fn add_comment(
        &self,
        _article_id: &ArticleId,
        _user_id: &UserId,
        _content: &str,
    ) -> ApplicationResult<()> {
        Ok(())
    }
}
