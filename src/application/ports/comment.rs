// src/application/ports/comment.rs
use crate::application::ApplicationResult;
use crate::domain::{article::ArticleId, user::UserId};
use async_trait::async_trait;

#[async_trait]
pub trait CommentService: Send + Sync {
    /// Adds a comment written by `user_id` to the given article.
    async fn add_comment(
        &self,
        article_id: &ArticleId,
        user_id: &UserId,
        content: &str,
    ) -> ApplicationResult<()>;
}
