use crate::domain::article::entity::Article;
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Persistence boundary for the article aggregate.
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Inserts or replaces the article stored under the same id.
    async fn save(&self, article: &Article) -> DomainResult<()>;

    async fn find_by_id(&self, id: &ArticleId) -> DomainResult<Option<Article>>;

    async fn find_all(&self) -> DomainResult<Vec<Article>>;

    /// Removing an unknown id is a no-op, not an error.
    async fn delete(&self, id: &ArticleId) -> DomainResult<()>;
}
