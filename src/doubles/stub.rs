use crate::application::ports::time::Clock;
use crate::domain::{
    article::{Article, ArticleId, ArticleRepository},
    errors::DomainResult,
    user::{User, UserId, UserRepository},
};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

/// User repository that answers every lookup with the one configured user.
///
/// `find_by_id` ignores the requested id on purpose. Writes are accepted and
/// forgotten.
#[derive(Debug, Clone)]
pub struct UserRepositoryStub {
    user: User,
}

impl UserRepositoryStub {
    pub fn new(user: User) -> Self {
        Self { user }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryStub {
    async fn save(&self, _user: &User) -> DomainResult<()> {
        Ok(())
    }

    async fn find_by_id(&self, _id: &UserId) -> DomainResult<Option<User>> {
        Ok(Some(self.user.clone()))
    }

    async fn find_all(&self) -> DomainResult<Vec<User>> {
        Ok(vec![self.user.clone()])
    }

    async fn delete(&self, _id: &UserId) -> DomainResult<()> {
        Ok(())
    }
}

/// Article counterpart of [`UserRepositoryStub`].
#[derive(Debug, Clone)]
pub struct ArticleRepositoryStub {
    article: Article,
}

impl ArticleRepositoryStub {
    pub fn new(article: Article) -> Self {
        Self { article }
    }
}

#[async_trait]
impl ArticleRepository for ArticleRepositoryStub {
    async fn save(&self, _article: &Article) -> DomainResult<()> {
        Ok(())
    }

    async fn find_by_id(&self, _id: &ArticleId) -> DomainResult<Option<Article>> {
        Ok(Some(self.article.clone()))
    }

    async fn find_all(&self) -> DomainResult<Vec<Article>> {
        Ok(vec![self.article.clone()])
    }

    async fn delete(&self, _id: &ArticleId) -> DomainResult<()> {
        Ok(())
    }
}

/// Clock that always reports the same instant. Defaults to 2024-01-01T00:00:00Z.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self { now }
    }
}

impl Default for FixedClock {
    fn default() -> Self {
        Self::at(DateTime::<Utc>::UNIX_EPOCH + Duration::seconds(1_704_067_200))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}
