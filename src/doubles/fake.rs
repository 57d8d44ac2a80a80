use crate::domain::{
    article::{Article, ArticleId, ArticleRepository},
    errors::DomainResult,
    user::{User, UserId, UserRepository},
};
use crate::infrastructure::repositories::{InMemoryArticleRepository, InMemoryUserRepository};
use async_trait::async_trait;

/* -------------------------------- ArticleRepositoryFake -------------------------------- */

/// Working in-memory article repository plus a synchronous inspection
/// surface for assertions. Last write wins; nothing ever fails.
#[derive(Default)]
pub struct ArticleRepositoryFake {
    store: InMemoryArticleRepository,
}

impl ArticleRepositoryFake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_articles(articles: impl IntoIterator<Item = Article>) -> Self {
        Self {
            store: InMemoryArticleRepository::with_articles(articles),
        }
    }

    pub fn was_saved(&self, id: &ArticleId) -> bool {
        self.store.contains(id)
    }

    pub fn saved_article(&self, id: &ArticleId) -> Option<Article> {
        self.store.get(id)
    }

    pub fn all_saved(&self) -> Vec<Article> {
        self.store.values()
    }

    /// Drops every stored article so the fake can be reused by the next case.
    pub fn reset(&self) {
        self.store.clear();
    }
}

#[async_trait]
impl ArticleRepository for ArticleRepositoryFake {
    async fn save(&self, article: &Article) -> DomainResult<()> {
        self.store.save(article).await
    }

    async fn find_by_id(&self, id: &ArticleId) -> DomainResult<Option<Article>> {
        self.store.find_by_id(id).await
    }

    async fn find_all(&self) -> DomainResult<Vec<Article>> {
        self.store.find_all().await
    }

    async fn delete(&self, id: &ArticleId) -> DomainResult<()> {
        self.store.delete(id).await
    }
}

/* -------------------------------- UserRepositoryFake -------------------------------- */

#[derive(Default)]
pub struct UserRepositoryFake {
    store: InMemoryUserRepository,
}

impl UserRepositoryFake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            store: InMemoryUserRepository::with_users(users),
        }
    }

    pub fn was_saved(&self, id: &UserId) -> bool {
        self.store.contains(id)
    }

    pub fn saved_user(&self, id: &UserId) -> Option<User> {
        self.store.get(id)
    }

    pub fn all_saved(&self) -> Vec<User> {
        self.store.values()
    }

    pub fn reset(&self) {
        self.store.clear();
    }
}

#[async_trait]
impl UserRepository for UserRepositoryFake {
    async fn save(&self, user: &User) -> DomainResult<()> {
        self.store.save(user).await
    }

    async fn find_by_id(&self, id: &UserId) -> DomainResult<Option<User>> {
        self.store.find_by_id(id).await
    }

    async fn find_all(&self) -> DomainResult<Vec<User>> {
        self.store.find_all().await
    }

    async fn delete(&self, id: &UserId) -> DomainResult<()> {
        self.store.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::NewArticle;
    use chrono::Utc;

    fn article(title: &str) -> Article {
        Article::create(NewArticle::new("author", title, "content"), Utc::now()).unwrap()
    }

    #[tokio::test]
    async fn seeded_articles_are_visible() {
        let seeded = article("seeded");
        let fake = ArticleRepositoryFake::with_articles(vec![seeded.clone()]);

        assert!(fake.was_saved(seeded.id()));
        assert_eq!(fake.find_by_id(seeded.id()).await.unwrap(), Some(seeded));
    }

    #[tokio::test]
    async fn save_find_delete_round_trip() {
        let fake = ArticleRepositoryFake::new();
        let stored = article("round trip");

        fake.save(&stored).await.unwrap();
        assert_eq!(fake.find_by_id(stored.id()).await.unwrap(), Some(stored.clone()));

        fake.delete(stored.id()).await.unwrap();
        assert!(fake.find_by_id(stored.id()).await.unwrap().is_none());
        fake.delete(stored.id()).await.unwrap();
    }

    #[tokio::test]
    async fn reset_clears_everything() {
        let fake = ArticleRepositoryFake::with_articles(vec![article("a"), article("b")]);
        assert_eq!(fake.all_saved().len(), 2);

        fake.reset();
        assert!(fake.all_saved().is_empty());
        assert!(fake.find_all().await.unwrap().is_empty());
    }
}
