use crate::domain::{
    article::{Article, ArticleId, ArticleRepository},
    errors::DomainResult,
    user::{User, UserId, UserRepository},
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Process-local article store keyed by id token. Saving an article whose id
/// is already present replaces it.
#[derive(Default)]
pub struct InMemoryArticleRepository {
    articles: Mutex<HashMap<String, Article>>,
}

impl InMemoryArticleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_articles(articles: impl IntoIterator<Item = Article>) -> Self {
        let articles = articles
            .into_iter()
            .map(|article| (article.id().to_string(), article))
            .collect();
        Self {
            articles: Mutex::new(articles),
        }
    }

    pub fn contains(&self, id: &ArticleId) -> bool {
        self.entries().contains_key(id.as_str())
    }

    pub fn get(&self, id: &ArticleId) -> Option<Article> {
        self.entries().get(id.as_str()).cloned()
    }

    pub fn values(&self) -> Vec<Article> {
        self.entries().values().cloned().collect()
    }

    pub fn clear(&self) {
        self.entries().clear();
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, Article>> {
        self.articles.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl ArticleRepository for InMemoryArticleRepository {
    async fn save(&self, article: &Article) -> DomainResult<()> {
        self.entries()
            .insert(article.id().to_string(), article.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.get(id))
    }

    async fn find_all(&self) -> DomainResult<Vec<Article>> {
        Ok(self.values())
    }

    async fn delete(&self, id: &ArticleId) -> DomainResult<()> {
        self.entries().remove(id.as_str());
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let users = users
            .into_iter()
            .map(|user| (user.id().to_string(), user))
            .collect();
        Self {
            users: Mutex::new(users),
        }
    }

    pub fn contains(&self, id: &UserId) -> bool {
        self.entries().contains_key(id.as_str())
    }

    pub fn get(&self, id: &UserId) -> Option<User> {
        self.entries().get(id.as_str()).cloned()
    }

    pub fn values(&self) -> Vec<User> {
        self.entries().values().cloned().collect()
    }

    pub fn clear(&self) {
        self.entries().clear();
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, User>> {
        self.users.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, user: &User) -> DomainResult<()> {
        self.entries().insert(user.id().to_string(), user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> DomainResult<Option<User>> {
        Ok(self.get(id))
    }

    async fn find_all(&self) -> DomainResult<Vec<User>> {
        Ok(self.values())
    }

    async fn delete(&self, id: &UserId) -> DomainResult<()> {
        self.entries().remove(id.as_str());
        Ok(())
    }
}
