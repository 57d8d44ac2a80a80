// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleContent, ArticleId, ArticleTitle};
use crate::domain::errors::DomainResult;
use chrono::{DateTime, Utc};

/// Article aggregate. Title and content are only reachable through the
/// validated setters, so neither can become empty after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    id: ArticleId,
    author_id: String,
    title: ArticleTitle,
    content: ArticleContent,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub id: Option<ArticleId>,
    pub author_id: String,
    pub title: String,
    pub content: String,
}

impl NewArticle {
    pub fn new(
        author_id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            author_id: author_id.into(),
            title: title.into(),
            content: content.into(),
        }
    }

    pub fn with_id(mut self, id: ArticleId) -> Self {
        self.id = Some(id);
        self
    }
}

impl Article {
    pub fn create(params: NewArticle, now: DateTime<Utc>) -> DomainResult<Self> {
        let title = ArticleTitle::new(params.title)?;
        let content = ArticleContent::new(params.content)?;

        Ok(Self {
            id: params.id.unwrap_or_else(ArticleId::generate),
            author_id: params.author_id,
            title,
            content,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn id(&self) -> &ArticleId {
        &self.id
    }

    pub fn author_id(&self) -> &str {
        &self.author_id
    }

    pub fn title(&self) -> &ArticleTitle {
        &self.title
    }

    pub fn content(&self) -> &ArticleContent {
        &self.content
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn change_title(&mut self, title: impl Into<String>, now: DateTime<Utc>) -> DomainResult<()> {
        self.title = ArticleTitle::new(title)?;
        self.touch(now);
        Ok(())
    }

    pub fn change_content(
        &mut self,
        content: impl Into<String>,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        self.content = ArticleContent::new(content)?;
        self.touch(now);
        Ok(())
    }

    // updated_at never moves backwards, even with a skewed clock
    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now.max(self.updated_at);
    }
}
