//! The narrow seam between the pure core and whatever stores the articles.
//!
//! Persistence, auth and network access live behind this trait so every
//! transform in the crate stays unit-testable against an in-memory list.

use anyhow::Result;
use async_trait::async_trait;
use emergences_shared::Article;

/// Read-only access to the full article collection.
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Fetch every article, drafts included.
    async fn fetch_articles(&self) -> Result<Vec<Article>>;
}

/// Repository over an already-resolved in-memory collection.
#[derive(Debug, Clone, Default)]
pub struct InMemoryArticles {
    articles: Vec<Article>,
}

impl InMemoryArticles {
    /// Wrap an existing collection.
    #[must_use]
    pub fn new(articles: Vec<Article>) -> Self {
        Self { articles }
    }
}

#[async_trait]
impl ArticleRepository for InMemoryArticles {
    async fn fetch_articles(&self) -> Result<Vec<Article>> {
        Ok(self.articles.clone())
    }
}

/// Fetch only published articles — the visibility invariant for every public
/// context. Admin contexts call `fetch_articles` directly.
pub async fn published_articles(repo: &dyn ArticleRepository) -> Result<Vec<Article>> {
    let mut articles = repo.fetch_articles().await?;
    articles.retain(|a| a.published);
    Ok(articles)
}
