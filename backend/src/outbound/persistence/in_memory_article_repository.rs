//! In-memory implementation of [`ArticleRepository`].

use std::collections::BTreeMap;
use std::sync::RwLock;

use tracing::debug;

use crate::domain::ports::{ArticleRepository, ArticleRepositoryError};
use crate::domain::{Article, ArticleDraft, ArticleId};

use super::poisoned;

#[derive(Debug, Default)]
struct Table {
    last_id: u64,
    rows: BTreeMap<ArticleId, Article>,
}

/// Article store held in process memory.
///
/// Identifiers start at 1 and are never reused, even after deletes.
///
/// # Examples
/// ```
/// use blog::domain::ports::ArticleRepository;
/// use blog::outbound::persistence::InMemoryArticleRepository;
///
/// let repo = InMemoryArticleRepository::default();
/// assert!(repo.find_all().expect("readable store").is_empty());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryArticleRepository {
    table: RwLock<Table>,
}

impl InMemoryArticleRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ArticleRepository for InMemoryArticleRepository {
    fn insert(&self, draft: ArticleDraft) -> Result<Article, ArticleRepositoryError> {
        let mut table = self
            .table
            .write()
            .map_err(|err| ArticleRepositoryError::storage(poisoned(err)))?;
        let next = table.last_id + 1;
        let id = ArticleId::new(next)
            .map_err(|err| ArticleRepositoryError::storage(err.to_string()))?;
        let article = Article::from_draft(id, draft);
        table.last_id = next;
        table.rows.insert(id, article.clone());
        debug!(article_id = %id, "article row inserted");
        Ok(article)
    }

    fn find_by_id(&self, id: ArticleId) -> Result<Option<Article>, ArticleRepositoryError> {
        let table = self
            .table
            .read()
            .map_err(|err| ArticleRepositoryError::storage(poisoned(err)))?;
        Ok(table.rows.get(&id).cloned())
    }

    fn find_all(&self) -> Result<Vec<Article>, ArticleRepositoryError> {
        let table = self
            .table
            .read()
            .map_err(|err| ArticleRepositoryError::storage(poisoned(err)))?;
        let mut articles: Vec<Article> = table.rows.values().cloned().collect();
        articles.sort_by(|a, b| {
            b.created_at()
                .cmp(&a.created_at())
                .then_with(|| b.id().cmp(&a.id()))
        });
        Ok(articles)
    }

    fn update(&self, article: &Article) -> Result<(), ArticleRepositoryError> {
        let mut table = self
            .table
            .write()
            .map_err(|err| ArticleRepositoryError::storage(poisoned(err)))?;
        match table.rows.get_mut(&article.id()) {
            Some(row) => {
                *row = article.clone();
                Ok(())
            }
            None => Err(ArticleRepositoryError::missing(article.id().get())),
        }
    }

    fn delete(&self, id: ArticleId) -> Result<Option<Article>, ArticleRepositoryError> {
        let mut table = self
            .table
            .write()
            .map_err(|err| ArticleRepositoryError::storage(poisoned(err)))?;
        Ok(table.rows.remove(&id))
    }
}
