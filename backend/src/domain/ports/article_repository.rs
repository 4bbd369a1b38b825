//! Driven port for article persistence.
//!
//! Services depend on this trait only; the in-memory adapter lives under
//! `outbound::persistence` and tests substitute `MockArticleRepository`.

use crate::domain::{Article, ArticleDraft, ArticleId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by article repository adapters.
    pub enum ArticleRepositoryError {
        /// The backing store could not be read or written.
        Storage { message: String } => "article storage failed: {message}",
        /// An update targeted an article that is no longer stored.
        Missing { id: u64 } => "article {id} is not stored",
    }
}

/// Port for storing and loading articles.
#[cfg_attr(test, mockall::automock)]
pub trait ArticleRepository: Send + Sync {
    /// Store a draft under a freshly assigned identifier.
    fn insert(&self, draft: ArticleDraft) -> Result<Article, ArticleRepositoryError>;

    /// Fetch an article by identifier.
    fn find_by_id(&self, id: ArticleId) -> Result<Option<Article>, ArticleRepositoryError>;

    /// Every stored article, newest first.
    fn find_all(&self) -> Result<Vec<Article>, ArticleRepositoryError>;

    /// Overwrite an existing article.
    fn update(&self, article: &Article) -> Result<(), ArticleRepositoryError>;

    /// Remove an article, returning it when it existed.
    fn delete(&self, id: ArticleId) -> Result<Option<Article>, ArticleRepositoryError>;
}
