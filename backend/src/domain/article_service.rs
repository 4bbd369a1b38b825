//! Article use-cases expressed as outcome producers.
//!
//! Each method returns an [`Outcome`] so inbound adapters can chain them:
//! `find_by_id` fails with `F-404`, `can_modify`/`can_delete` fail with
//! `F-403`, and storage problems surface as `F-500`.

use std::sync::Arc;

use mockable::Clock;
use tracing::{error, info, warn};

use crate::domain::ports::{ArticleRepository, ArticleRepositoryError};
use crate::domain::{
    Article, ArticleDraft, ArticleId, Content, Failure, Member, Outcome, ResultCode, Subject,
};

fn storage_failure(error: ArticleRepositoryError) -> Failure {
    error!(error = %error, "article repository failed");
    match error {
        ArticleRepositoryError::Missing { id } => {
            Failure::not_found(format!("article {id} does not exist"))
        }
        ArticleRepositoryError::Storage { .. } => Failure::internal("article storage failed"),
    }
}

/// Pass `article` through when `member` wrote it; `F-403` otherwise.
fn authorise(member: &Member, article: Article, action: &str) -> Outcome<Article> {
    let id = article.id();
    if article.is_authored_by(member.username()) {
        return Outcome::success(
            ResultCode::ok(),
            format!("{} may {action} article {id}", member.username()),
            article,
        );
    }
    warn!(
        article_id = %id,
        member = %member.username(),
        action,
        "member is not the article author"
    );
    Outcome::fail(
        ResultCode::forbidden(),
        format!("you may not {action} article {id}"),
    )
}

/// Article service over a repository port and a clock.
#[derive(Clone)]
pub struct ArticleService {
    articles: Arc<dyn ArticleRepository>,
    clock: Arc<dyn Clock>,
}

impl ArticleService {
    /// Create a service from its collaborators.
    pub fn new(articles: Arc<dyn ArticleRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { articles, clock }
    }

    /// Store a new article authored by `member`.
    pub fn write(&self, member: &Member, subject: Subject, content: Content) -> Outcome<Article> {
        let draft = ArticleDraft {
            author: member.username().clone(),
            subject,
            content,
            created_at: self.clock.utc(),
        };
        match self.articles.insert(draft) {
            Ok(article) => {
                info!(article_id = %article.id(), author = %article.author(), "article created");
                Outcome::success(
                    ResultCode::ok(),
                    format!("article {} was created", article.id()),
                    article,
                )
            }
            Err(err) => storage_failure(err).into(),
        }
    }

    /// Every article, newest first.
    pub fn find_all(&self) -> Outcome<Vec<Article>> {
        match self.articles.find_all() {
            Ok(articles) => Outcome::success(ResultCode::ok(), "articles were listed", articles),
            Err(err) => storage_failure(err).into(),
        }
    }

    /// Look up one article; `F-404` when it does not exist.
    pub fn find_by_id(&self, id: ArticleId) -> Outcome<Article> {
        match self.articles.find_by_id(id) {
            Ok(Some(article)) => {
                Outcome::success(ResultCode::ok(), format!("article {id} was found"), article)
            }
            Ok(None) => Outcome::fail(
                ResultCode::not_found(),
                format!("article {id} does not exist"),
            ),
            Err(err) => storage_failure(err).into(),
        }
    }

    /// Pass `article` through when `member` wrote it; `F-403` otherwise.
    pub fn can_modify(&self, member: &Member, article: Article) -> Outcome<Article> {
        authorise(member, article, "modify")
    }

    /// Pass `article` through when `member` wrote it; `F-403` otherwise.
    pub fn can_delete(&self, member: &Member, article: Article) -> Outcome<Article> {
        authorise(member, article, "delete")
    }

    /// Apply the provided fields, stamp the modification time and persist.
    pub fn modify(
        &self,
        mut article: Article,
        subject: Option<Subject>,
        content: Option<Content>,
    ) -> Outcome<Article> {
        article.revise(subject, content, self.clock.utc());
        match self.articles.update(&article) {
            Ok(()) => {
                info!(article_id = %article.id(), "article modified");
                Outcome::success(
                    ResultCode::ok(),
                    format!("article {} was modified", article.id()),
                    article,
                )
            }
            Err(err) => storage_failure(err).into(),
        }
    }

    /// Remove the article; the payload is the removed article.
    pub fn delete(&self, article: Article) -> Outcome<Article> {
        let id = article.id();
        match self.articles.delete(id) {
            Ok(Some(removed)) => {
                info!(article_id = %id, "article deleted");
                Outcome::success(ResultCode::ok(), format!("article {id} was deleted"), removed)
            }
            Ok(None) => Outcome::fail(
                ResultCode::not_found(),
                format!("article {id} does not exist"),
            ),
            Err(err) => storage_failure(err).into(),
        }
    }
}

#[cfg(test)]
#[path = "article_service_tests.rs"]
mod tests;
