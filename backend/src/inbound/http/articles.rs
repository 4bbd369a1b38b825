//! Article HTTP handlers.
//!
//! ```text
//! GET    /api/v1/articles
//! GET    /api/v1/articles/{id}
//! POST   /api/v1/articles       {"subject":"..","content":".."}
//! PATCH  /api/v1/articles/{id}  {"subject":".."}
//! DELETE /api/v1/articles/{id}
//! ```
//!
//! Each handler validates its input, then seeds a chain and hands the final
//! [`Outcome`] to the envelope renderer. A failing step short-circuits the
//! rest, so e.g. a missing article is never authorised or modified.

use actix_web::{delete, get, patch, post, web};
use serde::{Deserialize, Serialize};

use crate::domain::{Article, Outcome};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    CONTENT, SUBJECT, missing_field_error, parse_article_id, parse_content,
    parse_optional_content, parse_optional_subject, parse_subject,
};

/// Request body for `POST /api/v1/articles`.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WriteArticleRequest {
    pub subject: Option<String>,
    pub content: Option<String>,
}

/// Request body for `PATCH /api/v1/articles/{id}`; absent fields are kept.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyArticleRequest {
    pub subject: Option<String>,
    pub content: Option<String>,
}

/// `data` for single-article responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleResponse {
    pub article: Article,
}

impl From<Article> for ArticleResponse {
    fn from(article: Article) -> Self {
        Self { article }
    }
}

/// `data` for the article listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticlesResponse {
    pub articles: Vec<Article>,
}

#[derive(Debug, Deserialize)]
struct ArticlePath {
    id: String,
}

/// List every article, newest first.
#[get("/articles")]
pub async fn list_articles(state: web::Data<HttpState>) -> Outcome<ArticlesResponse> {
    state
        .articles
        .find_all()
        .map_to_response(|articles| ArticlesResponse { articles })
}

/// Fetch one article.
#[get("/articles/{id}")]
pub async fn get_article(
    state: web::Data<HttpState>,
    path: web::Path<ArticlePath>,
) -> ApiResult<Outcome<ArticleResponse>> {
    let id = parse_article_id(&path.id)?;
    Ok(state
        .articles
        .find_by_id(id)
        .map_to_response(ArticleResponse::from))
}

/// Write an article as the logged-in member.
#[post("/articles")]
pub async fn write_article(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<WriteArticleRequest>,
) -> ApiResult<Outcome<ArticleResponse>> {
    let username = session.require_username()?;
    let WriteArticleRequest { subject, content } = payload.into_inner();
    let subject = parse_subject(subject.ok_or_else(|| missing_field_error(SUBJECT))?)?;
    let content = parse_content(content.ok_or_else(|| missing_field_error(CONTENT))?)?;

    Ok(Outcome::<()>::produce_empty()
        .then(|_| state.members.find_by_username(&username))
        .then_payload(|member| state.articles.write(&member, subject, content))
        .map_to_response(ArticleResponse::from))
}

/// Modify an article; only its author may do so.
#[patch("/articles/{id}")]
pub async fn modify_article(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<ArticlePath>,
    payload: web::Json<ModifyArticleRequest>,
) -> ApiResult<Outcome<ArticleResponse>> {
    let username = session.require_username()?;
    let id = parse_article_id(&path.id)?;
    let ModifyArticleRequest { subject, content } = payload.into_inner();
    let subject = parse_optional_subject(subject)?;
    let content = parse_optional_content(content)?;

    Ok(Outcome::<()>::produce_empty()
        .then(|_| state.members.find_by_username(&username))
        .then_payload(|member| {
            state
                .articles
                .find_by_id(id)
                .then_payload(|article| state.articles.can_modify(&member, article))
        })
        .then_payload(|article| state.articles.modify(article, subject, content))
        .map_to_response(ArticleResponse::from))
}

/// Delete an article; only its author may do so.
#[delete("/articles/{id}")]
pub async fn delete_article(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<ArticlePath>,
) -> ApiResult<Outcome<ArticleResponse>> {
    let username = session.require_username()?;
    let id = parse_article_id(&path.id)?;

    Ok(Outcome::<()>::produce_empty()
        .then(|_| state.members.find_by_username(&username))
        .then_payload(|member| {
            state
                .articles
                .find_by_id(id)
                .then_payload(|article| state.articles.can_delete(&member, article))
        })
        .then_payload(|article| state.articles.delete(article))
        .map_to_response(ArticleResponse::from))
}

#[cfg(test)]
#[path = "articles_tests.rs"]
mod tests;
