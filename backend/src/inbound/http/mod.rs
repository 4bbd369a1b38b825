//! HTTP inbound adapter exposing the article API.
//!
//! Handlers parse and validate requests, run a domain chain and return the
//! resulting [`Outcome`](crate::domain::Outcome); [`envelope`] turns it into a
//! response. The route table is registered through [`configure`].

pub mod articles;
pub mod envelope;
pub mod error;
pub mod health;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
mod validation;

use actix_web::web;

pub use error::ApiResult;

/// Register every `/api/v1` handler on `cfg`.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use blog::inbound::http::configure;
///
/// let _app = App::new().service(web::scope("/api/v1").configure(configure));
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(users::login)
        .service(users::logout)
        .service(articles::list_articles)
        .service(articles::get_article)
        .service(articles::write_article)
        .service(articles::modify_article)
        .service(articles::delete_article);
}
