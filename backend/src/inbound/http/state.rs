//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain services and ports, and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::LoginService;
use crate::domain::{ArticleService, MemberService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Credential check used by `POST /api/v1/login`.
    pub login: Arc<dyn LoginService>,
    /// Article use-cases chained by the article handlers.
    pub articles: ArticleService,
    /// Resolves the session's username to a member.
    pub members: MemberService,
}

impl HttpState {
    /// Construct state from its services.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use blog::domain::{ArticleService, MemberService};
    /// use blog::inbound::http::state::HttpState;
    /// use blog::outbound::persistence::{InMemoryArticleRepository, InMemoryMemberRepository};
    /// use mockable::DefaultClock;
    ///
    /// let members = MemberService::new(Arc::new(InMemoryMemberRepository::new()));
    /// let articles = ArticleService::new(
    ///     Arc::new(InMemoryArticleRepository::new()),
    ///     Arc::new(DefaultClock),
    /// );
    /// let state = HttpState::new(Arc::new(members.clone()), articles, members);
    /// let _login = state.login.clone();
    /// ```
    pub fn new(login: Arc<dyn LoginService>, articles: ArticleService, members: MemberService) -> Self {
        Self {
            login,
            articles,
            members,
        }
    }
}
