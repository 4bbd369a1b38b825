//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::web;
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

use crate::domain::{ArticleService, MemberService, Username};
use crate::outbound::persistence::{InMemoryArticleRepository, InMemoryMemberRepository};

use super::error::json_error_handler;
use super::state::HttpState;

/// Build a session middleware configured for tests.
///
/// - Generates a fresh signing/encryption key per invocation.
/// - Sets the cookie name to `session` and disables the `Secure` flag for
///   local HTTP tests.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// Clock pinned to a fixed instant.
pub struct FixtureClock(pub DateTime<Utc>);

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Instant reported by [`FixtureClock`] in handler tests.
pub fn fixture_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0)
        .single()
        .expect("valid fixture timestamp")
}

/// State backed by in-memory repositories with `user1` and `user2` joined.
pub fn seeded_state() -> web::Data<HttpState> {
    let members = MemberService::new(Arc::new(InMemoryMemberRepository::new()));
    for name in ["user1", "user2"] {
        let username = Username::new(name).expect("fixture username");
        assert!(members.join(username, "1234").is_success());
    }
    let articles = ArticleService::new(
        Arc::new(InMemoryArticleRepository::new()),
        Arc::new(FixtureClock(fixture_now())),
    );
    web::Data::new(HttpState::new(Arc::new(members.clone()), articles, members))
}

/// JSON extractor config matching the server's.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}
