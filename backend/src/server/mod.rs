//! Server construction and middleware wiring.

mod config;
mod settings;

pub use config::ServerConfig;
pub use settings::{SeedMember, ServerSettings};

use std::sync::Arc;

use actix_session::{
    SessionMiddleware,
    config::{CookieContentSecurity, PersistentSession},
    storage::CookieSessionStore,
};
use actix_web::cookie::{Key, SameSite};
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use mockable::DefaultClock;
use tracing::{info, warn};

use blog::Trace;
use blog::domain::{ArticleService, MemberService, Outcome};
use blog::inbound::http::error::json_error_handler;
use blog::inbound::http::health::{HealthState, live, ready};
use blog::inbound::http::state::HttpState;
use blog::inbound::http::configure;
use blog::outbound::persistence::{InMemoryArticleRepository, InMemoryMemberRepository};

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    key: Key,
    cookie_secure: bool,
    same_site: SameSite,
    session_ttl_hours: i64,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        key,
        cookie_secure,
        same_site,
        session_ttl_hours,
    } = deps;

    let session = SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".into())
        .cookie_path("/".into())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .cookie_content_security(CookieContentSecurity::Private)
        .cookie_same_site(same_site)
        .session_lifecycle(
            PersistentSession::default()
                .session_ttl(actix_web::cookie::time::Duration::hours(session_ttl_hours)),
        )
        .build();

    App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .wrap(Trace)
        .service(web::scope("/api/v1").wrap(session).configure(configure))
        .service(ready)
        .service(live)
}

/// Wire the in-memory repositories into services and join the seed members.
///
/// A seed that fails to join (for example a duplicate entry) is logged and
/// skipped.
pub fn build_http_state(seeds: Vec<SeedMember>) -> HttpState {
    let members = MemberService::new(Arc::new(InMemoryMemberRepository::new()));
    for SeedMember { username, password } in seeds {
        match members.join(username, password.as_str()) {
            Outcome::Success(joined) => info!(outcome = joined.message(), "seed member joined"),
            Outcome::Failure(failure) => {
                warn!(code = %failure.code(), reason = failure.message(), "seed member skipped");
            }
        }
    }
    let articles = ArticleService::new(
        Arc::new(InMemoryArticleRepository::new()),
        Arc::new(DefaultClock),
    );
    HttpState::new(Arc::new(members.clone()), articles, members)
}

/// Construct an Actix HTTP server.
///
/// Marks `health_state` ready once the listener is bound.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    http_state: HttpState,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = web::Data::new(http_state);
    let ServerConfig {
        key,
        cookie_secure,
        same_site,
        session_ttl_hours,
        bind_addr,
    } = config;

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
            key: key.clone(),
            cookie_secure,
            same_site,
            session_ttl_hours,
        })
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
