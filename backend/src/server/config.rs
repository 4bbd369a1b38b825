//! HTTP server configuration object.

use actix_web::cookie::{Key, SameSite};

use blog::inbound::http::session_config::SessionSettings;

/// Everything [`create_server`](super::create_server) needs besides state.
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) same_site: SameSite,
    pub(crate) session_ttl_hours: i64,
    pub(crate) bind_addr: (String, u16),
}

impl ServerConfig {
    /// Combine validated session settings with the listener address.
    #[must_use]
    pub fn new(session: SessionSettings, host: impl Into<String>, port: u16) -> Self {
        let SessionSettings {
            key,
            cookie_secure,
            same_site,
            ttl_hours,
        } = session;
        Self {
            key,
            cookie_secure,
            same_site,
            session_ttl_hours: ttl_hours,
            bind_addr: (host.into(), port),
        }
    }
}
