//! Backend entry-point: loads settings, seeds members and serves the API.

mod server;

use std::io;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use blog::inbound::http::health::HealthState;
use blog::inbound::http::session_config::{BuildMode, session_settings_from_env};
use mockable::DefaultEnv;
use server::{ServerConfig, ServerSettings, build_http_state, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load().map_err(|e| io::Error::other(e.to_string()))?;
    let seeds = settings.seed_members().map_err(io::Error::other)?;
    let session = session_settings_from_env(&DefaultEnv::new(), BuildMode::from_debug_assertions())
        .map_err(io::Error::other)?;

    let health_state = web::Data::new(HealthState::new());
    let http_state = build_http_state(seeds);
    let config = ServerConfig::new(session, settings.host(), settings.port());
    info!(host = settings.host(), port = settings.port(), "starting server");
    create_server(health_state, http_state, config)?.await
}
