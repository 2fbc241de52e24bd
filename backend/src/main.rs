//! Backend entry-point: loads configuration, generates the example records
//! and serves the REST API.

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use practice_admin::AdminSettings;
use practice_admin::inbound::http::health::HealthState;
use practice_admin::server::create_server;
use practice_admin::startup::build_http_state;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AdminSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load configuration: {e}")))?;
    let http_state = build_http_state(&settings, Arc::new(DefaultClock))
        .map_err(|e| std::io::Error::other(e.to_string()))?;

    let health_state = web::Data::new(HealthState::new());
    let bind_addr = settings.bind_addr().to_owned();
    let server = create_server(health_state, http_state, &bind_addr)?;
    info!(bind_addr = %bind_addr, "practice admin listening");
    server.await
}
