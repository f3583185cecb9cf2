use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use nourish_backend::auth::gate::{AuthGate, OpenGate, TokenGate};
use nourish_backend::config::app::{AppConfig, GateMode};
use nourish_backend::infra::state::build_state;
use nourish_backend::middleware::cors::cors_middleware;
use nourish_backend::middleware::request_trace::RequestTrace;
use nourish_backend::middleware::structured_logger::StructuredLogger;
use nourish_backend::middleware::trace_span::TraceSpan;
use nourish_backend::routes;
use nourish_backend::state::security_config::SecurityConfig;
use tracing::{error, info, warn};

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment
    // (docker env_file, systemd unit, or a sourced .env in local dev).
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            std::process::exit(1);
        }
    };

    let security_config = SecurityConfig::new(config.access_token_secret.as_bytes())
        .with_cookie_secure(config.cookie_secure);

    let gate: Arc<dyn AuthGate> = match config.gate {
        GateMode::Token => Arc::new(TokenGate::new(security_config.clone())),
        GateMode::Open => {
            warn!("AUTH_GATE=open: owner-scoped routes are NOT protected");
            Arc::new(OpenGate)
        }
    };

    let app_state = match build_state()
        .with_db_url(config.database_url.clone(), config.db_kind)
        .with_security(security_config)
        .with_gate(gate)
        .build()
        .await
    {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "Failed to build application state");
            std::process::exit(1);
        }
    };

    info!(
        host = %config.host,
        port = config.port,
        gate = app_state.gate.name(),
        origins = ?config.client_origins,
        "Starting Nourish4All backend"
    );

    // Wrap AppState with web::Data before passing to HttpServer
    let data = web::Data::new(app_state);
    let origins = config.client_origins.clone();

    // actix runs the last `wrap` first: RequestTrace sets the trace id
    // before StructuredLogger and TraceSpan read it.
    HttpServer::new(move || {
        App::new()
            .wrap(TraceSpan)
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .wrap(cors_middleware(&origins))
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
