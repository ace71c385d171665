//! Application entry point for the `citysense-advisory` backend service.
//!
//! This binary orchestrates the full startup sequence for the smart city
//! advisory API, including:
//! - Loading configuration from environment variables or `.env`
//! - Initializing structured logging/tracing
//! - Seeding the in-memory sensor registry and neighborhood catalog
//! - Constructing the advisory gateway and review history
//! - Mounting all API routes via the `routes` gateway
//! - Binding the Axum HTTP server and serving requests
//!
//! # Environment Variables
//! - `OPENAI_API_KEY` (**required**) – generation service bearer key
//! - `OPENAI_API_URL`, `OPENAI_MODEL` (optional) – generation endpoint/model
//! - `PROMPT_MAX_TOKENS`, `REVIEW_MAX_TOKENS` (optional) – response budgets
//! - `NEARBY_RADIUS_KM` (optional) – proximity radius (default: 2.0)
//! - `PORT` (optional) – listen port (default: 3002)
//! - `AXUM_LOG_LEVEL` (optional) – log verbosity (default: `debug`)
//! - `AXUM_SPAN_EVENTS` (optional) – span event mode for tracing
//!
//! Configuration parsing lives in `config`, route registration in
//! `routes`; every store is an explicit object constructed here once and
//! shared by handle, so nothing hangs off hidden globals.

use std::{env, io::IsTerminal, net::SocketAddr, sync::Arc};

use axum::Router;
use dotenvy::dotenv;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;

use anyhow::Result;

mod advisor;
mod config;
mod error;
mod gateway;
mod history;
mod models;
mod neighborhoods;
mod prompt;
mod proximity;
mod registry;
mod routes;
mod seed;
mod viz;

pub use config::Config;
pub use error::Error;

use advisor::Advisor;
use gateway::AdvisoryGateway;
use history::ReviewHistory;
use neighborhoods::NeighborhoodCatalog;
use registry::SensorRegistry;
use viz::{TracingSink, VisualizationSink};

// ---

/// Shared application state handed to every route.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub registry: Arc<SensorRegistry>,
    pub catalog: Arc<NeighborhoodCatalog>,
    pub history: Arc<ReviewHistory>,
    pub gateway: AdvisoryGateway,
    pub advisor: Advisor,
}

#[tokio::main]
async fn main() -> Result<()> {
    // ---
    init_tracing();
    dotenv().ok();

    let cfg = config::load_from_env()?;
    cfg.log_config();

    let registry = Arc::new(SensorRegistry::seeded(seed::city_sensors()));
    tracing::info!("Seeded sensor registry with {} sensors", registry.len());

    let catalog = Arc::new(NeighborhoodCatalog::nyc());
    tracing::info!("Loaded {} neighborhoods", catalog.len());
    tracing::debug!("Neighborhood keys: {:?}", catalog.keys());

    let history = Arc::new(ReviewHistory::new());
    let gateway = AdvisoryGateway::new(&cfg);
    let sink: Arc<dyn VisualizationSink> = Arc::new(TracingSink);

    let advisor = Advisor::new(
        registry.clone(),
        catalog.clone(),
        gateway.clone(),
        history.clone(),
        sink,
        cfg.nearby_radius_km,
        cfg.review_max_tokens,
    );

    let state = AppState {
        config: cfg.clone(),
        registry,
        catalog,
        history,
        gateway,
        advisor,
    };

    // Build app from routes gateway
    let app: Router = routes::router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], cfg.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ---

/// Initialize the global tracing subscriber for structured logging.
///
/// This function configures the [`tracing_subscriber`] with:
/// - Log target, file, and line number output enabled
/// - Color output controlled by TTY detection and `FORCE_COLOR` env var:
///   - `FORCE_COLOR=1|true|yes`: force colors on
///   - `FORCE_COLOR=0|false|no`: force colors off
///   - unset or other values: auto-detect TTY
/// - Span event emission mode controlled by the `AXUM_SPAN_EVENTS` env var:
///   - `"full"`       : emit ENTER, EXIT, and CLOSE events with timing
///   - `"enter_exit"` : emit ENTER and EXIT only
///   - unset or other values: emit CLOSE events only (default)
/// - Log level controlled by the `AXUM_LOG_LEVEL` env var
///
/// This should be called once at application startup before any logging
/// or tracing macros are invoked. It installs the subscriber globally
/// for the lifetime of the process.
fn init_tracing() {
    // ---
    let span_events = match env::var("AXUM_SPAN_EVENTS").as_deref() {
        Ok("full") => FmtSpan::FULL,
        Ok("enter_exit") => FmtSpan::ENTER | FmtSpan::EXIT,
        _ => FmtSpan::CLOSE,
    };

    // Determine if we should use colors
    let use_color = match env::var("FORCE_COLOR").as_deref() {
        Ok("1") | Ok("true") | Ok("yes") => true,
        Ok("0") | Ok("false") | Ok("no") => false,
        _ => std::io::stdout().is_terminal(),
    };

    // Use RUST_LOG if available, otherwise fall back to AXUM_LOG_LEVEL
    let env_filter = if env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        let level = match env::var("AXUM_LOG_LEVEL").ok().as_deref() {
            Some("trace") => "trace",
            Some("debug") => "debug",
            Some("info") => "info",
            Some("warn") => "warn",
            Some("error") => "error",
            _ => "debug",
        };
        EnvFilter::new(format!("{level},hyper_util=warn"))
    };

    tracing_subscriber::fmt()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_span_events(span_events)
        .with_env_filter(env_filter)
        .with_ansi(use_color)
        .compact()
        .init();
}
