use analytics::{SectorEngine, UniformSource};
use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use catalog::SectorCatalog;
use configuration::{Config, EngineConfig};
use std::sync::{Arc, Mutex};
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

pub mod error;
pub mod handlers;

/// The shared application state that all handlers can access.
pub struct AppState {
    pub catalog: SectorCatalog,
    pub engine_config: EngineConfig,
    /// Parent stream. Each request forks its own child from it.
    random: Mutex<UniformSource>,
}

impl AppState {
    pub fn new(catalog: SectorCatalog, engine_config: EngineConfig) -> Self {
        let random = UniformSource::from_optional_seed(engine_config.seed);
        Self {
            catalog,
            engine_config,
            random: Mutex::new(random),
        }
    }

    /// A request-scoped engine. The lock is held only long enough to fork.
    pub fn engine(&self) -> SectorEngine<'_, UniformSource> {
        let rng = self
            .random
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .fork();
        SectorEngine::new(&self.catalog, self.engine_config.clone(), rng)
    }
}

/// The built-in catalog, or the override file named in the configuration.
pub fn catalog_from_config(config: &Config) -> anyhow::Result<SectorCatalog> {
    match &config.catalog.path {
        Some(path) => {
            let sectors = configuration::load_catalog(path)?;
            let catalog = SectorCatalog::from_baselines(sectors)?;
            tracing::info!(path = %path.display(), sectors = catalog.len(), "Using catalog override.");
            Ok(catalog)
        }
        None => Ok(SectorCatalog::psx()),
    }
}

/// Builds the router with every route and middleware layer attached.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(AllowHeaders::any());

    // --- DEFINE THE APPLICATION ROUTES ---
    Router::new()
        .route("/api/v1/health", get(handlers::health_check))
        .route("/api/v1/sectors", get(handlers::get_all_sectors))
        .route("/api/v1/sectors/compare", post(handlers::compare_sectors))
        .route("/api/v1/sectors/:sector_id", get(handlers::get_sector_details))
        .route(
            "/api/v1/sectors/:sector_id/companies",
            get(handlers::get_sector_companies),
        )
        .with_state(state)
        .layer(cors)
        // This middleware will automatically log information about every incoming request.
        .layer(TraceLayer::new_for_http())
}

/// The main function to configure and run the web server.
pub async fn run_server(config: Config) -> anyhow::Result<()> {
    // Tracing is initialized by the binary, so it is not set up again here.
    let catalog = catalog_from_config(&config)?;
    let app_state = Arc::new(AppState::new(catalog, config.engine.clone()));
    let app = build_router(app_state);

    let addr = config.server.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!(seeded = config.engine.seed.is_some(), "Web server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
