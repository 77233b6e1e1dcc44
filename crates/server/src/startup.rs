use axum::Router;
use configs::AppConfig;
use sea_orm::DatabaseConnection;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::{routes, state::ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load config.toml (path from `CONFIG_PATH`), falling back to environment variables
pub fn load_config() -> anyhow::Result<AppConfig> {
    match AppConfig::load_and_validate() {
        Ok(cfg) => Ok(cfg),
        Err(e) => {
            warn!(error = %e, "config file unavailable; using environment variables");
            AppConfig::from_env()
        }
    }
}

/// Wire repository -> service -> router over an already-prepared pool
pub fn build_app(db: DatabaseConnection) -> Router {
    routes::build_router(ServerState::new(db), build_cors())
}

/// Public entry: connect storage, ensure the schema, and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    let cfg = load_config()?;

    let db = models::db::connect_with_config(&cfg.database).await?;
    models::db::ensure_schema(&db).await?;

    let app = build_app(db);

    let listener = TcpListener::bind(cfg.server.bind_addr()).await?;
    let addr = listener.local_addr()?;
    info!(%addr, "employee api listening");
    axum::serve(listener, app).await?;
    Ok(())
}
