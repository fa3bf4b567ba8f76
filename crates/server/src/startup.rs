use std::{future::Future, net::SocketAddr, path::Path, time::Duration};

use axum::Router;
use configs::AppConfig;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes::{self, ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load `config.toml` (or `CONFIG_PATH`), falling back to environment
/// variables only when that file does not exist, then validate.
pub fn load_config() -> Result<AppConfig, StartupError> {
    load_config_from(Path::new(&configs::config_path()))
}

pub fn load_config_from(path: &Path) -> Result<AppConfig, StartupError> {
    let mut cfg = if path.exists() {
        configs::load_from_file(&path.to_string_lossy())
            .map_err(|e| StartupError::InvalidConfig(format!("{}: {e}", path.display())))?
    } else {
        AppConfig::from_env()
    };
    cfg.normalize_and_validate()
        .map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    Ok(cfg)
}

/// Connect, migrate and serve until `shutdown` resolves.
pub async fn run<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let db = models::db::connect_with_config(&cfg.database).await?;
    if cfg.database.run_migrations {
        models::db::migrate(&db).await?;
    }

    let timeout = cfg.store.request_timeout_ms.map(Duration::from_millis);
    let state = ServerState::new(db, timeout);
    let app: Router = routes::build_router(state, build_cors());

    let listener = tokio::net::TcpListener::bind((cfg.server.host.as_str(), cfg.server.port)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    info!(%addr, request_timeout_ms = ?cfg.store.request_timeout_ms, "starting server crate");
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    info!("server drained");
    Ok(())
}
