use std::future::Future;

use axum::Router;
use configs::AppConfig;
use dotenvy::dotenv;
use service::Stores;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

/// Wire stores and config into the router.
pub fn build_app(cfg: &AppConfig, stores: Stores) -> Result<Router, StartupError> {
    let cors = routes::build_cors(&cfg.cors)?;
    Ok(routes::build_router(AppState::from(stores), cors))
}

/// Public entry: load config from file/env, open the store and serve until the process is stopped
pub async fn run() -> anyhow::Result<()> {
    run_until(std::future::pending()).await
}

/// Same as [`run`] but returns once `shutdown` resolves, after in-flight requests finish.
pub async fn run_until<F>(shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    dotenv().ok();
    let cfg = AppConfig::load_and_validate()?;
    serve(cfg, shutdown).await
}

/// Serve with an already loaded and validated config until `shutdown` resolves.
pub async fn serve<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let stores = service::store::open(&cfg.database).await.map_err(StartupError::from)?;
    let app = build_app(&cfg, stores)?;

    let addr = cfg.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, origins = ?cfg.cors.allowed_origins, "record service listening");
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    info!("record service stopped");
    Ok(())
}
