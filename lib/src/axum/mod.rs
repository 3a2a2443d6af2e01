pub mod askama;
pub mod error;
pub mod roles;
pub mod shell;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Extension;
use tower_http::trace::TraceLayer;

use crate::navigation::{self, Navigator};
use crate::{Config, Result};

pub type Router = axum::Router;

pub type ConfigExt<C = Config> = Extension<Arc<C>>;
pub type NavigatorExt = Extension<Arc<Navigator>>;

/// Path of the role options endpoint, relative to the base path.
pub const API_ROLES: &str = "/api/roles";
pub const API_ROLES_VALIDATE: &str = "/api/roles/validate";

/// Builds the shell router for the given navigator.
///
/// Every location under the base path goes through the navigator: redirect
/// entries are answered with an HTTP redirect, render entries with the HTML
/// shell mounting the view, and anything the table doesn't know with a 404.
pub fn router(navigator: Arc<Navigator>, config: &Config) -> Router {
    let history = navigator.history();
    let roles_path = history.href(API_ROLES);
    let validate_path = history.href(API_ROLES_VALIDATE);

    Router::new()
        .route(&roles_path, get(roles::list))
        .route(&validate_path, post(roles::validate))
        .fallback(shell::navigate)
        .layer(TraceLayer::new_for_http())
        .layer(Extension(Arc::new(config.clone())))
        .layer(Extension(navigator))
}

/// Initializes tracing, installs the process-wide navigator and starts the
/// web server. Returns once ctrl-c is received.
pub async fn start(config: Config) -> Result<()> {
    crate::tracing::init(&config).unwrap_or_else(|e| {
        log::warn!("failed to initialize tracing (perhaps it was already initialized?): {e}")
    });

    let navigator = navigation::install(config.history())?;
    let router = router(Arc::new(navigator.clone()), &config);

    let addr = config.address;
    tracing::info!(base = navigator.history().base(), "starting server at {addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed listening for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("initiating graceful shutdown");
}
