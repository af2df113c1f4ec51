//! HTTP layer - axum router, shared state and server startup.
//!
//! Handlers only extract parameters and call the services; status mapping for
//! failures lives in [`error`].

pub mod error;
pub mod extractors;
pub mod health;
pub mod investments;
pub mod projects;

use crate::config::app::ServerConfig;
use crate::core::{InvestmentService, ProjectService};
use crate::errors::Result;
use crate::repository::{InvestmentRepository, ProjectRepository};
use axum::{
    Router,
    routing::{get, post},
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

/// Shared state available to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Project operations
    pub projects: Arc<ProjectService>,
    /// Investment operations
    pub investments: Arc<InvestmentService>,
    /// Value reported by the profile endpoint
    pub profile: Arc<str>,
}

impl AppState {
    /// Builds the services on top of the given repositories.
    #[must_use]
    pub fn new(
        projects: Arc<dyn ProjectRepository>,
        investments: Arc<dyn InvestmentRepository>,
        profile: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            projects: Arc::new(ProjectService::new(projects)),
            investments: Arc::new(InvestmentService::new(investments)),
            profile: profile.into(),
        }
    }
}

/// Build the application router with all routes.
///
/// Collection routes answer both with and without the trailing slash.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    Router::new()
        .route("/health", get(health::health_check))
        // Projects
        .route(
            "/api/projects",
            get(projects::list_projects).post(projects::create_project),
        )
        .route(
            "/api/projects/",
            get(projects::list_projects).post(projects::create_project),
        )
        .route(
            "/api/projects/{id}",
            get(projects::get_project)
                .put(projects::update_project)
                .delete(projects::delete_project),
        )
        // Investments
        .route("/api/investments", post(investments::create_investment))
        .route("/api/investments/", post(investments::create_investment))
        .route("/api/investments/profile", get(investments::profile))
        .route(
            "/api/investments/project/{project_id}",
            get(investments::list_by_project),
        )
        .route(
            "/api/investments/investor/{name}",
            get(investments::list_by_investor),
        )
        .route(
            "/api/investments/{id}",
            get(investments::get_investment)
                .put(investments::update_investment)
                .delete(investments::delete_investment),
        )
        .layer(middleware)
        .with_state(state)
}

/// Bind the listener and serve until Ctrl+C / SIGTERM.
pub async fn serve(config: &ServerConfig, state: AppState) -> Result<()> {
    let app = build_router(state);

    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    info!("Starting crowdfunding API on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            warn!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            warn!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
