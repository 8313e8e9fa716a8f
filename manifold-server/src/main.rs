//! Manifold demo server binary

use axum::{
    routing::{get, post},
    Router,
};
use manifold_server::{handlers, AppState, UserStore};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,manifold_core=debug,manifold_server=debug")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Manifold demo server v{}", env!("CARGO_PKG_VERSION"));

    // Initialize Prometheus metrics
    manifold_server::metrics::init_prometheus()?;
    manifold_server::metrics::init_metrics();

    // Create application state
    let store = Arc::new(UserStore::new());
    let state = AppState::new(store);

    // Build the application
    let app = Router::new()
        // User directory endpoints
        .route("/v1/users", post(handlers::create_user))
        .route(
            "/v1/users/:id",
            get(handlers::get_user).delete(handlers::delete_user),
        )
        .route("/v1/users/batch", post(handlers::batch_create_users))
        // Health checks
        .route("/health/live", get(handlers::health_live))
        // Metrics
        .route("/metrics", get(handlers::metrics_endpoint))
        // Add state
        .with_state(state)
        // Add middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    // Get bind address from environment or use default
    let addr: SocketAddr = std::env::var("BIND_ADDRESS")
        .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
        .parse()?;

    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    let server = axum::serve(listener, app);

    // Set up shutdown signal handler
    let shutdown_signal = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install CTRL+C signal handler");
        info!("Received shutdown signal, shutting down gracefully...");
    };

    // Run server with graceful shutdown
    server
        .with_graceful_shutdown(shutdown_signal)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    info!("Server shutdown complete");
    Ok(())
}
