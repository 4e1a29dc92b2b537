use std::net::SocketAddr;
use std::sync::Arc;

use eventfinder_api::config::{ServerConfig, StoreBackend, StoreConfig};
use eventfinder_api::router::build_app_router;
use eventfinder_api::state::AppState;
use eventfinder_db::{DynamoEventStore, EventRepo, EventStore, InMemoryEventStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "eventfinder_api=debug,eventfinder_db=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Event store ---
    let store = build_event_store(&config.store).await;
    let event_repo = EventRepo::new(store);

    if let Err(err) = event_repo.health_check().await {
        tracing::warn!(error = %err, "Event store is not reachable, reads will use placeholders");
    }

    // --- App state ---
    let state = AppState { event_repo };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Create the process-wide event store handle.
async fn build_event_store(config: &StoreConfig) -> Arc<dyn EventStore> {
    match config.backend {
        StoreBackend::DynamoDb => {
            let client =
                eventfinder_db::create_client(&config.region, config.endpoint_url.as_deref())
                    .await;
            tracing::info!(
                region = %config.region,
                table = %config.table_name,
                endpoint = ?config.endpoint_url,
                "DynamoDB client created"
            );
            Arc::new(DynamoEventStore::new(client, &config.table_name))
        }
        StoreBackend::Memory => {
            tracing::info!("Using in-memory event store");
            Arc::new(InMemoryEventStore::new())
        }
    }
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
