//! HTTP server initialization and runtime setup.
//!
//! Handles the document-store connection, service wiring, and the Axum server
//! lifecycle including graceful shutdown.

use crate::application::services::{AuthService, CookiePolicy};
use crate::config::{Config, StorageBackend};
use crate::infrastructure::persistence::{MongoStore, Repositories};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - MongoDB client (or the in-memory store)
/// - Token service and cookie policy
/// - Axum HTTP server
///
/// The server stops accepting connections on Ctrl-C or `SIGTERM`, drains
/// in-flight requests, then closes the store connection.
///
/// # Errors
///
/// Returns an error if:
/// - The MongoDB URI is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let (repositories, store) = match config.storage_backend {
        StorageBackend::Mongo => {
            let uri = config
                .mongodb_uri
                .as_deref()
                .context("MONGODB_URI is required with the mongo storage backend")?;
            let store = MongoStore::connect(uri, &config.database_name)
                .await
                .context("Failed to configure MongoDB client")?;

            match store.ping().await {
                Ok(()) => tracing::info!("Connected to MongoDB database '{}'", store.database_name()),
                Err(e) => tracing::warn!(
                    "MongoDB is not reachable yet: {}. Requests will fail until it is.",
                    e
                ),
            }

            (Repositories::mongo(&store), Some(store))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; data is lost on restart");
            (Repositories::in_memory(), None)
        }
    };

    let auth_service = AuthService::new(
        &config.token.secret,
        config.token.ttl(),
        CookiePolicy::new(config.is_production()),
    );

    let state = AppState::new(repositories, auth_service);

    let app = NormalizePathLayer::trim_trailing_slash()
        .layer(app_router(state, &config.cors_origins));

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(store) = store {
        store.shutdown().await;
        tracing::info!("MongoDB connection closed");
    }

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C or, on Unix, `SIGTERM`.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
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
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
