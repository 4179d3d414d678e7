//! Server setup and accept loop.
//!
//! # Responsibilities
//! - Build the router over the configured serving directory
//! - Accept connections until shutdown is signalled
//! - Spawn one task per connection, each inside its own span
//! - Drain in-flight connections before returning, up to `shutdown_timeout_secs`

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;
use tokio::time::timeout;
use tracing::Instrument;
use uuid::Uuid;

use crate::config::ServerConfig;
use crate::net::{serve_connection, ConnectionTracker, Listener, ListenerError};
use crate::routing::Router;
use crate::storage::{DiskStore, FileStore};

/// HTTP server: one request per connection, one task per connection.
pub struct HttpServer {
    router: Router,
    config: ServerConfig,
    tracker: ConnectionTracker,
}

impl HttpServer {
    /// Create a server serving files from `config.storage.directory`.
    pub fn new(config: ServerConfig) -> Self {
        let store = Arc::new(DiskStore::new(config.storage.directory.clone()));
        Self::with_store(config, store)
    }

    /// Create a server over an arbitrary file store.
    pub fn with_store(config: ServerConfig, store: Arc<dyn FileStore>) -> Self {
        Self {
            router: Router::new(store),
            config,
            tracker: ConnectionTracker::new(),
        }
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Handle to the in-flight connection count.
    pub fn tracker(&self) -> ConnectionTracker {
        self.tracker.clone()
    }

    /// Run the accept loop until `shutdown` fires, then wait for connections to finish.
    pub async fn run(
        self,
        listener: Listener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), ListenerError> {
        if let Ok(addr) = listener.local_addr() {
            tracing::info!(
                address = %addr,
                directory = %self.config.storage.directory.display(),
                "HTTP server starting"
            );
        }

        let read_buffer_size = self.config.listener.read_buffer_size;

        loop {
            tokio::select! {
                _ = shutdown.recv() => {
                    tracing::info!("Shutdown signal received, no longer accepting");
                    break;
                }
                accepted = listener.accept() => {
                    let (stream, peer, permit) = match accepted {
                        Ok(conn) => conn,
                        Err(ListenerError::Accept(e)) => {
                            tracing::warn!(error = %e, "Accept failed");
                            continue;
                        }
                        Err(e) => return Err(e),
                    };

                    let guard = self.tracker.track();
                    let router = self.router.clone();
                    let span = tracing::info_span!(
                        "connection",
                        connection_id = %guard.id(),
                        request_id = %Uuid::new_v4(),
                        peer_addr = %peer
                    );

                    tokio::spawn(
                        async move {
                            let _permit = permit;
                            let _guard = guard;
                            if let Err(e) = serve_connection(stream, router, read_buffer_size).await {
                                tracing::warn!(error = %e, "Connection error");
                            }
                        }
                        .instrument(span),
                    );
                }
            }
        }

        let in_flight = self.tracker.active_count();
        if in_flight > 0 {
            tracing::info!(in_flight, "Draining connections");
        }
        let deadline = Duration::from_secs(self.config.listener.shutdown_timeout_secs);
        if timeout(deadline, self.tracker.wait_for_drain()).await.is_err() {
            tracing::warn!(
                abandoned = self.tracker.active_count(),
                timeout_secs = deadline.as_secs(),
                "Drain deadline passed, abandoning connections"
            );
        }

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
