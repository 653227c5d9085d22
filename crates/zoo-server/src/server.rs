use std::sync::Arc;

use tokio::net::TcpListener;
use zoo_store::AnimalStore;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::handler::AppState;
use crate::router::build_router;

/// Anekazoo HTTP server.
pub struct ZooServer {
    config: ServerConfig,
    state: AppState,
}

impl ZooServer {
    pub fn new(config: ServerConfig, store: Arc<dyn AnimalStore>) -> Self {
        Self {
            config,
            state: AppState::new(store),
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(self.state.clone())
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router();
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("Anekazoo server listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zoo_store::InMemoryAnimalStore;

    #[test]
    fn server_construction() {
        let server = ZooServer::new(ServerConfig::default(), Arc::new(InMemoryAnimalStore::new()));
        assert_eq!(server.config().bind_addr, "0.0.0.0:8080".parse().unwrap());
    }

    #[test]
    fn router_builds() {
        let server = ZooServer::new(ServerConfig::default(), Arc::new(InMemoryAnimalStore::new()));
        let _router = server.router();
    }
}
