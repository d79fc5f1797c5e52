//! Test server wrapper that starts the gateway on a random port

use std::net::SocketAddr;

use tokio_util::sync::CancellationToken;
use werewolf_config::Config;
use werewolf_server::{AppState, Server};

/// A running test server instance
pub struct TestServer {
    addr: SocketAddr,
    shutdown: CancellationToken,
    client: reqwest::Client,
}

impl TestServer {
    /// Start a test server with the given configuration and fresh stores
    pub async fn start(config: Config) -> anyhow::Result<Self> {
        Self::start_with_state(config, AppState::default()).await
    }

    /// Start a test server sharing externally owned stores
    ///
    /// Binds to port 0 for automatic port assignment. Keeping a clone of
    /// the state lets a test observe server-side mutations (e.g. issued
    /// email codes) without extra endpoints.
    pub async fn start_with_state(config: Config, state: AppState) -> anyhow::Result<Self> {
        let server = Server::with_state(&config, state);
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        // Bind the listener here so we know the actual port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        tokio::spawn(async move {
            axum::serve(listener, server.into_router())
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        let client = reqwest::Client::new();

        Ok(Self { addr, shutdown, client })
    }

    /// Base URL of the running test server
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// Get a reference to the HTTP client
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
