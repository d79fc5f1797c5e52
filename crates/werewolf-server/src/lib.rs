//! HTTP server for the werewolf gateway
//!
//! Assembles the feature routers and the request/error pipeline. Pipeline
//! layers, innermost first: domain error translator → internal fault
//! boundary → request tracing → trace id propagator. The propagator is
//! outermost so every response — success, domain error, validation error,
//! or converted fault — leaves with its `x-request-id` stamped.

mod auth;
mod errors;
mod extract;
mod fault;
mod games;
mod health;
mod rooms;
mod stubs;
mod trace_id;

use std::net::SocketAddr;

use axum::Router;
use tower_http::trace::TraceLayer;
use werewolf_auth::CodeStore;
use werewolf_config::Config;
use werewolf_game::RoomStore;

pub use errors::ApiError;
pub use extract::ValidatedJson;

/// Shared stores backing the route handlers
///
/// Cloneable handle set; the default gives fresh empty stores. Tests hand a
/// pre-built instance to [`Server::with_state`] to observe mutations (e.g.
/// issued email codes) from outside the server.
#[derive(Debug, Default, Clone)]
pub struct AppState {
    pub rooms: RoomStore,
    pub codes: CodeStore,
}

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration with fresh stores
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self::with_state(config, AppState::default())
    }

    /// Build the server from configuration and externally owned stores
    #[must_use]
    pub fn with_state(config: &Config, state: AppState) -> Self {
        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 8000)));

        // Build base router with feature routes
        let mut app = Router::new();

        // Health check
        if config.server.health.enabled {
            app = app.route(&config.server.health.path, axum::routing::get(health::healthz_handler));
        }

        // Auth routes
        app = app.merge(auth::router(auth::AuthState { codes: state.codes }));

        // Room lifecycle routes
        app = app.merge(rooms::router(rooms::RoomsState {
            store: state.rooms,
            min_seats: config.rooms.min_seats,
            max_seats: config.rooms.max_seats,
        }));

        // Gameplay routes
        app = app.merge(games::router());

        // Feature stubs (ai, replay, stt, billing, stats)
        app = app.merge(stubs::router());

        // Apply middleware layers (innermost first)

        // Domain error translator (closest to the handlers)
        app = app.layer(axum::middleware::from_fn(errors::domain_error_middleware));

        // Internal fault boundary (wraps handlers and the translator)
        app = app.layer(axum::middleware::from_fn(fault::fault_boundary_middleware));

        // Tracing
        app = app.layer(TraceLayer::new_for_http());

        // Trace id propagation (outermost: stamps every exit path)
        app = app.layer(axum::middleware::from_fn(trace_id::trace_id_middleware));

        Self {
            router: app,
            listen_address,
        }
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    #[must_use]
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}
