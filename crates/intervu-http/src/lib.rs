//! HTTP API for the InterVu backend.
//!
//! Exposes session creation and question lookup over REST (JSON bodies).
//!
//! | Method | Path                                               |
//! |--------|----------------------------------------------------|
//! | GET    | `/`                                                |
//! | GET    | `/api/v1/health`                                   |
//! | POST   | `/api/v1/auth/login`                               |
//! | POST   | `/api/v1/sessions/`                                |
//! | GET    | `/api/v1/sessions/catalog`                         |
//! | GET    | `/api/v1/sessions/{session_id}`                    |
//! | GET    | `/api/v1/sessions/{session_id}/questions/{sequence}` |

mod cors;
mod error;
pub mod routes;
mod state;

use axum::{
    routing::{get, post},
    Router,
};
use intervu_core::SessionStore;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer};

pub use cors::CorsConfig;
pub use error::ApiError;
pub use state::AppState;

/// Everything needed to run the server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    /// Deployment environment name, e.g. "development" or "production".
    pub environment: String,
    pub cors: CorsConfig,
}

/// Build the API router without cross-origin handling.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(routes::root))
        .route("/api/v1/health", get(routes::health::health))
        .route("/api/v1/auth/login", post(routes::auth::login))
        .route("/api/v1/sessions", post(routes::sessions::create_session))
        .route("/api/v1/sessions/", post(routes::sessions::create_session))
        .route("/api/v1/sessions/catalog", get(routes::sessions::catalog))
        .route(
            "/api/v1/sessions/{session_id}",
            get(routes::sessions::session_summary),
        )
        .route(
            "/api/v1/sessions/{session_id}/questions/{sequence}",
            get(routes::sessions::get_question),
        )
        .with_state(state)
}

/// Build the full application: router, shared state, panic handling and CORS.
pub fn app(config: &ServerConfig, store: Arc<SessionStore>) -> Result<Router, String> {
    let state = Arc::new(AppState::new(store, config.environment.clone()));
    let cors = config.cors.layer()?;
    Ok(with_layers(router(state), cors))
}

/// A panicking handler answers with a generic 500 instead of dropping the connection.
fn with_layers(router: Router, cors: CorsLayer) -> Router {
    router
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(cors)
}

/// Bind the listening socket for `addr`.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener, String> {
    TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Failed to bind HTTP server to {}: {}", addr, e))
}

/// Serve `app` on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<(), String>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        log::info!("HTTP server listening on http://{}", addr);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.await;
            log::info!("HTTP server shutting down");
        })
        .await
        .map_err(|e| format!("HTTP server error: {}", e))
}

// ============================================================================
// TESTS
// ============================================================================
