use axum::{Json, Router, http::Method, routing::get};

use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::expenses;
use api_types::health::HealthStatus;
use api_types::response::ApiResponse;
use engine::Engine;

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<RwLock<Engine>>,
}

async fn health() -> Json<ApiResponse<HealthStatus>> {
    Json(ApiResponse::ok(
        "Expense API is running",
        HealthStatus {
            status: "ok".to_string(),
        },
    ))
}

/// The API is consumed by browser frontends served from anywhere, so CORS
/// stays wide open.
fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
}

fn router(state: ServerState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/expenses", get(expenses::list).post(expenses::create))
        .route(
            "/expenses/{id}",
            get(expenses::get)
                .put(expenses::update)
                .delete(expenses::delete),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors())
        .with_state(state)
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    let state = ServerState {
        engine: Arc::new(RwLock::new(engine)),
    };

    axum::serve(listener, router(state)).await
}
