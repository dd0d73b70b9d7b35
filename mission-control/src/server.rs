//! REST deployment endpoint.
//!
//! A single route, `POST /deployRover`, accepting the deployment request
//! as JSON and answering with the rover's final state or a structured
//! error body.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use marsrover::{DeployError, Deployment, DeploymentEngine};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Shared application state: one engine, and thus one occupancy grid, for
/// the lifetime of the server.
///
/// The mutex is held for the whole of a single deployment, which
/// serializes every read-then-check-then-settle sequence on the grid. The
/// replay is synchronous and in-memory, so no await point ever occurs
/// while the lock is held.
#[derive(Clone)]
pub struct AppState {
    engine: Arc<Mutex<DeploymentEngine>>,
}

impl AppState {
    /// State over the default 99x99 surface.
    pub fn new() -> Self {
        Self {
            engine: Arc::new(Mutex::new(DeploymentEngine::new())),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Request body for `POST /deployRover`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployRequest {
    /// Start cell and facing, e.g. `3,4,N`.
    pub current_coordinates: String,
    /// Command sequence, e.g. `f,f,r,f,f`.
    pub commands: String,
}

/// Response body for a settled deployment.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployResponse {
    pub x_coordinate: i32,
    pub y_coordinate: i32,
    pub final_direction: String,
}

impl From<Deployment> for DeployResponse {
    fn from(deployment: Deployment) -> Self {
        Self {
            x_coordinate: deployment.position.x,
            y_coordinate: deployment.position.y,
            final_direction: deployment.facing.to_string(),
        }
    }
}

/// Error body returned for rejected deployments.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

/// Wrapper mapping [`DeployError`] onto HTTP responses.
#[derive(Debug)]
pub struct ApiError(pub DeployError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self.0 {
            DeployError::InvalidFormat => (StatusCode::BAD_REQUEST, "INVALID_FORMAT"),
            DeployError::InvalidDirection(_) => (StatusCode::BAD_REQUEST, "INVALID_DIRECTION"),
            DeployError::InvalidCommand(_) => (StatusCode::BAD_REQUEST, "INVALID_COMMAND"),
            DeployError::OutOfBounds => (StatusCode::UNPROCESSABLE_ENTITY, "OUT_OF_BOUNDS"),
            DeployError::OccupiedStart => (StatusCode::CONFLICT, "OCCUPIED"),
        };
        let body = ErrorResponse {
            error: self.0.to_string(),
            code: code.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Deploy a rover and replay its command sequence.
pub async fn deploy_rover(
    State(state): State<AppState>,
    Json(request): Json<DeployRequest>,
) -> Result<Json<DeployResponse>, ApiError> {
    // A deployment writes the grid only once, at the final settle, so a
    // poisoned lock cannot hide a half-updated grid; keep serving.
    let mut engine = match state.engine.lock() {
        Ok(engine) => engine,
        Err(poisoned) => poisoned.into_inner(),
    };
    match engine.deploy(&request.current_coordinates, &request.commands) {
        Ok(deployment) => {
            tracing::info!(
                x = deployment.position.x,
                y = deployment.position.y,
                facing = %deployment.facing,
                "rover settled"
            );
            Ok(Json(deployment.into()))
        }
        Err(err) => {
            tracing::warn!(error = %err, "deployment rejected");
            Err(ApiError(err))
        }
    }
}

/// Create the deployment API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/deployRover", post(deploy_rover))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve the endpoint until the process is stopped.
pub async fn serve(addr: SocketAddr) -> std::io::Result<()> {
    let app = create_router(AppState::new());
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("mission control listening on {}", addr);
    axum::serve(listener, app).await
}
