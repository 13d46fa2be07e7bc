//! HTTP front end for the intent router.
//!
//! Routes:
//! - `GET /health` - liveness plus model client readiness
//! - `POST /v1/route` - `{"text": "..."}` in, `{"intent": "...", "result": "..."}` out
//!
//! A model client failure is answered with `502 Bad Gateway`, never with an
//! empty result.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use orchestrator::{Brain, Intent, Orchestrator, OrchestratorError, Presenter, ReturnPresenter};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Model client shared by every request handler.
pub type SharedBrain = Arc<dyn Brain>;

#[derive(Clone)]
pub struct AppState {
    api_token: Option<String>,
    orchestrator: Arc<Orchestrator<SharedBrain>>,
}

impl AppState {
    /// Create state for the router. With `api_token` set, `/v1/route`
    /// requires `Authorization: Bearer <token>`.
    pub fn new(orchestrator: Orchestrator<SharedBrain>, api_token: Option<String>) -> Self {
        Self {
            api_token,
            orchestrator: Arc::new(orchestrator),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RouteRequest {
    text: String,
}

#[derive(Debug, Serialize)]
struct RouteResponse {
    intent: Intent,
    result: String,
}

#[derive(Debug, Serialize)]
struct Health {
    status: &'static str,
    brain: String,
    ready: bool,
}

/// Build the axum router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/v1/route", post(route_request))
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Json<Health> {
    let brain = state.orchestrator.brain();
    let ready = brain.is_ready().await;

    Json(Health {
        status: if ready { "ok" } else { "degraded" },
        brain: brain.name().to_string(),
        ready,
    })
}

async fn route_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<RouteRequest>,
) -> Result<Json<RouteResponse>, ApiError> {
    authorize(&state, &headers)?;

    let invocation = state.orchestrator.dispatch(&payload.text).await?;
    info!(intent = %invocation.intent, result_len = invocation.result.len(), "Routed request");

    // The response body is the output stage here: hand the result back as-is.
    let result = ReturnPresenter.present(invocation.result).await?;

    Ok(Json(RouteResponse {
        intent: invocation.intent,
        result,
    }))
}

fn authorize(state: &AppState, headers: &HeaderMap) -> Result<(), ApiError> {
    let Some(expected) = state.api_token.as_deref() else {
        return Ok(());
    };

    let Some(value) = headers.get(axum::http::header::AUTHORIZATION) else {
        return Err(ApiError::Unauthorized);
    };

    let Ok(value) = value.to_str() else {
        return Err(ApiError::Unauthorized);
    };

    let token = value.strip_prefix("Bearer ").unwrap_or(value);
    if token != expected {
        return Err(ApiError::Unauthorized);
    }

    Ok(())
}

#[derive(Debug)]
enum ApiError {
    Unauthorized,
    Routing(OrchestratorError),
}

impl From<OrchestratorError> for ApiError {
    fn from(err: OrchestratorError) -> Self {
        ApiError::Routing(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, kind) = match self {
            ApiError::Unauthorized => {
                warn!("Unauthorized request");
                (StatusCode::UNAUTHORIZED, "Unauthorized".to_string(), "auth_error")
            }
            ApiError::Routing(err) => {
                warn!(error = %err, "Request failed");
                (StatusCode::BAD_GATEWAY, err.to_string(), "model_error")
            }
        };

        let body = serde_json::json!({
            "error": {
                "message": message,
                "type": kind
            }
        });
        (status, Json(body)).into_response()
    }
}
