use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use tracing::warn;

use relicvault_common::{today_utc, RelicVaultError};

use crate::AppState;

/// Number of entries the high-scores endpoint returns.
const HIGH_SCORES_LIMIT: usize = 10;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/", get(|| async { "ok" }))
        // Webview API
        .route("/api/get-daily-artifact", get(get_daily_artifact))
        .route("/api/submit-score", post(submit_score))
        .route("/api/get-high-scores", get(get_high_scores))
        .with_state(state)
        // CORS: the game runs inside the embedding host's webview
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
        // Logging layer: method + path only
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        )
}

// --- Request structs ---

/// Fields arrive as options so a missing one gets the envelope treatment
/// instead of a bare extractor rejection.
#[derive(Deserialize)]
pub struct SubmitScoreRequest {
    username: Option<String>,
    score: Option<i64>,
}

// --- Helpers ---

fn error_status(e: &RelicVaultError) -> StatusCode {
    match e {
        RelicVaultError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        RelicVaultError::NotFound(_) => StatusCode::NOT_FOUND,
        RelicVaultError::SourceUnavailable(_) | RelicVaultError::SchemaMismatch(_) => {
            StatusCode::BAD_GATEWAY
        }
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn failure(e: RelicVaultError) -> Response {
    (
        error_status(&e),
        Json(serde_json::json!({"success": false, "error": e.to_string()})),
    )
        .into_response()
}

// --- Handlers ---

pub async fn get_daily_artifact(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.source.daily_artifact(today_utc()).await {
        Ok(artifact) => {
            Json(serde_json::json!({"success": true, "data": artifact})).into_response()
        }
        Err(e) => {
            warn!(error = %e, "Failed to load daily artifact");
            failure(e)
        }
    }
}

pub async fn submit_score(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SubmitScoreRequest>,
) -> impl IntoResponse {
    let Some(username) = body.username else {
        return failure(RelicVaultError::InvalidInput("username is required".into()));
    };
    let Some(score) = body.score else {
        return failure(RelicVaultError::InvalidInput("score is required".into()));
    };

    match state.leaderboard.submit(&username, score).await {
        Ok(()) => Json(serde_json::json!({"success": true})).into_response(),
        Err(e) => failure(e),
    }
}

pub async fn get_high_scores(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.leaderboard.top(HIGH_SCORES_LIMIT).await {
        Ok(entries) => {
            Json(serde_json::json!({"success": true, "data": entries})).into_response()
        }
        Err(e) => {
            warn!(error = %e, "Failed to load high scores");
            failure(e)
        }
    }
}
