use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::service::ChatService;

// ─── Request / Response types ────────────────────────────────

/// Query-string shape of the original transport:
/// `GET /?input=...&lastResponse=...`
#[derive(Deserialize)]
pub struct AnswerQuery {
    #[serde(default)]
    input: String,
    #[serde(rename = "lastResponse")]
    last_response: Option<String>,
}

#[derive(Deserialize)]
struct AnswerRequest {
    input: String,
    #[serde(default)]
    last_reply: Option<String>,
}

#[derive(Serialize)]
struct AnswerResponse {
    reply: String,
}

// ─── Routes ──────────────────────────────────────────────────

pub fn routes() -> Router<Arc<ChatService>> {
    Router::new()
        .route("/", get(answer_text))
        .route("/answer", post(answer_json))
        .route("/healthz", get(|| async { "ok" }))
}

// ─── Handlers ────────────────────────────────────────────────

async fn answer_text(
    State(svc): State<Arc<ChatService>>,
    Query(query): Query<AnswerQuery>,
) -> Response {
    match svc.answer(&query.input, query.last_response.as_deref()) {
        Ok(reply) => reply.into_response(),
        Err(err) => config_error(err),
    }
}

async fn answer_json(
    State(svc): State<Arc<ChatService>>,
    Json(req): Json<AnswerRequest>,
) -> Response {
    match svc.answer(&req.input, req.last_reply.as_deref()) {
        Ok(reply) => Json(AnswerResponse { reply }).into_response(),
        Err(err) => config_error(err),
    }
}

fn config_error(err: retort_core::ConfigurationError) -> Response {
    tracing::error!(error = %err, "response tree configuration error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("configuration error: {err}"),
    )
        .into_response()
}
