//! Axum route handlers for the Generation JSON API.
//!
//! Same pipeline as the writer page, without sessions. Callers authenticate
//! every request with the `x-app-passcode` header.

use axum::{extract::State, http::HeaderMap, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::generation::generator::{summarize, write_blogpost};
use crate::generation::tone::Tone;
use crate::session::passcode_matches;
use crate::state::AppState;

pub const PASSCODE_HEADER: &str = "x-app-passcode";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SkeletonRequest {
    pub field_of_work: String,
    // Accepted for parity with the writer form; not used by any prompt
    #[allow(dead_code)]
    #[serde(default)]
    pub example_posts: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SkeletonResponse {
    pub skeleton: String,
}

#[derive(Debug, Deserialize)]
pub struct BlogpostRequest {
    pub skeleton: String,
    #[serde(default)]
    pub tone: Tone,
}

#[derive(Debug, Serialize)]
pub struct BlogpostResponse {
    pub blogpost: String,
    pub tone: Tone,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

fn require_passcode(headers: &HeaderMap, state: &AppState) -> Result<(), AppError> {
    let entered = headers
        .get(PASSCODE_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or(AppError::Unauthorized)?;

    if passcode_matches(entered, &state.config.app_passcode) {
        Ok(())
    } else {
        Err(AppError::Unauthorized)
    }
}

/// POST /api/v1/skeleton
pub async fn handle_skeleton(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<SkeletonRequest>,
) -> Result<Json<SkeletonResponse>, AppError> {
    require_passcode(&headers, &state)?;

    if request.field_of_work.trim().is_empty() {
        return Err(AppError::Validation(
            "field_of_work cannot be empty".to_string(),
        ));
    }

    info!("API skeleton request");
    let skeleton = summarize(state.llm.as_ref(), &request.field_of_work).await?;

    Ok(Json(SkeletonResponse { skeleton }))
}

/// POST /api/v1/blogpost
pub async fn handle_blogpost(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<BlogpostRequest>,
) -> Result<Json<BlogpostResponse>, AppError> {
    require_passcode(&headers, &state)?;

    if request.skeleton.trim().is_empty() {
        return Err(AppError::Validation("skeleton cannot be empty".to_string()));
    }

    info!("API blogpost request (tone '{}')", request.tone.label());
    let blogpost = write_blogpost(state.llm.as_ref(), &request.skeleton, request.tone).await?;

    Ok(Json(BlogpostResponse {
        blogpost,
        tone: request.tone,
    }))
}
