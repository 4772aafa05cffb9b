//! Axum route handlers for the writer page.
//!
//! Every POST redirects back to `/` once the session is updated, except a failed
//! passcode attempt, which re-renders the page with the inline error.

use axum::{
    extract::{Form, State},
    http::{header, HeaderMap},
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::generation::generator::{display_result, summarize, write_blogpost};
use crate::generation::tone::Tone;
use crate::session::{session_cookie, session_id_from_headers};
use crate::state::AppState;
use crate::ui::pages::{writer_page, INCORRECT_PASSCODE};

#[derive(Debug, Deserialize)]
pub struct PasscodeForm {
    pub passcode: String,
}

#[derive(Debug, Deserialize)]
pub struct SkeletonForm {
    pub field_of_work: String,
    #[serde(default)]
    pub example_posts: String,
}

#[derive(Debug, Deserialize)]
pub struct BlogpostForm {
    /// The skeleton text area, including any user edits. Absent until a skeleton exists.
    pub skeleton: Option<String>,
    #[serde(default)]
    pub tone: Tone,
}

fn with_session_cookie(id: Uuid, response: impl IntoResponse) -> Response {
    ([(header::SET_COOKIE, session_cookie(id))], response).into_response()
}

fn back_to_page(id: Uuid) -> Response {
    with_session_cookie(id, Redirect::to("/"))
}

/// GET /
pub async fn handle_index(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let (id, session) = state
        .sessions
        .get_or_create(session_id_from_headers(&headers))
        .await;
    with_session_cookie(id, Html(writer_page(&session, None)))
}

/// POST /authenticate
pub async fn handle_authenticate(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<PasscodeForm>,
) -> Response {
    let (id, session) = state
        .sessions
        .get_or_create(session_id_from_headers(&headers))
        .await;

    if session.is_authenticated() {
        return back_to_page(id);
    }

    let passcode = &state.config.app_passcode;
    let session = state
        .sessions
        .update(id, |s| {
            s.authenticate(&form.passcode, passcode);
        })
        .await;

    if session.is_authenticated() {
        info!("Session {id} authenticated");
        back_to_page(id)
    } else {
        warn!("Session {id} entered an incorrect passcode");
        with_session_cookie(id, Html(writer_page(&session, Some(INCORRECT_PASSCODE))))
    }
}

/// POST /skeleton
///
/// Drafts a skeleton for the field of work and stores it (or its `Error: ` text)
/// in the session.
pub async fn handle_generate_skeleton(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<SkeletonForm>,
) -> Response {
    let (id, session) = state
        .sessions
        .get_or_create(session_id_from_headers(&headers))
        .await;

    if !session.is_authenticated() {
        return back_to_page(id);
    }

    info!("Generating skeleton for session {id}");
    let skeleton = display_result(summarize(state.llm.as_ref(), &form.field_of_work).await);

    state
        .sessions
        .update(id, |s| {
            s.field_of_work = form.field_of_work;
            s.example_posts = form.example_posts;
            s.skeleton = Some(skeleton);
        })
        .await;

    back_to_page(id)
}

/// POST /blogpost
///
/// Expands the submitted (or stored) skeleton in the chosen tone. Without any
/// skeleton only the tone choice is remembered.
pub async fn handle_generate_blogpost(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<BlogpostForm>,
) -> Response {
    let (id, session) = state
        .sessions
        .get_or_create(session_id_from_headers(&headers))
        .await;

    if !session.is_authenticated() {
        return back_to_page(id);
    }

    let tone = form.tone;
    let Some(skeleton) = form.skeleton.or(session.skeleton) else {
        warn!("Session {id} requested a blogpost before generating a skeleton");
        state.sessions.update(id, |s| s.tone = tone).await;
        return back_to_page(id);
    };

    info!("Generating blogpost for session {id}");
    let blogpost = display_result(write_blogpost(state.llm.as_ref(), &skeleton, tone).await);

    state
        .sessions
        .update(id, |s| {
            s.tone = tone;
            s.skeleton = Some(skeleton);
            s.blogpost = Some(blogpost);
        })
        .await;

    back_to_page(id)
}
