//! HTTP surface: the chat page, the generate endpoint, and clear.

use crate::error::ApiError;
use crate::pages;
use crate::session;
use crate::state::AppState;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use axum_extra::extract::SignedCookieJar;
use muse_ai::CompositionRequest;
use muse_conversation::Turn;
use muse_core::SessionId;
use serde::{Deserialize, Serialize};
use tower_http::services::ServeDir;

/// Body of `POST /api/generate`.
///
/// Selector fields are optional; absent (or null) selectors fall back to
/// the form's defaults. Unrecognized tags degrade further inside the
/// composer's lookup tables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateRequest {
    /// The raw user prompt.
    #[serde(default)]
    pub prompt: Option<String>,
    /// Content category tag; defaults to "story".
    #[serde(default)]
    pub category: Option<String>,
    /// Writing style tag; defaults to "normal".
    #[serde(default)]
    pub style: Option<String>,
    /// Reply language tag; defaults to "vi".
    #[serde(default)]
    pub language: Option<String>,
}

/// Successful body of `POST /api/generate`.
#[derive(Debug, Serialize)]
pub struct GenerateReply {
    /// Always true on this path.
    pub ok: bool,
    /// The assistant's reply text.
    pub assistant: String,
}

/// Body of `POST /clear`.
#[derive(Debug, Serialize)]
pub struct ClearReply {
    /// Always true.
    pub ok: bool,
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/generate", post(generate))
        .route("/clear", post(clear))
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
}

/// `GET /` — the chat page with the session's transcript.
async fn index(State(state): State<AppState>, jar: SignedCookieJar) -> Response {
    let (jar, session_id) = session::establish(jar, &state.session);

    let turns = match state.store.ensure(session_id).await {
        Ok(()) => match state.store.snapshot(session_id).await {
            Ok(turns) => turns,
            Err(e) => {
                tracing::error!(error = %e, %session_id, "failed to read transcript");
                Vec::new()
            }
        },
        Err(e) => {
            tracing::error!(error = %e, %session_id, "failed to initialize session");
            Vec::new()
        }
    };

    (jar, Html(pages::render_index(&turns))).into_response()
}

/// `POST /api/generate` — compose, forward, record, reply.
async fn generate(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    body: Result<Json<GenerateRequest>, JsonRejection>,
) -> Response {
    let (jar, session_id) = session::establish(jar, &state.session);

    // A malformed body degrades to an empty request, which the
    // empty-prompt check then rejects with the structured payload.
    let request = match body {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "malformed generate body");
            GenerateRequest::default()
        }
    };

    // The jar rides along on both paths so a newly minted session cookie
    // reaches the client even when the generate call fails.
    match run_generate(&state, session_id, request).await {
        Ok(assistant) => (jar, Json(GenerateReply { ok: true, assistant })).into_response(),
        Err(e) => (jar, e).into_response(),
    }
}

/// `POST /clear` — discard the session's conversation.
async fn clear(State(state): State<AppState>, jar: SignedCookieJar) -> Response {
    if let Some(session_id) = session::session_id(&jar) {
        if let Err(e) = state.store.reset(session_id).await {
            tracing::error!(error = %e, %session_id, "failed to reset conversation");
            return ApiError::from(e).into_response();
        }
        tracing::info!(%session_id, "conversation cleared");
    }

    (jar, Json(ClearReply { ok: true })).into_response()
}

/// The generate flow, separated from cookie handling for testability.
///
/// Ordering contract: the user turn is appended before the remote call,
/// the assistant turn after it, and neither step may be reordered — the
/// stored log reads as a causal transcript. On a failed remote call the
/// user turn stays recorded and no assistant turn is appended.
pub(crate) async fn run_generate(
    state: &AppState,
    session_id: SessionId,
    request: GenerateRequest,
) -> Result<String, ApiError> {
    let prompt = request.prompt.unwrap_or_default().trim().to_string();
    if prompt.is_empty() {
        return Err(ApiError::EmptyPrompt);
    }

    let composition = CompositionRequest::from_tags(
        prompt.clone(),
        request.category.as_deref().unwrap_or("story"),
        request.style.as_deref().unwrap_or("normal"),
        request.language.as_deref().unwrap_or("vi"),
    );

    state.store.ensure(session_id).await?;
    state.store.append(session_id, Turn::user(prompt)).await?;

    let instruction = composition.compose();
    tracing::debug!(%session_id, instruction_len = instruction.len(), "forwarding instruction");

    let assistant = state.generator.generate(&instruction).await?;

    state
        .store
        .append(session_id, Turn::assistant(assistant.clone()))
        .await?;

    Ok(assistant)
}
