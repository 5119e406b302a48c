use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::bearer_token;
use crate::errors::AppError;
use crate::models::{AuthState, Message, SuggestedQuestion};
use crate::services::conversation::{ActionOutcome, ChatSession};
use crate::services::identity::resolve_guest;
use crate::state::AppState;

#[derive(Serialize)]
pub struct SessionView {
    id: String,
    created_at: DateTime<Utc>,
    messages: Vec<Message>,
    suggestions: Vec<SuggestedQuestion>,
}

impl From<&ChatSession> for SessionView {
    fn from(session: &ChatSession) -> Self {
        Self {
            id: session.id.clone(),
            created_at: session.created_at,
            messages: session.messages.clone(),
            suggestions: session.suggestions(),
        }
    }
}

#[derive(Deserialize)]
pub struct TextRequest {
    pub text: String,
}

#[derive(Deserialize)]
pub struct ActionRequest {
    pub action_id: String,
}

#[derive(Serialize, Default)]
pub struct ActionResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    navigate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply: Option<Message>,
}

async fn guest(state: &AppState, headers: &HeaderMap) -> AuthState {
    resolve_guest(state.identity.as_ref(), bearer_token(headers)).await
}

fn require_text(text: &str) -> Result<(), AppError> {
    if text.trim().is_empty() {
        return Err(AppError::BadRequest("text must not be empty".to_string()));
    }
    Ok(())
}

// POST /api/chat/sessions
pub async fn create_session(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<SessionView>) {
    let session = state.new_session();
    let view = SessionView::from(&session);
    let id = state.sessions.insert(session);
    tracing::info!(session = %id, "chat session started");
    (StatusCode::CREATED, Json(view))
}

// GET /api/chat/sessions/:id
pub async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SessionView>, AppError> {
    let session = state.sessions.lock(&id).await?;
    Ok(Json(SessionView::from(&*session)))
}

// DELETE /api/chat/sessions/:id
pub async fn delete_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    if !state.sessions.remove(&id) {
        return Err(AppError::NotFound(format!("chat session {id}")));
    }
    tracing::info!(session = %id, "chat session closed");
    Ok(StatusCode::NO_CONTENT)
}

// POST /api/chat/sessions/:id/messages
pub async fn send_message(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(req): Json<TextRequest>,
) -> Result<Json<Message>, AppError> {
    require_text(&req.text)?;
    let mut session = state.sessions.acquire(&id)?;
    let auth = guest(&state, &headers).await;

    state
        .assistant
        .submit_utterance(&mut session, &req.text, &auth)
        .await
        .map(Json)
        .ok_or_else(|| AppError::BadRequest("text must not be empty".to_string()))
}

// POST /api/chat/sessions/:id/suggestions
pub async fn click_suggestion(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(req): Json<TextRequest>,
) -> Result<Json<Message>, AppError> {
    require_text(&req.text)?;
    let mut session = state.sessions.acquire(&id)?;
    let auth = guest(&state, &headers).await;

    state
        .assistant
        .click_suggestion(&mut session, &req.text, &auth)
        .await
        .map(Json)
        .ok_or_else(|| AppError::BadRequest("text must not be empty".to_string()))
}

// POST /api/chat/sessions/:id/actions
pub async fn click_action(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(req): Json<ActionRequest>,
) -> Result<Json<ActionResponse>, AppError> {
    let mut session = state.sessions.acquire(&id)?;
    let auth = guest(&state, &headers).await;

    let response = match state
        .assistant
        .click_action(&mut session, &req.action_id, &auth)
        .await
    {
        ActionOutcome::Navigate(path) => ActionResponse {
            navigate: Some(path),
            reply: None,
        },
        ActionOutcome::Replied(message) => ActionResponse {
            navigate: None,
            reply: Some(message),
        },
        ActionOutcome::Ignored => ActionResponse::default(),
    };
    Ok(Json(response))
}

// POST /api/chat/sessions/:id/clear
pub async fn clear_conversation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SessionView>, AppError> {
    let mut session = state.sessions.acquire(&id)?;
    state.assistant.clear_conversation(&mut session);
    Ok(Json(SessionView::from(&*session)))
}
