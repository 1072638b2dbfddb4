use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, Redirect},
    Extension, Form, Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{
    error::AppResult,
    middleware::SessionId,
    models::{Category, MovieId, UiEvent, ViewState},
    ui::{self, templates},
};

use super::AppState;

// Form bodies

#[derive(Debug, Deserialize)]
pub struct SelectForm {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct BrowseForm {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Renders the session's current view
pub async fn index(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
) -> Html<String> {
    let view_state = state.view_state(session).await;
    let page = ui::render(&view_state, &state.catalog).await;
    Html(templates::render_page(&page))
}

/// Card click: open the details view for the card's movie
pub async fn select_movie(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Form(form): Form<SelectForm>,
) -> AppResult<Redirect> {
    let id = MovieId::from_form_value(&form.id)?;

    tracing::info!(session_id = %session, movie_id = %id, "Movie selected");
    state.dispatch(session, UiEvent::SelectMovie(id)).await;

    Ok(Redirect::to("/"))
}

/// "Back" on the details view
pub async fn back(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
) -> Redirect {
    state.dispatch(session, UiEvent::Back).await;
    Redirect::to("/")
}

/// Search box / category select submission
///
/// Fields left out of the form keep their current value.
pub async fn browse(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Form(form): Form<BrowseForm>,
) -> AppResult<Redirect> {
    let category = form
        .category
        .as_deref()
        .map(str::parse::<Category>)
        .transpose()?;

    state
        .dispatch(
            session,
            UiEvent::Browse {
                query: form.query,
                category,
            },
        )
        .await;

    Ok(Redirect::to("/"))
}

/// Current view state as JSON
pub async fn get_session(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
) -> Json<ViewState> {
    Json(state.view_state(session).await)
}
