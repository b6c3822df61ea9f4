use super::view;
use super::AppState;
use crate::core::classifier;
use crate::core::form::FormInput;
use crate::core::state::Outcome;
use crate::domain::model::{Classification, EntryId, EntryView};
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::{Form, Json};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use std::time::Instant;

static START_TIME: LazyLock<Instant> = LazyLock::new(Instant::now);

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(what) => (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({ "error": format!("no pantry item {}", what) })),
            )
                .into_response(),
        }
    }
}

fn parse_id(raw: &str) -> Result<EntryId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::NotFound(raw.to_string()))
}

/// Accepts `2`, `"2"` or nothing; parsing happens in the form handler.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum QuantityInput {
    Number(f64),
    Text(String),
}

#[derive(Debug, Deserialize)]
pub struct CreateRequest {
    pub name: String,
    pub quantity: Option<QuantityInput>,
}

#[derive(Debug, Deserialize)]
pub struct AdjustRequest {
    pub delta: f64,
}

#[derive(Debug, Deserialize)]
pub struct AdjustForm {
    #[serde(default)]
    pub delta: String,
}

#[derive(Debug, Deserialize)]
pub struct ClassifyQuery {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    uptime: u64,
}

// HTML page

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(view::render_page(&state.pantry.snapshot()))
}

pub async fn add_item_form(State(state): State<AppState>, Form(input): Form<FormInput>) -> Redirect {
    state.pantry.submit(input);
    Redirect::to("/")
}

pub async fn adjust_item_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<AdjustForm>,
) -> Redirect {
    match (id.parse::<EntryId>(), form.delta.trim().parse::<f64>()) {
        (Ok(id), Ok(delta)) => {
            state.pantry.adjust(id, delta);
        }
        _ => tracing::warn!("Ignoring adjust request for {} ({:?})", id, form.delta),
    }
    Redirect::to("/")
}

pub async fn remove_item_form(State(state): State<AppState>, Path(id): Path<String>) -> Redirect {
    if let Ok(id) = id.parse::<EntryId>() {
        state.pantry.start_removal(id);
    }
    Redirect::to("/")
}

// JSON API

pub async fn list_items(State(state): State<AppState>) -> Json<Vec<EntryView>> {
    let snapshot = state.pantry.snapshot();
    Json(snapshot.entries().iter().map(EntryView::from).collect())
}

pub async fn create_item(State(state): State<AppState>, Json(request): Json<CreateRequest>) -> Response {
    let quantity = match request.quantity {
        Some(QuantityInput::Number(n)) => n.to_string(),
        Some(QuantityInput::Text(text)) => text,
        None => String::new(),
    };

    match state.pantry.submit(FormInput::new(request.name, quantity)) {
        Some(entry) => (StatusCode::CREATED, Json(EntryView::from(&entry))).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

pub async fn adjust_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<AdjustRequest>,
) -> Result<Json<EntryView>, ApiError> {
    let id = parse_id(&id)?;
    state.pantry.adjust(id, request.delta);

    state
        .pantry
        .get(id)
        .map(|entry| Json(EntryView::from(&entry)))
        .ok_or_else(|| ApiError::NotFound(id.to_string()))
}

pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;

    match state.pantry.start_removal(id) {
        Outcome::RemovalStarted(_) => Ok(StatusCode::ACCEPTED),
        // already on its way out
        _ if state.pantry.get(id).is_some() => Ok(StatusCode::ACCEPTED),
        _ => Err(ApiError::NotFound(id.to_string())),
    }
}

pub async fn classify(Query(query): Query<ClassifyQuery>) -> Json<Classification> {
    Json(classifier::classify(&query.name))
}

pub async fn health() -> impl IntoResponse {
    let body = HealthResponse {
        status: "up",
        version: env!("CARGO_PKG_VERSION"),
        uptime: START_TIME.elapsed().as_secs(),
    };

    (
        [
            (header::CACHE_CONTROL, "no-store, no-cache, must-revalidate"),
            (header::PRAGMA, "no-cache"),
        ],
        Json(body),
    )
}
