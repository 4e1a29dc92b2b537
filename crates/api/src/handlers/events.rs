//! Handlers for listing and saving events.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use eventfinder_core::error::CoreError;
use eventfinder_core::event::{Event, NewEvent};
use eventfinder_core::zip_code::ZipCode;

use crate::error::{AppError, AppResult};
use crate::query::ZipParams;
use crate::state::AppState;

/// GET /events?zip=NNNNN
///
/// List events for a five-digit postal code. An invalid or missing `zip`
/// is rejected before the store is touched. Otherwise the response is
/// always a non-empty array: stored events, or generated placeholders when
/// there are none or the store is unavailable.
pub async fn list_events(
    State(state): State<AppState>,
    params: Result<Query<ZipParams>, QueryRejection>,
) -> AppResult<Json<Vec<Event>>> {
    let Query(params) = params.map_err(|e| CoreError::Validation(e.body_text()))?;
    let raw = params
        .zip
        .as_deref()
        .ok_or_else(|| CoreError::Validation("zip query parameter is required".to_string()))?;
    let zip = ZipCode::parse(raw)?;

    let events = state.event_repo.find_by_zip_code(&zip).await;
    tracing::debug!(zip_code = %zip, count = events.len(), "Listed events");

    Ok(Json(events))
}

/// POST /events
///
/// Create or overwrite an event keyed by `(zipCode, id)`. A random id is
/// assigned when none is given. Store failures are returned as 502.
pub async fn create_event(
    State(state): State<AppState>,
    payload: Result<Json<NewEvent>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let event = input.into_event()?;

    state.event_repo.save(&event).await?;

    Ok((StatusCode::CREATED, Json(event)))
}
