use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::Deserialize;

use crate::modules::guests::adapters::inbound::http_error::{HttpError, HttpResult};
use crate::modules::guests::core::guest::{Guest, GuestDraft, GuestId};
use crate::modules::guests::use_cases::hydrate_guest::{HydratedGuest, hydrate_guest};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListGuestsParams {
    /// Comma separated guest ids. Lists every guest when absent.
    pub ids: Option<String>,
}

#[derive(Deserialize)]
pub struct GetGuestParams {
    pub hydrate: Option<bool>,
}

fn parse_ids(raw: &str) -> Result<Vec<GuestId>, HttpError> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<GuestId>()
                .map_err(|_| HttpError::unprocessable(format!("invalid guest id: {part:?}")))
        })
        .collect()
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListGuestsParams>,
) -> HttpResult<Json<Vec<Guest>>> {
    let guests = match params.ids {
        Some(raw) => {
            let ids = parse_ids(&raw)?;
            state.repository.list_guests_by_ids(&ids).await?
        }
        None => state.repository.list_all_guests().await?,
    };
    Ok(Json(guests))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<GuestDraft>, JsonRejection>,
) -> HttpResult<(StatusCode, Json<Guest>)> {
    let Json(draft) = body?;
    let guest = state.repository.create_guest(draft).await?;
    Ok((StatusCode::CREATED, Json(guest)))
}

pub async fn get(
    State(state): State<AppState>,
    Path(guest_id): Path<GuestId>,
    Query(params): Query<GetGuestParams>,
) -> HttpResult<Json<HydratedGuest>> {
    let guest = state.repository.get_guest_by_id(guest_id).await?;
    let view = if params.hydrate.unwrap_or(false) {
        hydrate_guest(&*state.repository, guest).await?
    } else {
        HydratedGuest::from(guest)
    };
    Ok(Json(view))
}

pub async fn update(
    State(state): State<AppState>,
    Path(guest_id): Path<GuestId>,
    body: Result<Json<GuestDraft>, JsonRejection>,
) -> HttpResult<Json<Guest>> {
    let Json(draft) = body?;
    Ok(Json(state.repository.update_guest(guest_id, draft).await?))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(guest_id): Path<GuestId>,
) -> HttpResult<StatusCode> {
    state.repository.delete_guest(guest_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
