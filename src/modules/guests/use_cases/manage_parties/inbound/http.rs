use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::Deserialize;

use crate::modules::guests::adapters::inbound::http_error::HttpResult;
use crate::modules::guests::core::guest::{Guest, GuestId};
use crate::modules::guests::core::party::{Party, PartyId};
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartyBody {
    pub name: String,
    #[serde(default)]
    pub party_size: u32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddGuestsBody {
    pub guest_ids: Vec<GuestId>,
}

pub async fn list(State(state): State<AppState>) -> HttpResult<Json<Vec<Party>>> {
    Ok(Json(state.repository.list_all_parties().await?))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<PartyBody>, JsonRejection>,
) -> HttpResult<(StatusCode, Json<Party>)> {
    let Json(body) = body?;
    let party = state
        .repository
        .create_party(&body.name, body.party_size)
        .await?;
    Ok((StatusCode::CREATED, Json(party)))
}

pub async fn get(
    State(state): State<AppState>,
    Path(party_id): Path<PartyId>,
) -> HttpResult<Json<Party>> {
    Ok(Json(state.repository.get_party_by_id(party_id).await?))
}

pub async fn update(
    State(state): State<AppState>,
    Path(party_id): Path<PartyId>,
    body: Result<Json<PartyBody>, JsonRejection>,
) -> HttpResult<Json<Party>> {
    let Json(body) = body?;
    let party = state
        .repository
        .update_party(party_id, &body.name, body.party_size)
        .await?;
    Ok(Json(party))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(party_id): Path<PartyId>,
) -> HttpResult<StatusCode> {
    state.repository.delete_party(party_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_guests(
    State(state): State<AppState>,
    Path(party_id): Path<PartyId>,
) -> HttpResult<Json<Vec<Guest>>> {
    Ok(Json(state.repository.list_guests_by_party(party_id).await?))
}

pub async fn add_guests(
    State(state): State<AppState>,
    Path(party_id): Path<PartyId>,
    body: Result<Json<AddGuestsBody>, JsonRejection>,
) -> HttpResult<StatusCode> {
    let Json(body) = body?;
    state
        .repository
        .add_guests_to_party(party_id, &body.guest_ids)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
