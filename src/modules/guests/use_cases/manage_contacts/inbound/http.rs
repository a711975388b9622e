use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::Deserialize;

use crate::modules::guests::adapters::inbound::http_error::{HttpError, HttpResult};
use crate::modules::guests::core::contact::{Contact, ContactId};
use crate::modules::guests::core::guest::Guest;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactBody {
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub phone_country_code: String,
}

#[derive(Deserialize)]
pub struct FindContactParams {
    pub email: Option<String>,
    pub phone: Option<String>,
}

pub async fn find(
    State(state): State<AppState>,
    Query(params): Query<FindContactParams>,
) -> HttpResult<Json<Contact>> {
    let repository = &state.repository;
    let contact = match (params.email.as_deref(), params.phone.as_deref()) {
        (Some(email), Some(phone)) => repository.find_contact_by_info(email, phone).await?,
        (Some(email), None) => repository.find_contact_by_email(email).await?,
        (None, Some(phone)) => repository.find_contact_by_phone(phone).await?,
        (None, None) => return Err(HttpError::unprocessable("email or phone is required")),
    };
    Ok(Json(contact))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<ContactBody>, JsonRejection>,
) -> HttpResult<(StatusCode, Json<Contact>)> {
    let Json(body) = body?;
    let contact = state
        .repository
        .create_guest_contact(&body.email, &body.phone, &body.phone_country_code)
        .await?;
    Ok((StatusCode::CREATED, Json(contact)))
}

pub async fn get(
    State(state): State<AppState>,
    Path(contact_id): Path<ContactId>,
) -> HttpResult<Json<Contact>> {
    Ok(Json(state.repository.get_contact_by_id(contact_id).await?))
}

pub async fn update(
    State(state): State<AppState>,
    Path(contact_id): Path<ContactId>,
    body: Result<Json<ContactBody>, JsonRejection>,
) -> HttpResult<Json<Contact>> {
    let Json(body) = body?;
    let contact = state
        .repository
        .update_guest_contact(contact_id, &body.email, &body.phone, &body.phone_country_code)
        .await?;
    Ok(Json(contact))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(contact_id): Path<ContactId>,
) -> HttpResult<StatusCode> {
    state.repository.delete_guest_contact(contact_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_guests(
    State(state): State<AppState>,
    Path(contact_id): Path<ContactId>,
) -> HttpResult<Json<Vec<Guest>>> {
    Ok(Json(
        state.repository.list_guests_for_contact(contact_id).await?,
    ))
}
