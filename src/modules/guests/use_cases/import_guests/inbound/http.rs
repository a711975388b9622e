use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::modules::guests::adapters::inbound::http_error::HttpResult;
use crate::modules::guests::use_cases::hydrate_guest::HydratedGuest;
use crate::modules::guests::use_cases::import_guests::command::ImportGuests;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<ImportGuests>, JsonRejection>,
) -> HttpResult<(StatusCode, Json<Vec<HydratedGuest>>)> {
    let Json(command) = body?;
    let imported = state.import_guests_handler.handle(command).await?;
    Ok((StatusCode::CREATED, Json(imported)))
}
