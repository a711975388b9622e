use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use crate::modules::guests::adapters::inbound::http_error::HttpResult;
use crate::modules::guests::use_cases::hydrate_guest::HydratedGuest;
use crate::modules::guests::use_cases::put_guest::command::PutGuest;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<PutGuest>, JsonRejection>,
) -> HttpResult<Json<HydratedGuest>> {
    let Json(command) = body?;
    Ok(Json(state.put_guest_handler.handle(command).await?))
}
