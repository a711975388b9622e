use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::guests::use_cases::import_guests::inbound::http as import_http;
use crate::modules::guests::use_cases::manage_contacts::inbound::http as contacts_http;
use crate::modules::guests::use_cases::manage_guests::inbound::http as guests_http;
use crate::modules::guests::use_cases::manage_parties::inbound::http as parties_http;
use crate::modules::guests::use_cases::put_guest::inbound::http as put_guest_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/parties", get(parties_http::list).post(parties_http::create))
        .route(
            "/parties/{id}",
            get(parties_http::get)
                .put(parties_http::update)
                .delete(parties_http::delete),
        )
        .route(
            "/parties/{id}/guests",
            get(parties_http::list_guests).post(parties_http::add_guests),
        )
        .route("/contacts", get(contacts_http::find).post(contacts_http::create))
        .route(
            "/contacts/{id}",
            get(contacts_http::get)
                .put(contacts_http::update)
                .delete(contacts_http::delete),
        )
        .route("/contacts/{id}/guests", get(contacts_http::list_guests))
        .route("/guests", get(guests_http::list).post(guests_http::create))
        .route(
            "/guests/{id}",
            get(guests_http::get)
                .put(guests_http::update)
                .delete(guests_http::delete),
        )
        .route("/import", post(import_http::handle))
        .route("/guest", put(put_guest_http::handle))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
