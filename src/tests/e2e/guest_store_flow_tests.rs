use crate::shell::http::router;
use crate::shell::state::AppState;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

#[tokio::test]
async fn manages_parties_contacts_and_guests_over_http() {
    let app = router(AppState::in_memory());

    let (status, lovelace) = send(&app, Method::POST, "/parties", Some(json!({"name": "Lovelace", "partySize": 2}))).await;
    assert_eq!(status, StatusCode::CREATED);
    let (_, babbage) = send(&app, Method::POST, "/parties", Some(json!({"name": "Babbage"}))).await;
    let (status, _) = send(&app, Method::POST, "/parties", Some(json!({"name": "Lovelace"}))).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, contact) = send(
        &app,
        Method::POST,
        "/contacts",
        Some(json!({"email": "ada@example.com", "phone": "5550100", "phoneCountryCode": "+44"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, ada) = send(
        &app,
        Method::POST,
        "/guests",
        Some(json!({"name": "Ada", "contactId": contact["id"], "partyId": lovelace["id"], "attending": true})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let uri = format!("/guests/{}?hydrate=true", ada["id"]);
    let (status, hydrated) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(hydrated["party"]["name"], "Lovelace");
    assert_eq!(hydrated["contact"]["email"], "ada@example.com");

    let uri = format!("/parties/{}/guests", babbage["id"]);
    let (status, _) = send(&app, Method::POST, &uri, Some(json!({"guestIds": [ada["id"]]}))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (_, members) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(members[0]["id"], ada["id"]);

    let uri = format!("/parties/{}", babbage["id"]);
    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].as_str().unwrap().starts_with("party not empty"));

    let uri = format!("/contacts/{}", contact["id"]);
    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let uri = format!("/guests/{}", ada["id"]);
    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let uri = format!("/parties/{}", babbage["id"]);
    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, grace) = send(&app, Method::POST, "/guests", Some(json!({"name": "Grace"}))).await;
    assert_ne!(grace["id"], ada["id"]);
    assert!(grace["id"].as_i64().unwrap() > ada["id"].as_i64().unwrap());
}

#[tokio::test]
async fn lists_guests_by_ids_all_or_nothing() {
    let app = router(AppState::in_memory());
    for name in ["Ada", "Byron", "Charles"] {
        let (status, _) = send(&app, Method::POST, "/guests", Some(json!({"name": name, "partyId": 1}))).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, guests) = send(&app, Method::GET, "/guests?ids=3,1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(guests.as_array().unwrap().len(), 2);

    let (status, _) = send(&app, Method::GET, "/guests?ids=1,2,99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn puts_and_imports_guests_through_the_same_store() {
    let app = router(AppState::in_memory());
    let import = json!({
        "party": { "name": "Lovelace" },
        "contactables": [
            { "contact": { "email": "ada@example.com", "phone": "5550100" }, "guests": [ { "name": "Ada" } ] }
        ]
    });
    let (status, imported) = send(&app, Method::POST, "/import", Some(import)).await;
    assert_eq!(status, StatusCode::CREATED);

    let put = json!({
        "partyName": "Lovelace",
        "guestName": "Ada",
        "email": "ada@example.com",
        "phone": "5550100",
        "attending": true
    });
    let (status, put_guest) = send(&app, Method::PUT, "/guest", Some(put)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(put_guest["id"], imported[0]["id"]);
    assert_eq!(put_guest["attending"], true);

    let (_, guests) = send(&app, Method::GET, "/guests", None).await;
    assert_eq!(guests.as_array().unwrap().len(), 1);
}
