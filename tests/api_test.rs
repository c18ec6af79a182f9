//! Endpoint contract tests: the router is driven directly with
//! `tower::ServiceExt::oneshot`, the hosted store is a wiremock stand-in.

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;
use wiremock::matchers::{body_json, header as upstream_header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use notes_proxy::router;
use notes_store::SupabaseStore;

fn app(server: &MockServer) -> Router {
    router(SupabaseStore::new(server.uri(), "service-key"))
}

async fn body_value(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

fn note_json(id: &str, title: &str, created_at: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": null,
        "created_at": created_at,
    })
}

#[tokio::test]
async fn get_notes_forwards_with_credentials_and_preserves_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/notes"))
        .and(query_param("order", "created_at.desc"))
        .and(upstream_header("apikey", "service-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            note_json("b", "newer", "2026-01-02T00:00:00Z"),
            note_json("a", "older", "2026-01-01T00:00:00Z"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let response = app(&server)
        .oneshot(Request::get("/api/notes").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_value(response).await;
    assert_eq!(body[0]["id"], "b");
    assert_eq!(body[1]["id"], "a");
}

#[tokio::test]
async fn post_creates_with_null_default_description() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/notes"))
        .and(body_json(json!([{"title": "Groceries", "description": null}])))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([
            note_json("n1", "Groceries", "2026-01-01T00:00:00Z"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let response = app(&server)
        .oneshot(
            Request::post("/api/notes")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"title": "Groceries"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_value(response).await;
    assert!(body.is_array());
    assert_eq!(body[0]["title"], "Groceries");
}

#[tokio::test]
async fn put_updates_the_addressed_note() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/rest/v1/notes"))
        .and(query_param("id", "eq.n1"))
        .and(body_json(json!({"title": "Checklist", "description": "Milk"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            json!({
                "id": "n1",
                "title": "Checklist",
                "description": "Milk",
                "created_at": "2026-01-01T00:00:00Z",
            }),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let response = app(&server)
        .oneshot(
            Request::put("/api/notes/n1")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"title": "Checklist", "description": "Milk"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_value(response).await;
    assert_eq!(body[0]["description"], "Milk");
}

#[tokio::test]
async fn delete_answers_no_content() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/rest/v1/notes"))
        .and(query_param("id", "eq.n1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let response = app(&server)
        .oneshot(
            Request::delete("/api/notes/n1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn store_rejections_become_500_with_error_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/notes"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "Invalid API key",
        })))
        .mount(&server)
        .await;

    let response = app(&server)
        .oneshot(Request::get("/api/notes").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_value(response).await;
    assert_eq!(body["error"], "Invalid API key");
}

#[tokio::test]
async fn unreachable_store_becomes_500_with_error_body() {
    // A pooled `MockServer::start()` stays listening after drop; only a
    // builder-created server actually releases its port here.
    let server = MockServer::builder().start().await;
    let uri = server.uri();
    drop(server);

    let response = router(SupabaseStore::new(uri, "service-key"))
        .oneshot(Request::get("/api/notes").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_value(response).await;
    assert!(body["error"].as_str().unwrap().contains("could not reach"));
}

#[tokio::test]
async fn update_of_vanished_note_is_an_error_not_a_success() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/rest/v1/notes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let response = app(&server)
        .oneshot(
            Request::put("/api/notes/gone")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"title": "x"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_value(response).await;
    assert_eq!(body["error"], "note no longer exists");
}
