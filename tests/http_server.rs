//! Integration tests for the ladrilleria HTTP server.

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use ladrilleria::attr::Item;
use ladrilleria::error::{Error, Result};
use ladrilleria::server::build_router;
use ladrilleria::storage::{InMemoryTable, TableStore};
use serde_json::{Value, json};
use tower::ServiceExt;

/// Table double that fails every operation with a fixed error.
struct FailingTable {
    error: Error,
}

#[async_trait]
impl TableStore for FailingTable {
    async fn put_item(&self, _item: Item) -> Result<()> {
        Err(self.error.clone())
    }

    async fn scan(&self) -> Result<Vec<Item>> {
        Err(self.error.clone())
    }
}

fn test_router() -> Router {
    build_router(Arc::new(InMemoryTable::new()))
}

fn failing_router(error: Error) -> Router {
    build_router(Arc::new(FailingTable { error }))
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_status_page() {
    let router = test_router();

    let response = router
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(body.contains("Servidor de Ladrilleria en funcionamiento"));
}

#[tokio::test]
async fn test_create_pedido_assigns_id() {
    let router = test_router();

    let response = router
        .oneshot(json_request(
            Method::POST,
            "/api/pedidos",
            json!({"producto": "ladrillo", "cantidad": 100}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = response_json(response).await;
    assert_eq!(body["producto"], json!("ladrillo"));
    assert_eq!(body["cantidad"], json!(100));
    let id = body["id"].as_str().expect("assigned id must be a string");
    assert_eq!(id.len(), 36);
}

#[tokio::test]
async fn test_create_preserves_client_supplied_id() {
    let router = test_router();

    let response = router
        .oneshot(json_request(
            Method::POST,
            "/api/pedidos",
            json!({"id": "pedido-42", "producto": "ladrillo"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = response_json(response).await;
    assert_eq!(body["id"], json!("pedido-42"));
}

#[tokio::test]
async fn test_create_contacto_regenerates_empty_string_id() {
    // An empty string id is falsy and counts as missing, so the server
    // overwrites it with a generated one.
    let router = test_router();

    let response = router
        .oneshot(json_request(
            Method::POST,
            "/api/contactos",
            json!({"id": "", "nombre": "Ana"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = response_json(response).await;
    assert_eq!(body["nombre"], json!("Ana"));
    let id = body["id"].as_str().unwrap();
    assert!(!id.is_empty());
}

#[tokio::test]
async fn test_list_contactos_empty_table() {
    let router = test_router();

    let response = router
        .oneshot(Request::get("/api/contactos").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_create_then_list_roundtrip() {
    let table = Arc::new(InMemoryTable::new());
    let router = build_router(table);

    let create = router
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/contactos",
            json!({"nombre": "Juan"}),
        ))
        .await
        .unwrap();
    let created = response_json(create).await;
    let id = created["id"].as_str().unwrap().to_string();

    let response = router
        .oneshot(Request::get("/api/contactos").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body, json!([{"id": id, "nombre": "Juan"}]));
}

#[tokio::test]
async fn test_list_returns_records_of_both_kinds() {
    // Pedidos and contactos share the table, so the listing returns both.
    let table = Arc::new(InMemoryTable::new());
    let router = build_router(table);

    for (uri, body) in [
        ("/api/pedidos", json!({"producto": "ladrillo"})),
        ("/api/contactos", json!({"nombre": "Ana"})),
    ] {
        let response = router
            .clone()
            .oneshot(json_request(Method::POST, uri, body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = router
        .oneshot(Request::get("/api/contactos").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let body = response_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_second_write_with_same_id_replaces_in_full() {
    let table = Arc::new(InMemoryTable::new());
    let router = build_router(table);

    for body in [json!({"id": "x", "a": 1}), json!({"id": "x", "b": 2})] {
        let response = router
            .clone()
            .oneshot(json_request(Method::POST, "/api/pedidos", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = router
        .oneshot(Request::get("/api/contactos").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let body = response_json(response).await;

    // Exactly one item survives, carrying only the second write's fields.
    assert_eq!(body, json!([{"id": "x", "b": 2}]));
}

#[tokio::test]
async fn test_preflight_request_gets_cors_headers_and_no_body() {
    let router = test_router();

    let response = router
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/api/pedidos")
                .header(header::ORIGIN, "http://example.com")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_success());
    let allow_origin = response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .expect("preflight must carry the allow-origin header");
    assert_eq!(allow_origin, "*");
    let allow_methods = response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_METHODS)
        .expect("preflight must carry the allow-methods header");
    let allow_methods = allow_methods.to_str().unwrap();
    assert!(allow_methods.contains("GET"));
    assert!(allow_methods.contains("POST"));

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn test_cross_origin_response_carries_allow_origin() {
    let router = test_router();

    let response = router
        .oneshot(
            Request::get("/api/contactos")
                .header(header::ORIGIN, "http://example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_storage_failure_on_put_reports_error_message() {
    let router = failing_router(Error::Throttled(
        "rate of requests exceeds the allowed throughput".to_string(),
    ));

    let response = router
        .oneshot(json_request(
            Method::POST,
            "/api/pedidos",
            json!({"producto": "ladrillo"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("rate of requests exceeds the allowed throughput"));
}

#[tokio::test]
async fn test_storage_failure_on_scan_reports_error_message() {
    let router = failing_router(Error::Connectivity("engine unreachable".to_string()));

    let response = router
        .oneshot(Request::get("/api/contactos").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("engine unreachable"));
}

#[tokio::test]
async fn test_non_object_body_is_rejected() {
    let router = test_router();

    let response = router
        .oneshot(json_request(Method::POST, "/api/pedidos", json!("ladrillo")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("JSON object"));
}

#[tokio::test]
async fn test_unknown_route_falls_through_to_not_found() {
    let router = test_router();

    let response = router
        .oneshot(
            Request::get("/api/pedidos")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // GET is not routed on /api/pedidos; only POST is.
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

    let response = test_router()
        .oneshot(Request::get("/api/clientes").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
