use crate::app::{ENDPOINT, build_app};
use bookshelf::{RecordStore, build_schema};
use reqwest::{
    Client, Method, StatusCode,
    header::{ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_REQUEST_METHOD, CONTENT_TYPE, ORIGIN},
};
use serde_json::{Value, json};
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;

/// # Panics
/// Panics if the TCP listener cannot bind to the requested address
/// or if the local address cannot be retrieved.
async fn spawn_app(with_graphiql: bool) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let addrs = listener
        .local_addr()
        .expect("Failed to get local address from listener");
    let service = build_app(
        build_schema(Arc::new(RecordStore::initialize())),
        with_graphiql,
    );
    drop(tokio::spawn(async move {
        axum::serve(listener, service)
            .await
            .expect("Server failed to start");
    }));

    addrs
}

/// Posts `query` to the endpoint and returns the decoded response body.
///
/// # Panics
/// Panics if the request fails or the response is not JSON.
async fn post_query(addrs: SocketAddr, query: &str) -> Value {
    let response = Client::new()
        .post(format!("http://{addrs}{ENDPOINT}"))
        .json(&json!({ "query": query }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);

    response
        .json()
        .await
        .expect("Failed to parse the response")
}

#[tokio::test]
async fn lookup_scenarios() {
    let addrs = spawn_app(true).await;

    let first = post_query(addrs, r#"{ entityById(id: "book-1") { name } }"#).await;
    assert_eq!(
        first,
        json!({ "data": { "entityById": { "name": "Harry Potter and the Philosopher's Stone" } } })
    );

    let second = post_query(addrs, r#"{ entityById(id: "book-2") { pageCount } }"#).await;
    assert_eq!(second, json!({ "data": { "entityById": { "pageCount": 635 } } }));

    let third = post_query(addrs, r#"{ entityById(id: "book-3") { authorId } }"#).await;
    assert_eq!(third, json!({ "data": { "entityById": { "authorId": "author-3" } } }));
}

#[tokio::test]
async fn not_found_is_null_without_errors() {
    let addrs = spawn_app(true).await;

    for id in ["book-99", ""] {
        let query = format!(r#"{{ entityById(id: "{id}") {{ name }} }}"#);
        let body = post_query(addrs, &query).await;

        assert_eq!(body, json!({ "data": { "entityById": null } }), "\"{id}\"");
        assert!(body.get("errors").is_none());
    }
}

#[tokio::test]
async fn missing_id_is_reported() {
    let addrs = spawn_app(true).await;

    let body = post_query(addrs, "{ entityById { name } }").await;
    let errors = body["errors"].as_array().expect("Expected an error list");

    assert!(!errors.is_empty());
    assert_eq!(body["data"], Value::Null);
}

#[tokio::test]
async fn graphiql_page() {
    let addrs = spawn_app(true).await;

    let response = Client::new()
        .get(format!("http://{addrs}{ENDPOINT}"))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .expect("Missing content type")
        .to_str()
        .expect("Content type is not ASCII")
        .to_owned();
    assert!(content_type.starts_with("text/html"), "{content_type}");

    let body = response
        .text()
        .await
        .expect("Failed to retrieve response text");
    assert!(body.to_lowercase().contains("graphiql"));
}

#[tokio::test]
async fn graphiql_can_be_disabled() {
    let addrs = spawn_app(false).await;

    let response = Client::new()
        .get(format!("http://{addrs}{ENDPOINT}"))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

    let body = post_query(addrs, r#"{ entityById(id: "book-2") { name } }"#).await;
    assert_eq!(body, json!({ "data": { "entityById": { "name": "Moby Dick" } } }));
}

#[tokio::test]
async fn cross_origin_preflight() {
    let addrs = spawn_app(true).await;

    let response = Client::new()
        .request(Method::OPTIONS, format!("http://{addrs}{ENDPOINT}"))
        .header(ORIGIN, "http://example.com")
        .header(ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    assert_eq!(
        response
            .headers()
            .get(ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|value| value.to_str().ok()),
        Some("*")
    );
}
