//! Integration tests against a local RESTCONF agent
//!
//! The agent is an axum server on an ephemeral port that records every
//! request it receives and answers with a fixed status.

use std::net::{Ipv4Addr, SocketAddr};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use restconf_client::{Client, InterfaceRequest, RestconfError};

const FIXTURE: &str = include_str!("resources/create-loopback-interface-yang-data.json");

#[derive(Debug, Clone)]
struct Captured {
    method: Method,
    path: String,
    headers: HeaderMap,
    body: Bytes,
}

#[derive(Clone)]
struct Agent {
    status: StatusCode,
    delay: Duration,
    requests: Arc<Mutex<Vec<Captured>>>,
}

async fn record(
    State(agent): State<Agent>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> StatusCode {
    agent.requests.lock().unwrap().push(Captured {
        method,
        path: uri.path().to_string(),
        headers,
        body,
    });
    if !agent.delay.is_zero() {
        tokio::time::sleep(agent.delay).await;
    }
    agent.status
}

async fn spawn_agent(status: StatusCode, delay: Duration) -> (String, Arc<Mutex<Vec<Captured>>>) {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let agent = Agent {
        status,
        delay,
        requests: requests.clone(),
    };
    let app = Router::new().fallback(record).with_state(agent);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), requests)
}

fn loopback200() -> InterfaceRequest {
    InterfaceRequest::loopback(
        "Loopback200",
        Ipv4Addr::new(20, 0, 0, 1),
        Ipv4Addr::new(255, 255, 255, 255),
    )
}

#[tokio::test]
async fn test_create_loopback_interface() {
    let (url, _requests) = spawn_agent(StatusCode::OK, Duration::ZERO).await;
    let client = Client::new(Duration::from_secs(30), url, "username", "password");

    let response = client
        .create_loopback_interface(&loopback200())
        .await
        .expect("request failed");

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_request_shape() {
    let (url, requests) = spawn_agent(StatusCode::CREATED, Duration::ZERO).await;
    let client = Client::new(Duration::from_secs(30), url, "username", "password");

    client
        .create_loopback_interface(&loopback200())
        .await
        .unwrap();

    let requests = requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    let captured = &requests[0];

    assert_eq!(captured.method, Method::POST);
    assert_eq!(captured.path, "/restconf/data/ietf-interfaces:interfaces");
    assert_eq!(
        captured.headers[header::CONTENT_TYPE],
        "application/yang-data+json"
    );
    assert_eq!(captured.headers[header::ACCEPT], "application/yang-data+json");

    let auth = captured.headers[header::AUTHORIZATION].to_str().unwrap();
    let encoded = auth.strip_prefix("Basic ").expect("basic auth");
    let decoded = BASE64.decode(encoded).unwrap();
    assert_eq!(decoded, b"username:password");

    let body: serde_json::Value = serde_json::from_slice(&captured.body).unwrap();
    let expected: serde_json::Value = serde_json::from_str(FIXTURE).unwrap();
    assert_eq!(body, expected);
}

#[tokio::test]
async fn test_error_status_passed_through() {
    let (url, _requests) = spawn_agent(StatusCode::CONFLICT, Duration::ZERO).await;
    let client = Client::new(Duration::from_secs(30), format!("{}/", url), "u", "p");

    let response = client
        .create_loopback_interface(&loopback200())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_connection_refused() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = Client::new(Duration::from_secs(5), format!("http://{}", addr), "u", "p");
    let err = client
        .create_loopback_interface(&loopback200())
        .await
        .unwrap_err();

    match err {
        RestconfError::Transport(e) => assert!(e.is_connect()),
        other => panic!("expected transport error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_timeout() {
    let (url, _requests) = spawn_agent(StatusCode::OK, Duration::from_secs(5)).await;
    let client = Client::new(Duration::from_millis(200), url, "u", "p");

    let err = client
        .create_loopback_interface(&loopback200())
        .await
        .unwrap_err();

    match err {
        RestconfError::Transport(e) => assert!(e.is_timeout()),
        other => panic!("expected transport error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_client_reused_across_calls() {
    let (url, requests) = spawn_agent(StatusCode::OK, Duration::ZERO).await;
    let client = Client::new(Duration::from_secs(30), url, "u", "p");

    for _ in 0..2 {
        let response = client
            .create_loopback_interface(&loopback200())
            .await
            .unwrap();
        assert!(response.status().is_success());
    }

    assert_eq!(requests.lock().unwrap().len(), 2);
}
