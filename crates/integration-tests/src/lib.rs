//! Integration tests for Brulerie.
//!
//! The tests drive the real catalog client against [`MockCatalog`], a local
//! axum server that records every request and answers with a canned body.
//! No external service is involved; what gets asserted is the bytes on the
//! wire (path, headers, body) and how the client classifies responses.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p brulerie-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, Uri, header};
use axum::response::IntoResponse;

/// A request the stub catalog received.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub store_header: Option<String>,
    pub content_type: Option<String>,
    pub body: serde_json::Value,
}

#[derive(Debug, Clone)]
struct CannedResponse {
    status: StatusCode,
    body: String,
}

#[derive(Debug)]
struct MockState {
    response: Mutex<CannedResponse>,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// Local stand-in for the Catalog Service endpoint.
///
/// Answers every path with the configured body so endpoint-derivation
/// tests can observe exactly where the client posted.
pub struct MockCatalog {
    addr: SocketAddr,
    state: Arc<MockState>,
}

impl MockCatalog {
    /// Spawn the stub on an ephemeral port.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot bind.
    pub async fn spawn() -> Self {
        let state = Arc::new(MockState {
            response: Mutex::new(CannedResponse {
                status: StatusCode::OK,
                body: "{}".to_string(),
            }),
            requests: Mutex::new(Vec::new()),
        });

        let router = Router::new()
            .fallback(record_and_respond)
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub listener");
        let addr = listener.local_addr().expect("stub listener address");

        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        Self { addr, state }
    }

    /// Base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Set the body every following request is answered with.
    ///
    /// # Panics
    ///
    /// Panics if the stub lock is poisoned.
    pub fn respond_with(&self, status: StatusCode, body: impl Into<String>) {
        *self.state.response.lock().expect("stub lock") = CannedResponse {
            status,
            body: body.into(),
        };
    }

    /// Requests received so far.
    ///
    /// # Panics
    ///
    /// Panics if the stub lock is poisoned.
    #[must_use]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().expect("stub lock").clone()
    }

    /// The one request received, when exactly one is expected.
    ///
    /// # Panics
    ///
    /// Panics if zero or more than one request arrived.
    #[must_use]
    pub fn only_request(&self) -> RecordedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().expect("one request")
    }
}

async fn record_and_respond(
    State(state): State<Arc<MockState>>,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let recorded = RecordedRequest {
        path: uri.path().to_string(),
        store_header: header_value(&headers, "store"),
        content_type: header_value(&headers, "content-type"),
        body: serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null),
    };
    state.requests.lock().expect("stub lock").push(recorded);

    let response = state.response.lock().expect("stub lock").clone();
    (
        response.status,
        [(header::CONTENT_TYPE, "application/json")],
        response.body,
    )
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(String::from)
}
