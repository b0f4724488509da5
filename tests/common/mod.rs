#![allow(dead_code)]

use std::{
    net::{SocketAddr, TcpListener},
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use neongen_api::{app::envy::Envy, AppState};
use serde_json::Value;

pub static UPSTREAM_PATH: &str = "/v2beta/stable-image/generate/sdxl";

/// A request as seen by the fake upstream.
#[derive(Debug, Clone)]
pub struct Received {
    pub authorization: Option<String>,
    pub accept: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct FakeUpstreamState {
    status: StatusCode,
    reply: Arc<String>,
    delay: Option<Duration>,
    received: Arc<Mutex<Vec<Received>>>,
}

pub struct FakeUpstream {
    pub addr: SocketAddr,
    received: Arc<Mutex<Vec<Received>>>,
}

impl FakeUpstream {
    pub fn url(&self) -> String {
        format!("http://{}{}", self.addr, UPSTREAM_PATH)
    }

    pub fn received(&self) -> Vec<Received> {
        self.received.lock().unwrap().clone()
    }
}

async fn receive(
    State(state): State<FakeUpstreamState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    let header_text = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    };

    state.received.lock().unwrap().push(Received {
        authorization: header_text(header::AUTHORIZATION),
        accept: header_text(header::ACCEPT),
        body,
    });

    if let Some(delay) = state.delay {
        tokio::time::sleep(delay).await;
    }

    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.reply.to_string(),
    )
}

pub fn serve(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind listener");
    let addr = listener.local_addr().expect("failed to read local addr");
    let server = axum::Server::from_tcp(listener)
        .expect("failed to build server")
        .serve(router.into_make_service());

    tokio::spawn(async move {
        let _ = server.await;
    });

    addr
}

pub fn spawn_upstream(status: StatusCode, reply: &str, delay: Option<Duration>) -> FakeUpstream {
    let received = Arc::new(Mutex::new(Vec::new()));
    let state = FakeUpstreamState {
        status,
        reply: Arc::new(reply.to_string()),
        delay,
        received: received.clone(),
    };

    let router = Router::new()
        .route(UPSTREAM_PATH, post(receive))
        .with_state(state);

    FakeUpstream {
        addr: serve(router),
        received,
    }
}

pub fn envy(api_key: Option<&str>, upstream_url: &str, timeout_secs: u64) -> Envy {
    Envy {
        stability_api_key: api_key.map(str::to_string),
        stability_api_url: Some(upstream_url.to_string()),
        stability_timeout_secs: Some(timeout_secs),
        ..Default::default()
    }
}

/// Serves the relay on an ephemeral port and returns its base url.
pub fn spawn_app(envy: Envy) -> String {
    let state = AppState::new(envy).expect("failed to build state");
    let addr = serve(neongen_api::app(state));

    format!("http://{}", addr)
}
