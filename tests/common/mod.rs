#![allow(dead_code)]

//! In-process stub of the backend link store.
//!
//! Binds a real listener on a loopback port so the reqwest client path is
//! exercised end to end, including redirect probing with
//! redirect-following disabled.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::Router;
use axum::routing::get;
use axum_test::TestServer;
use chrono::{DateTime, Utc};
use serde_json::{Value, json};

use linkswift::AppState;
use linkswift::config::Config;
use linkswift::routes::router;

/// A link row as the stub backend stores it.
#[derive(Debug, Clone)]
pub struct StoredLink {
    pub code: String,
    /// Empty string makes the redirect endpoint answer 302 without a
    /// Location header, for exercising the dangling-redirect path.
    pub destination: String,
    pub clicks: u64,
    pub created_at: DateTime<Utc>,
    pub last_accessed: Option<DateTime<Utc>>,
}

type Store = Arc<Mutex<Vec<StoredLink>>>;

/// Handle to a running stub backend.
pub struct StubBackend {
    pub addr: SocketAddr,
    store: Store,
}

impl StubBackend {
    /// Starts the stub on an ephemeral loopback port.
    pub async fn start() -> Self {
        let store: Store = Arc::new(Mutex::new(Vec::new()));

        let app = Router::new()
            .route("/api/links", get(list_links).post(create_link))
            .route("/api/links/{code}", get(link_stats).delete(delete_link))
            .route("/healthz", get(healthz))
            .route("/{code}", get(follow))
            .with_state(store.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, store }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Seeds a link row.
    pub fn seed(&self, code: &str, destination: &str, clicks: u64) {
        self.store.lock().unwrap().push(StoredLink {
            code: code.to_string(),
            destination: destination.to_string(),
            clicks,
            created_at: Utc::now(),
            last_accessed: None,
        });
    }

    pub fn link_count(&self) -> usize {
        self.store.lock().unwrap().len()
    }

    pub fn has_code(&self, code: &str) -> bool {
        self.store.lock().unwrap().iter().any(|l| l.code == code)
    }
}

/// Builds a test server for the full application router, wired to the given
/// backend origin.
pub fn test_server(backend_url: &str) -> TestServer {
    let config = Config {
        backend_url: backend_url.to_string(),
        public_url: "https://sho.rt".to_string(),
        listen_addr: "127.0.0.1:0".to_string(),
        log_level: "info".to_string(),
        log_format: "text".to_string(),
    };

    let state = AppState::from_config(config).unwrap();
    TestServer::new(router(state)).unwrap()
}

/// A backend origin on a port nothing listens on.
pub async fn unreachable_backend_url() -> String {
    // Bind and immediately drop to obtain a port that is currently closed.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

fn wire_link(link: &StoredLink) -> Value {
    json!({
        "_id": format!("id-{}", link.code),
        "shortId": link.code,
        "redirectURL": link.destination,
        "totalClicks": link.clicks,
        "lastAccessed": link.last_accessed,
        "createdAt": link.created_at,
        "updatedAt": link.created_at,
    })
}

async fn list_links(
    State(store): State<Store>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    let page: u64 = params
        .get("page")
        .and_then(|v| v.parse().ok())
        .unwrap_or(1);
    let limit: u64 = params
        .get("limit")
        .and_then(|v| v.parse().ok())
        .unwrap_or(10);

    let store = store.lock().unwrap();
    let total = store.len() as u64;
    let total_pages = total.div_ceil(limit);

    let start = ((page - 1) * limit) as usize;
    let items: Vec<Value> = store
        .iter()
        .skip(start)
        .take(limit as usize)
        .map(wire_link)
        .collect();

    Json(json!({
        "page": page,
        "limit": limit,
        "total": total,
        "totalPages": total_pages,
        "data": items,
    }))
}

async fn link_stats(State(store): State<Store>, Path(code): Path<String>) -> Response {
    let store = store.lock().unwrap();
    match store.iter().find(|l| l.code == code) {
        Some(link) => Json(json!({
            "shortId": link.code,
            "redirectURL": link.destination,
            "totalClicks": link.clicks,
            "created_At": link.created_at,
            "last_acessed": link.last_accessed,
        }))
        .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "Link not found" })),
        )
            .into_response(),
    }
}

async fn create_link(State(store): State<Store>, Json(body): Json<Value>) -> Response {
    let url = body["url"].as_str().unwrap_or_default().to_string();
    let code = body["customCode"]
        .as_str()
        .map(str::to_string)
        .unwrap_or_else(|| format!("gen{}", store.lock().unwrap().len() + 1));

    let mut store = store.lock().unwrap();
    if store.iter().any(|l| l.code == code) {
        return (
            StatusCode::CONFLICT,
            Json(json!({ "message": "Short code already in use" })),
        )
            .into_response();
    }

    let now = Utc::now();
    store.push(StoredLink {
        code: code.clone(),
        destination: url,
        clicks: 0,
        created_at: now,
        last_accessed: None,
    });

    (
        StatusCode::CREATED,
        Json(json!({
            "id": format!("id-{code}"),
            "shortURL": format!("http://backend.internal/{code}"),
            "createdAt": now,
        })),
    )
        .into_response()
}

async fn delete_link(State(store): State<Store>, Path(code): Path<String>) -> Response {
    let mut store = store.lock().unwrap();
    let before = store.len();
    store.retain(|l| l.code != code);

    if store.len() == before {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "Link not found" })),
        )
            .into_response();
    }

    StatusCode::OK.into_response()
}

async fn healthz() -> Json<Value> {
    Json(json!({ "ok": true, "version": "2.3.1" }))
}

async fn follow(State(store): State<Store>, Path(code): Path<String>) -> Response {
    let mut store = store.lock().unwrap();
    match store.iter_mut().find(|l| l.code == code) {
        Some(link) => {
            link.clicks += 1;
            link.last_accessed = Some(Utc::now());

            if link.destination.is_empty() {
                return StatusCode::FOUND.into_response();
            }

            (
                StatusCode::FOUND,
                [(header::LOCATION, link.destination.clone())],
            )
                .into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "Link not found" })),
        )
            .into_response(),
    }
}
