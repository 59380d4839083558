#![allow(dead_code)]

//! In-process digit server for integration tests.

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::Json;
use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use serde_json::{Value, json};
use tokio::net::TcpListener;

pub fn counting_digit(target: &str) -> Value {
    let pixels: Vec<i64> = (0..64).collect();
    json!({ "pixels": pixels, "target": target })
}

pub fn uniform_digit(sample: i64, target: &str) -> Value {
    json!({ "pixels": vec![sample; 64], "target": target })
}

pub fn digit_router(payload: Value) -> Router {
    Router::new().route(
        "/digit",
        get(move || {
            let payload = payload.clone();
            async move { Json(payload) }
        }),
    )
}

pub fn raw_router(status: StatusCode, body: &'static str) -> Router {
    Router::new().route("/digit", get(move || async move { (status, body) }))
}

pub fn slow_router(delay: Duration, payload: Value) -> Router {
    Router::new().route(
        "/digit",
        get(move || {
            let payload = payload.clone();
            async move {
                tokio::time::sleep(delay).await;
                Json(payload)
            }
        }),
    )
}

/// Answers the first request after `first_delay` with `first`, every later
/// one immediately with `rest`.
pub fn staggered_router(first_delay: Duration, first: Value, rest: Value) -> Router {
    let hits = Arc::new(AtomicUsize::new(0));
    Router::new().route(
        "/digit",
        get(move || {
            let hits = Arc::clone(&hits);
            let first = first.clone();
            let rest = rest.clone();
            async move {
                if hits.fetch_add(1, Ordering::SeqCst) == 0 {
                    tokio::time::sleep(first_delay).await;
                    Json(first)
                } else {
                    Json(rest)
                }
            }
        }),
    )
}

/// Answers with `replies` in order, repeating the last one once exhausted.
pub fn scripted_router(replies: Vec<(StatusCode, String)>) -> Router {
    let hits = Arc::new(AtomicUsize::new(0));
    let replies = Arc::new(replies);
    Router::new().route(
        "/digit",
        get(move || {
            let hits = Arc::clone(&hits);
            let replies = Arc::clone(&replies);
            async move {
                let hit = hits.fetch_add(1, Ordering::SeqCst);
                let (status, body) = replies
                    .get(hit)
                    .or_else(|| replies.last())
                    .cloned()
                    .unwrap_or((StatusCode::NOT_FOUND, String::new()));
                (status, body)
            }
        }),
    )
}

/// Serves on the caller's runtime.
pub async fn serve(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    addr
}

/// Serves on a dedicated thread, for tests that drive the binary.
pub struct DigitServer {
    addr: SocketAddr,
}

impl DigitServer {
    pub fn start(router: Router) -> Self {
        let (tx, rx) = std::sync::mpsc::channel();
        std::thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("server runtime");
            runtime.block_on(async move {
                let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
                tx.send(listener.local_addr().expect("local addr"))
                    .expect("report addr");
                let _ = axum::serve(listener, router).await;
            });
        });
        Self {
            addr: rx.recv().expect("server address"),
        }
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }
}

/// A port with nothing listening on it.
pub fn closed_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}
