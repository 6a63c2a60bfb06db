//! In-process stand-in for the counting/storage endpoint.

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};

use axum::{
    extract::{Query, State},
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    routing::get,
    Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

#[derive(Clone)]
pub(crate) struct MockEndpoint {
    pub url: String,
    inner: Arc<MockState>,
}

struct MockState {
    count: AtomicU64,
    count_status: Mutex<StatusCode>,
    count_requests: AtomicUsize,
    fail_count_after_post: AtomicBool,
    post_reply: Mutex<(StatusCode, String)>,
    post_delay: Mutex<Option<Duration>>,
    posts: Mutex<Vec<Value>>,
    content_types: Mutex<Vec<String>>,
}

impl MockEndpoint {
    pub async fn spawn(count: u64) -> Self {
        std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("addr");
        let inner = Arc::new(MockState {
            count: AtomicU64::new(count),
            count_status: Mutex::new(StatusCode::OK),
            count_requests: AtomicUsize::new(0),
            fail_count_after_post: AtomicBool::new(false),
            post_reply: Mutex::new((StatusCode::OK, json!({ "ok": true }).to_string())),
            post_delay: Mutex::new(None),
            posts: Mutex::new(Vec::new()),
            content_types: Mutex::new(Vec::new()),
        });
        let app = Router::new()
            .route("/exec", get(handle_count).post(handle_post))
            .with_state(Arc::clone(&inner));
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        Self {
            url: format!("http://{addr}/exec"),
            inner,
        }
    }

    pub fn set_count(&self, count: u64) {
        self.inner.count.store(count, Ordering::SeqCst);
    }

    pub fn set_count_status(&self, status: StatusCode) {
        *self.inner.count_status.lock().unwrap() = status;
    }

    pub fn fail_count_after_post(&self) {
        self.inner.fail_count_after_post.store(true, Ordering::SeqCst);
    }

    pub fn reply_with(&self, status: StatusCode, body: impl Into<String>) {
        *self.inner.post_reply.lock().unwrap() = (status, body.into());
    }

    pub fn delay_posts(&self, delay: Duration) {
        *self.inner.post_delay.lock().unwrap() = Some(delay);
    }

    pub fn count_requests(&self) -> usize {
        self.inner.count_requests.load(Ordering::SeqCst)
    }

    pub fn posts(&self) -> Vec<Value> {
        self.inner.posts.lock().unwrap().clone()
    }

    pub fn content_types(&self) -> Vec<String> {
        self.inner.content_types.lock().unwrap().clone()
    }
}

async fn handle_count(
    State(state): State<Arc<MockState>>,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, String) {
    state.count_requests.fetch_add(1, Ordering::SeqCst);
    if params.get("action").map(String::as_str) != Some("count") {
        return (StatusCode::BAD_REQUEST, "{}".to_string());
    }

    let status = *state.count_status.lock().unwrap();
    if !status.is_success() {
        return (status, "{}".to_string());
    }

    let count = state.count.load(Ordering::SeqCst);
    (StatusCode::OK, json!({ "count": count }).to_string())
}

async fn handle_post(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, String) {
    let delay = *state.post_delay.lock().unwrap();
    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }

    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    state.content_types.lock().unwrap().push(content_type);
    state
        .posts
        .lock()
        .unwrap()
        .push(serde_json::from_str(&body).unwrap_or(Value::Null));

    state.count.fetch_add(1, Ordering::SeqCst);
    if state.fail_count_after_post.load(Ordering::SeqCst) {
        *state.count_status.lock().unwrap() = StatusCode::INTERNAL_SERVER_ERROR;
    }

    state.post_reply.lock().unwrap().clone()
}
