#![allow(dead_code)]

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Path, Query, State,
    },
    http::{header::AUTHORIZATION, HeaderMap, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, patch},
    Json, Router,
};
use campus_notifications::service::{
    notifications_api_service::NotificationsApiServiceConfig,
    realtime_service::RealtimeServiceConfig,
};
use serde_json::{json, Value};
use std::{
    collections::{HashMap, HashSet},
    net::SocketAddr,
    sync::{Arc, Mutex, Once},
    time::Duration,
};
use tokio::{net::TcpListener, sync::broadcast};

pub const ACCESS_TOKEN: &str = "test-access-token";

static INIT_ENV_ONCE: Once = Once::new();

pub fn init_env() {
    INIT_ENV_ONCE.call_once(|| {
        let _ = dotenvy::dotenv();
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: HashMap<String, String>,
    pub authorization: Option<String>,
}

#[derive(Default)]
struct FakeBackendData {
    notifications: Vec<Value>,
    /// Paths answered with 500
    failing: HashSet<String>,
    requests: Vec<RecordedRequest>,
}

///
/// In-process stand-in for the college backend.
/// Serves the notifications REST api under `/api/v1`
/// and the realtime channel under `/realtime`.
///
#[derive(Clone)]
pub struct FakeBackend {
    address: SocketAddr,
    data: Arc<Mutex<FakeBackendData>>,
    frames: broadcast::Sender<String>,
}

impl FakeBackend {
    pub async fn start() -> anyhow::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let (frames, _) = broadcast::channel(16);

        let backend = Self {
            address: listener.local_addr()?,
            data: Arc::new(Mutex::new(FakeBackendData::default())),
            frames,
        };

        let router = Router::new()
            .route("/api/v1/notifications", get(find_many))
            .route("/api/v1/notifications/read-all", patch(mark_all_as_read))
            .route(
                "/api/v1/notifications/:id",
                get(find_one).delete(delete_one),
            )
            .route("/api/v1/notifications/:id/read", patch(mark_as_read))
            .route("/realtime", get(realtime))
            .with_state(backend.clone());

        tokio::spawn(async move {
            if let Err(err) = axum::serve(listener, router).await {
                tracing::error!(%err, "fake backend stopped");
            }
        });

        Ok(backend)
    }

    pub fn api_config(&self) -> NotificationsApiServiceConfig {
        NotificationsApiServiceConfig {
            api_url: format!("http://{}/api/v1/", self.address),
            access_token: ACCESS_TOKEN.to_string(),
        }
    }

    pub fn realtime_config(&self) -> RealtimeServiceConfig {
        RealtimeServiceConfig {
            realtime_url: format!("ws://{}/realtime", self.address),
            access_token: ACCESS_TOKEN.to_string(),
            connect_timeout: Duration::from_secs(2),
            reconnect_attempts: 2,
            reconnect_delay: Duration::from_millis(20),
            reconnect_delay_max: Duration::from_millis(50),
        }
    }

    pub fn insert(&self, notification: Value) {
        self.data.lock().unwrap().notifications.push(notification);
    }

    pub fn notification(&self, id: &str) -> Option<Value> {
        self.data
            .lock()
            .unwrap()
            .notifications
            .iter()
            .find(|notification| notification["_id"] == id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.data.lock().unwrap().notifications.len()
    }

    ///
    /// Makes every request to `path` (relative to `/api/v1`) fail with 500
    ///
    pub fn fail(&self, path: &str) {
        let path = format!("/api/v1{path}");
        self.data.lock().unwrap().failing.insert(path);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.data.lock().unwrap().requests.clone()
    }

    ///
    /// Sends realtime frame to every connected client
    ///
    pub fn push(&self, event: &str, data: Value) {
        let frame = json!({ "event": event, "data": data }).to_string();
        // no subscribers is fine, the frame is simply lost
        let _ = self.frames.send(frame);
    }

    pub async fn wait_for_realtime_client(&self) {
        tokio::time::timeout(Duration::from_secs(5), async {
            while self.frames.receiver_count() == 0 {
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
        })
        .await
        .expect("realtime client did not connect");
    }

    ///
    /// Records the request and tells whether it should be answered
    ///
    fn accept(
        &self,
        method: Method,
        path: String,
        query: HashMap<String, String>,
        headers: &HeaderMap,
    ) -> Result<(), StatusCode> {
        let authorization = headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let mut data = self.data.lock().unwrap();
        let failing = data.failing.contains(&path);
        data.requests.push(RecordedRequest {
            method,
            path,
            query,
            authorization: authorization.clone(),
        });

        if authorization != Some(format!("Bearer {ACCESS_TOKEN}")) {
            return Err(StatusCode::UNAUTHORIZED);
        }
        if failing {
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }

        Ok(())
    }
}

pub fn notification_json(id: &str, notification_type: &str, title: &str, read: bool) -> Value {
    json!({
        "_id": id,
        "type": notification_type,
        "title": title,
        "message": format!("{title} details"),
        "timestamp": "2024-05-01T09:00:00Z",
        "read": read,
        "createdAt": "2024-05-01T09:00:00Z",
        "updatedAt": "2024-05-01T09:00:00Z",
    })
}

fn envelope(result: Value) -> Json<Value> {
    Json(json!({ "success": true, "message": "ok", "result": result }))
}

async fn find_many(
    State(backend): State<FakeBackend>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    let path = "/api/v1/notifications".to_string();
    let limit = query
        .get("limit")
        .and_then(|limit| limit.parse::<usize>().ok())
        .unwrap_or(10);
    if let Err(status) = backend.accept(Method::GET, path, query, &headers) {
        return status.into_response();
    }

    let data = backend.data.lock().unwrap();
    let unread_count = data
        .notifications
        .iter()
        .filter(|notification| notification["read"] == false)
        .count();
    let page = data.notifications.iter().take(limit).cloned().collect::<Vec<_>>();

    envelope(json!({
        "data": page,
        "totalCount": data.notifications.len(),
        "unreadCount": unread_count,
        "currentPage": 1,
        "totalPages": 1,
        "limit": limit,
    }))
    .into_response()
}

async fn find_one(
    State(backend): State<FakeBackend>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    let path = format!("/api/v1/notifications/{id}");
    if let Err(status) = backend.accept(Method::GET, path, HashMap::new(), &headers) {
        return status.into_response();
    }

    match backend.notification(&id) {
        Some(notification) => envelope(notification).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn mark_as_read(
    State(backend): State<FakeBackend>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    let path = format!("/api/v1/notifications/{id}/read");
    if let Err(status) = backend.accept(Method::PATCH, path, HashMap::new(), &headers) {
        return status.into_response();
    }

    let mut data = backend.data.lock().unwrap();
    match data
        .notifications
        .iter_mut()
        .find(|notification| notification["_id"] == id.as_str())
    {
        Some(notification) => {
            notification["read"] = Value::Bool(true);
            envelope(notification.clone()).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn mark_all_as_read(State(backend): State<FakeBackend>, headers: HeaderMap) -> Response {
    let path = "/api/v1/notifications/read-all".to_string();
    if let Err(status) = backend.accept(Method::PATCH, path, HashMap::new(), &headers) {
        return status.into_response();
    }

    let mut data = backend.data.lock().unwrap();
    let mut modified = 0;
    for notification in data.notifications.iter_mut() {
        if notification["read"] == false {
            notification["read"] = Value::Bool(true);
            modified += 1;
        }
    }

    envelope(json!({ "modifiedCount": modified })).into_response()
}

async fn delete_one(
    State(backend): State<FakeBackend>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    let path = format!("/api/v1/notifications/{id}");
    if let Err(status) = backend.accept(Method::DELETE, path, HashMap::new(), &headers) {
        return status.into_response();
    }

    let mut data = backend.data.lock().unwrap();
    let len = data.notifications.len();
    data.notifications
        .retain(|notification| notification["_id"] != id.as_str());
    if data.notifications.len() == len {
        return StatusCode::NOT_FOUND.into_response();
    }

    envelope(json!({ "_id": id })).into_response()
}

async fn realtime(
    State(backend): State<FakeBackend>,
    headers: HeaderMap,
    ws: WebSocketUpgrade,
) -> Response {
    let authorized = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        == Some(format!("Bearer {ACCESS_TOKEN}").as_str());
    if !authorized {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    let frames = backend.frames.subscribe();
    ws.on_upgrade(move |socket| forward_frames(socket, frames))
}

async fn forward_frames(mut socket: WebSocket, mut frames: broadcast::Receiver<String>) {
    while let Ok(frame) = frames.recv().await {
        if socket.send(Message::Text(frame)).await.is_err() {
            break;
        }
    }
}
