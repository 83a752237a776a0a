use std::{collections::BTreeMap, sync::Arc};

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{debug, info};

/// `GET /api/posts` never returns more than this many posts.
pub const LIST_LIMIT: usize = 100;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    pub id: i64,
    pub date: String,
    pub title: String,
    pub content: String,
    pub tags: String,
    pub mood: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PostInput {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub mood: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stats {
    pub total_posts: usize,
    pub first_post: String,
    pub latest_post: String,
}

#[derive(Deserialize)]
struct DateQuery {
    date: Option<String>,
}

#[derive(Deserialize)]
struct KeyQuery {
    api_key: Option<String>,
}

/// Posts keyed by date, so iteration order is chronological.
#[derive(Default)]
struct Store {
    posts: BTreeMap<String, Post>,
    next_id: i64,
}

struct AppState {
    store: RwLock<Store>,
    api_key: Option<String>,
}

type Shared = Arc<AppState>;

/// Router for the blog API. When `api_key` is set, `POST /api/posts` requires
/// it in `X-API-Key` or the `api_key` query parameter.
pub fn app(api_key: Option<String>) -> Router {
    let state: Shared = Arc::new(AppState {
        store: RwLock::new(Store::default()),
        api_key: api_key.filter(|k| !k.is_empty()),
    });
    Router::new()
        .route("/health", get(health))
        .route("/api/posts", get(list_posts).post(create_post))
        .route("/api/post", get(get_post))
        .route("/api/stats", get(get_stats))
        .with_state(state)
}

pub async fn run(listener: TcpListener, api_key: Option<String>) -> Result<(), std::io::Error> {
    axum::serve(listener, app(api_key)).await
}

fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "healthy", "service": "blog-mock-server" }))
}

async fn list_posts(State(state): State<Shared>) -> Json<Vec<Post>> {
    let store = state.store.read().await;
    Json(store.posts.values().rev().take(LIST_LIMIT).cloned().collect())
}

async fn create_post(
    State(state): State<Shared>,
    headers: HeaderMap,
    Query(key): Query<KeyQuery>,
    body: Bytes,
) -> Response {
    if let Some(expected) = &state.api_key {
        let provided = headers
            .get("x-api-key")
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .or(key.api_key);
        if provided.as_deref() != Some(expected.as_str()) {
            return error(StatusCode::UNAUTHORIZED, "unauthorized");
        }
    }

    let Ok(mut input) = serde_json::from_slice::<PostInput>(&body) else {
        return error(StatusCode::BAD_REQUEST, "invalid json");
    };
    if input.date.is_empty() {
        input.date = Local::now().format("%Y-%m-%d").to_string();
    }
    if input.title.is_empty() || input.content.is_empty() {
        return error(StatusCode::BAD_REQUEST, "title and content required");
    }

    let mut guard = state.store.write().await;
    let store = &mut *guard;
    let now = Utc::now();
    let post = match store.posts.get_mut(&input.date) {
        Some(existing) => {
            existing.title = input.title;
            existing.content = input.content;
            existing.tags = input.tags;
            existing.mood = input.mood;
            existing.updated_at = now;
            debug!(id = existing.id, date = %existing.date, "updated post");
            existing.clone()
        }
        None => {
            store.next_id += 1;
            let post = Post {
                id: store.next_id,
                date: input.date,
                title: input.title,
                content: input.content,
                tags: input.tags,
                mood: input.mood,
                created_at: now,
                updated_at: now,
            };
            store.posts.insert(post.date.clone(), post.clone());
            info!(id = post.id, date = %post.date, "created post");
            post
        }
    };

    Json(json!({ "success": true, "post": post })).into_response()
}

async fn get_post(State(state): State<Shared>, Query(query): Query<DateQuery>) -> Response {
    let Some(date) = query.date.filter(|d| !d.is_empty()) else {
        return error(StatusCode::BAD_REQUEST, "date parameter required");
    };
    let store = state.store.read().await;
    match store.posts.get(&date) {
        Some(post) => Json(post.clone()).into_response(),
        None => error(StatusCode::NOT_FOUND, "post not found"),
    }
}

async fn get_stats(State(state): State<Shared>) -> Json<Stats> {
    let store = state.store.read().await;
    let first = store.posts.keys().next().cloned().unwrap_or_default();
    let latest = store.posts.keys().next_back().cloned().unwrap_or_default();
    Json(Stats {
        total_posts: store.posts.len(),
        first_post: first,
        latest_post: latest,
    })
}
