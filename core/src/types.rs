//! Domain DTOs for the blog API.
//!
//! # Design
//! These mirror the mock-server's schema but are defined independently, so
//! the integration tests catch schema drift between the two crates. The
//! response types are lenient: only `date`, `title` and `content` are
//! required, because `ApiResult` keeps the raw JSON anyway and typed decoding
//! is an opt-in convenience.

use chrono::{DateTime, FixedOffset, Local};
use serde::{Deserialize, Serialize};

pub const DEFAULT_TAGS: &str = "daily";
pub const DEFAULT_MOOD: &str = "focused";

/// Moods the blog's web UI offers. The API accepts any string.
pub const MOOD_OPTIONS: &[&str] = &[
    "excited",
    "happy",
    "focused",
    "curious",
    "contemplative",
    "tired",
    "challenged",
    "accomplished",
];

/// Today's local date as `YYYY-MM-DD`.
pub fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// Request payload for creating (or replacing) the post of a given date.
///
/// Field order matches the wire body:
/// `{"date","title","content","tags","mood"}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostRequest {
    pub date: String,
    pub title: String,
    pub content: String,
    pub tags: String,
    pub mood: String,
}

impl PostRequest {
    /// A post for today with the default tags and mood.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            date: today(),
            title: title.into(),
            content: content.into(),
            tags: DEFAULT_TAGS.to_string(),
            mood: DEFAULT_MOOD.to_string(),
        }
    }

    pub fn with_tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = tags.into();
        self
    }

    pub fn with_mood(mut self, mood: impl Into<String>) -> Self {
        self.mood = mood.into();
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }
}

/// A stored blog post as returned by `GET /api/post` and `GET /api/posts`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    #[serde(default)]
    pub id: i64,
    pub date: String,
    pub title: String,
    pub content: String,
    /// Comma-separated.
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub mood: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<FixedOffset>>,
}

/// Body of a successful `POST /api/posts`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatePostResponse {
    pub success: bool,
    pub post: Post,
}

/// Body of `GET /api/stats`. Dates are empty strings while the blog has no
/// posts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stats {
    pub total_posts: u64,
    #[serde(default)]
    pub first_post: String,
    #[serde(default)]
    pub latest_post: String,
}
