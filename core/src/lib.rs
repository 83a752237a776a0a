//! Synchronous client for the blog JSON API.
//!
//! # Overview
//! `BlogApiClient` exposes the four API operations (create a post, fetch a
//! post by date, list posts, fetch stats) as blocking calls that always
//! return an `ApiResult`: the decoded JSON body, `NotFound`, or an error
//! message. Nothing is raised to the caller.
//!
//! # Design
//! - `BlogClient` is stateless and touches no network: `build_*` produces an
//!   `HttpRequest`, `parse_*` consumes an `HttpResponse`.
//! - `Transport` executes the round-trip; `UreqTransport` is the real one,
//!   bounded by the configured timeout (30 s by default).
//! - `ClientConfig` resolves base URL and API key from explicit values, then
//!   `BLOG_API_URL` / `BLOG_API_KEY`, then defaults.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod result;
pub mod transport;
pub mod types;

pub use api::{BlogApiClient, DEFAULT_LIST_LIMIT};
pub use client::BlogClient;
pub use config::ClientConfig;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use result::ApiResult;
pub use transport::{Transport, UreqTransport};
pub use types::{today, CreatePostResponse, Post, PostRequest, Stats, MOOD_OPTIONS};
