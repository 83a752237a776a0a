//! The four blog operations as single blocking calls.
//!
//! Each call is build → execute → parse on top of `BlogClient` and a
//! `Transport`. Nothing here returns `Err` or panics: every failure becomes
//! `ApiResult::Error`, and `get_post` maps a 404 to `ApiResult::NotFound`.

use tracing::{debug, warn};

use crate::client::BlogClient;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::result::ApiResult;
use crate::transport::{Transport, UreqTransport};
use crate::types::{today, PostRequest};

pub const DEFAULT_LIST_LIMIT: usize = 100;

#[derive(Debug, Clone)]
pub struct BlogApiClient<T = UreqTransport> {
    client: BlogClient,
    transport: T,
    has_key: bool,
}

impl BlogApiClient<UreqTransport> {
    /// Resolve configuration from the arguments, then the environment, then
    /// the defaults.
    pub fn new(base_url: Option<&str>, api_key: Option<&str>) -> Self {
        Self::from_config(&ClientConfig::new(base_url, api_key))
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::with_transport(config, UreqTransport::new(config.timeout()))
    }
}

impl<T: Transport> BlogApiClient<T> {
    pub fn with_transport(config: &ClientConfig, transport: T) -> Self {
        Self {
            client: BlogClient::from_config(config),
            transport,
            has_key: config.api_key().is_some(),
        }
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    /// `POST /api/posts`. HTTP errors surface the response body as the
    /// message.
    pub fn create_post(&self, post: &PostRequest) -> ApiResult {
        debug!(date = %post.date, has_key = self.has_key, "creating post");
        let outcome = self
            .client
            .build_create_post(post)
            .and_then(|req| self.send(&req))
            .and_then(|resp| self.client.parse_create_post(resp));
        match outcome {
            Ok(value) => ApiResult::Success(value),
            Err(e) => failure(e, ApiError::body_or_message),
        }
    }

    /// `GET /api/post?date=`. `None` means today.
    pub fn get_post(&self, date: Option<&str>) -> ApiResult {
        let date = date.map_or_else(today, str::to_string);
        let outcome = self
            .send(&self.client.build_get_post(&date))
            .and_then(|resp| self.client.parse_get_post(resp));
        match outcome {
            Ok(Some(value)) => ApiResult::Success(value),
            Ok(None) => {
                debug!(%date, "no post for date");
                ApiResult::NotFound
            }
            Err(e) => failure(e, ApiError::body_or_message),
        }
    }

    /// `GET /api/posts`.
    ///
    /// `limit` is accepted for API compatibility but is not sent and not
    /// applied; the server decides how many posts come back.
    pub fn list_posts(&self, limit: usize) -> ApiResult {
        debug!(limit, "list_posts ignores limit");
        let outcome = self
            .send(&self.client.build_list_posts())
            .and_then(|resp| self.client.parse_list_posts(resp));
        match outcome {
            Ok(value) => ApiResult::Success(value),
            Err(e) => failure(e, |e| e.to_string()),
        }
    }

    /// `GET /api/stats`.
    pub fn get_stats(&self) -> ApiResult {
        let outcome = self
            .send(&self.client.build_get_stats())
            .and_then(|resp| self.client.parse_get_stats(resp));
        match outcome {
            Ok(value) => ApiResult::Success(value),
            Err(e) => failure(e, |e| e.to_string()),
        }
    }

    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        self.transport.execute(request)
    }
}

fn failure(err: ApiError, message: impl Fn(&ApiError) -> String) -> ApiResult {
    match &err {
        ApiError::Http { status, .. } => warn!(status, "request rejected"),
        other => warn!(error = %other, "request failed"),
    }
    ApiResult::error(message(&err))
}
