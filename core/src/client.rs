//! Stateless HTTP request builder and response parser for the blog API.
//!
//! # Design
//! `BlogClient` holds only the base URL and the optional API key. Each
//! operation is split into a `build_*` method that produces an `HttpRequest`
//! and a `parse_*` method that consumes an `HttpResponse`; the round-trip in
//! between belongs to a `Transport`. Response bodies stay opaque
//! `serde_json::Value`s here; typed decoding is left to the caller.

use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::PostRequest;

pub const API_KEY_HEADER: &str = "X-API-Key";

/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network.
#[derive(Debug, Clone)]
pub struct BlogClient {
    base_url: String,
    api_key: Option<String>,
}

impl BlogClient {
    pub fn new(base_url: &str, api_key: Option<&str>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.filter(|k| !k.is_empty()).map(str::to_string),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.base_url(), config.api_key())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_create_post(&self, input: &PostRequest) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
        if let Some(key) = &self.api_key {
            headers.push((API_KEY_HEADER.to_string(), key.clone()));
        }
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}/api/posts", self.base_url),
            headers,
            body: Some(body),
        })
    }

    /// `date` goes into the query string verbatim.
    pub fn build_get_post(&self, date: &str) -> HttpRequest {
        self.get(format!("{}/api/post?date={date}", self.base_url))
    }

    pub fn build_list_posts(&self) -> HttpRequest {
        self.get(format!("{}/api/posts", self.base_url))
    }

    pub fn build_get_stats(&self) -> HttpRequest {
        self.get(format!("{}/api/stats", self.base_url))
    }

    pub fn parse_create_post(&self, response: HttpResponse) -> Result<Value, ApiError> {
        check_status(&response)?;
        decode(&response)
    }

    /// A 404 is `Ok(None)`: there is no post for that date.
    pub fn parse_get_post(&self, response: HttpResponse) -> Result<Option<Value>, ApiError> {
        match check_status(&response) {
            Ok(()) => decode(&response).map(Some),
            Err(ApiError::Http { status: 404, .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub fn parse_list_posts(&self, response: HttpResponse) -> Result<Value, ApiError> {
        check_status(&response)?;
        decode(&response)
    }

    pub fn parse_get_stats(&self, response: HttpResponse) -> Result<Value, ApiError> {
        check_status(&response)?;
        decode(&response)
    }

    fn get(&self, url: String) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url,
            headers: Vec::new(),
            body: None,
        }
    }
}

/// Map non-2xx status codes to `ApiError::Http`, keeping the body.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}

fn decode(response: &HttpResponse) -> Result<Value, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> BlogClient {
        BlogClient::new("http://localhost:3000", None)
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn build_create_post_produces_correct_request() {
        let input = PostRequest::new("Hello", "World").with_date("2024-01-01");
        let req = client().build_create_post(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "http://localhost:3000/api/posts");
        assert_eq!(
            req.headers,
            vec![("Content-Type".to_string(), "application/json".to_string())]
        );
        let body: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["date"], "2024-01-01");
        assert_eq!(body["title"], "Hello");
        assert_eq!(body["content"], "World");
        assert_eq!(body["tags"], "daily");
        assert_eq!(body["mood"], "focused");
    }

    #[test]
    fn build_create_post_attaches_api_key() {
        let client = BlogClient::new("http://localhost:3000", Some("s3cret"));
        let req = client.build_create_post(&PostRequest::new("t", "c")).unwrap();
        assert_eq!(req.header("x-api-key"), Some("s3cret"));
    }

    #[test]
    fn empty_api_key_is_not_attached() {
        let client = BlogClient::new("http://localhost:3000", Some(""));
        let req = client.build_create_post(&PostRequest::new("t", "c")).unwrap();
        assert_eq!(req.header(API_KEY_HEADER), None);
    }

    #[test]
    fn read_requests_never_carry_the_key() {
        let client = BlogClient::new("http://localhost:3000", Some("s3cret"));
        for req in [
            client.build_get_post("2024-01-01"),
            client.build_list_posts(),
            client.build_get_stats(),
        ] {
            assert_eq!(req.method, HttpMethod::Get);
            assert!(req.headers.is_empty());
            assert!(req.body.is_none());
        }
    }

    #[test]
    fn build_get_post_puts_date_in_query() {
        let req = client().build_get_post("2024-01-01");
        assert_eq!(req.url, "http://localhost:3000/api/post?date=2024-01-01");
    }

    #[test]
    fn build_list_and_stats_paths() {
        assert_eq!(client().build_list_posts().url, "http://localhost:3000/api/posts");
        assert_eq!(client().build_get_stats().url, "http://localhost:3000/api/stats");
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = BlogClient::new("http://localhost:3000/", None);
        assert_eq!(client.build_list_posts().url, "http://localhost:3000/api/posts");
    }

    #[test]
    fn parse_create_post_success() {
        let body = r#"{"success":true,"post":{"id":1,"date":"2024-01-01","title":"t","content":"c"}}"#;
        let value = client().parse_create_post(response(200, body)).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["post"]["id"], 1);
    }

    #[test]
    fn parse_create_post_unauthorized_keeps_body() {
        let err = client()
            .parse_create_post(response(401, "{\"error\":\"unauthorized\"}\n"))
            .unwrap_err();
        match err {
            ApiError::Http { status, body } => {
                assert_eq!(status, 401);
                assert_eq!(body, "{\"error\":\"unauthorized\"}\n");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn parse_get_post_not_found_is_none() {
        let parsed = client()
            .parse_get_post(response(404, r#"{"error":"post not found"}"#))
            .unwrap();
        assert!(parsed.is_none());
    }

    #[test]
    fn parse_create_post_404_is_an_error() {
        let err = client().parse_create_post(response(404, "no route")).unwrap_err();
        assert_eq!(err.body_or_message(), "no route");
    }

    #[test]
    fn parse_get_post_server_error() {
        let err = client().parse_get_post(response(500, "boom")).unwrap_err();
        assert!(matches!(err, ApiError::Http { status: 500, .. }));
    }

    #[test]
    fn parse_list_posts_success() {
        let value = client()
            .parse_list_posts(response(200, r#"[{"id":1,"date":"2024-01-01","title":"t","content":"c"}]"#))
            .unwrap();
        assert_eq!(value.as_array().unwrap().len(), 1);
    }

    #[test]
    fn parse_get_stats_bad_json() {
        let err = client().parse_get_stats(response(200, "not json")).unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }

    #[test]
    fn any_2xx_is_success() {
        let value = client().parse_list_posts(response(201, "[]")).unwrap();
        assert_eq!(value, serde_json::json!([]));
    }
}
