//! Stateless HTTP request builder and response parser for the exercises API.
//!
//! # Design
//! `ExercisesClient` holds only a `base_url` and carries no mutable state
//! between calls. Each network operation has a `build_*` method producing an
//! `HttpRequest`; every response goes through [`ExercisesClient::parse_body`].
//! The caller (or `ExercisesService`) executes the round-trip in between.

use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{ListParams, SearchParams};

/// Path segment that server-side video paths are prefixed with.
pub const VIDEO_PATH_MARKER: &str = "/media/videos/";

/// Synchronous, stateless client for the exercises API.
#[derive(Debug, Clone)]
pub struct ExercisesClient {
    base_url: String,
}

impl ExercisesClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            base_url: config
                .base_url()
                .strip_suffix('/')
                .unwrap_or(config.base_url())
                .to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_exercises(&self, params: &ListParams) -> HttpRequest {
        HttpRequest::get(format!("{}/exercises", self.base_url))
            .with_query("limit", params.limit)
            .with_query("offset", params.offset)
    }

    pub fn build_search_exercises(&self, params: &SearchParams) -> HttpRequest {
        HttpRequest::get(format!("{}/search", self.base_url))
            .with_query("search", &params.search)
            .with_query("limit", params.limit)
    }

    pub fn build_get_exercise(&self, id: u64) -> HttpRequest {
        HttpRequest::get(format!("{}/exercises/{id}", self.base_url))
    }

    /// Decode a response body, or hand back the non-2xx response as
    /// `ApiError::Http` with every field intact.
    pub fn parse_body<T: DeserializeOwned>(&self, response: HttpResponse) -> Result<T, ApiError> {
        if !response.is_success() {
            return Err(ApiError::Http {
                status: response.status,
                headers: response.headers,
                body: response.body,
            });
        }
        Ok(serde_json::from_str(&response.body)?)
    }

    /// Full streaming URL for a video. Total over all inputs.
    pub fn video_url(&self, video_path: &str) -> String {
        format!("{}/videos/{}", self.base_url, resolve_video_path(video_path))
    }
}

/// Strip everything up to and including the first [`VIDEO_PATH_MARKER`];
/// paths without the marker are returned unchanged.
pub fn resolve_video_path(video_path: &str) -> &str {
    match video_path.split_once(VIDEO_PATH_MARKER) {
        Some((_, rest)) => rest,
        None => video_path,
    }
}
