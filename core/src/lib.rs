//! Blocking API client for the exercises service.
//!
//! # Overview
//! Lists, searches and fetches exercises from a remote REST API and builds
//! streaming URLs for exercise videos.
//!
//! # Design
//! - `ApiConfig` is constructed once and passed in explicitly.
//! - `ExercisesClient` is the sans-io core: `build_*` produces plain
//!   `HttpRequest` values, `parse_body` consumes `HttpResponse` values.
//! - `ExercisesService` runs a request through a `Transport` (by default the
//!   `ureq`-backed `UreqTransport`) and passes errors through untouched.
//! - Response bodies are opaque `serde_json::Value`s; the server owns their
//!   shape.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod service;
pub mod transport;
pub mod types;

pub use client::{resolve_video_path, ExercisesClient, VIDEO_PATH_MARKER};
pub use config::{ApiConfig, BASE_URL_ENV, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use service::{ExercisesService, Transport};
pub use transport::UreqTransport;
pub use types::{ListParams, SearchParams, DEFAULT_LIST_LIMIT, DEFAULT_SEARCH_LIMIT};
