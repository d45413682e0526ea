//! Executing layer: build, send through a `Transport`, parse.
//!
//! # Design
//! `ExercisesService` owns an `ExercisesClient` and a transport and adds no
//! behaviour of its own beyond logging. Whatever error the transport or the
//! parser yields is returned as-is: no retry, no wrapping, no reclassifying.

use serde_json::Value;
use tracing::{debug, warn};

use crate::client::ExercisesClient;
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::UreqTransport;
use crate::types::{ListParams, SearchParams};

/// Executes one `HttpRequest` and returns the raw response.
///
/// Non-2xx statuses must come back as `Ok(HttpResponse)`; `Err` is reserved
/// for failures that produced no response at all.
pub trait Transport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        (**self).execute(request)
    }
}

/// The four exercises operations over a concrete transport.
#[derive(Debug, Clone)]
pub struct ExercisesService<T> {
    client: ExercisesClient,
    transport: T,
}

impl ExercisesService<UreqTransport> {
    /// Service over a blocking HTTP agent that honours `config.timeout()`.
    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(config, UreqTransport::from_config(config))
    }
}

impl<T: Transport> ExercisesService<T> {
    pub fn new(config: &ApiConfig, transport: T) -> Self {
        Self {
            client: ExercisesClient::new(config),
            transport,
        }
    }

    pub fn client(&self) -> &ExercisesClient {
        &self.client
    }

    pub fn list_exercises(&self, params: &ListParams) -> Result<Value, ApiError> {
        self.send(self.client.build_list_exercises(params))
    }

    pub fn search_exercises(&self, params: &SearchParams) -> Result<Value, ApiError> {
        self.send(self.client.build_search_exercises(params))
    }

    pub fn get_exercise_by_id(&self, id: u64) -> Result<Value, ApiError> {
        self.send(self.client.build_get_exercise(id))
    }

    pub fn video_url(&self, video_path: &str) -> String {
        self.client.video_url(video_path)
    }

    fn send(&self, request: HttpRequest) -> Result<Value, ApiError> {
        debug!(
            method = request.method.as_str(),
            url = %request.url,
            query = ?request.query,
            "issuing request"
        );
        let response = self
            .transport
            .execute(request)
            .inspect_err(|err| warn!(error = %err, "transport failed"))?;
        debug!(status = response.status, "response received");
        self.client
            .parse_body(response)
            .inspect_err(|err| warn!(error = %err, "request failed"))
    }
}
