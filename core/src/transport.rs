//! Blocking HTTP transport backed by `ureq`.

use std::time::Duration;

use ureq::http::HeaderMap;
use ureq::Agent;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::service::Transport;

/// `ureq` agent with a global timeout.
///
/// Status codes are returned as data (`http_status_as_error(false)`) so
/// 4xx/5xx responses reach `ExercisesClient::parse_body` intact. Bodies are
/// read without a size cap; the timeout is the only bound.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: Agent,
}

impl UreqTransport {
    pub fn new(timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(config.timeout())
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut builder = match request.method {
            HttpMethod::Get => self.agent.get(&request.url),
        };
        for (key, value) in &request.query {
            builder = builder.query(key, value);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let mut response = builder.call().map_err(ApiError::transport)?;

        let status = response.status().as_u16();
        let headers = header_pairs(response.headers());
        let body = response
            .body_mut()
            .with_config()
            .limit(u64::MAX)
            .read_to_string()
            .map_err(ApiError::transport)?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

/// Every header as a string pair; non-UTF-8 bytes are replaced, not dropped.
fn header_pairs(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| {
            let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
            (name.as_str().to_string(), value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use ureq::http::HeaderValue;

    use super::*;

    #[test]
    fn header_pairs_keeps_non_utf8_values() {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", HeaderValue::from_static("application/json"));
        headers.insert("x-label", HeaderValue::from_bytes(b"caf\xe9").unwrap());

        let pairs = header_pairs(&headers);
        assert_eq!(pairs.len(), 2);
        assert!(pairs.contains(&("content-type".to_string(), "application/json".to_string())));
        assert!(pairs.contains(&("x-label".to_string(), "caf\u{fffd}".to_string())));
    }

    #[test]
    fn header_pairs_keeps_repeated_names() {
        let mut headers = HeaderMap::new();
        headers.append("set-cookie", HeaderValue::from_static("a=1"));
        headers.append("set-cookie", HeaderValue::from_static("b=2"));

        let pairs = header_pairs(&headers);
        assert_eq!(
            pairs,
            vec![
                ("set-cookie".to_string(), "a=1".to_string()),
                ("set-cookie".to_string(), "b=2".to_string()),
            ]
        );
    }
}
