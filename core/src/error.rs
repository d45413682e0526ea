//! Error types for the exercises API client.
//!
//! # Design
//! The client adds no error semantics of its own. A non-2xx response keeps
//! its status, headers and body (header bytes that are not UTF-8 are
//! replaced with U+FFFD), and a transport failure keeps the
//! transport's original error value behind `Transport`. There is no
//! dedicated not-found variant; callers inspect [`ApiError::status`].

use std::error::Error as StdError;

/// Errors returned by `ExercisesClient::parse_body` and `ExercisesService`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Http {
        status: u16,
        headers: Vec<(String, String)>,
        body: String,
    },

    /// The request never produced a response (connect, timeout, I/O).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// A 2xx response body was not valid JSON.
    #[error("deserialization failed: {0}")]
    Deserialization(#[from] serde_json::Error),
}

impl ApiError {
    /// Box a transport-level failure without rewording it.
    pub fn transport<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        ApiError::Transport(Box::new(err))
    }

    /// HTTP status for `Http` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_displays_status_and_body() {
        let err = ApiError::Http {
            status: 500,
            headers: Vec::new(),
            body: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 500: boom");
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn transport_error_keeps_original_value() {
        let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "deadline elapsed");
        let err = ApiError::transport(io);
        assert_eq!(err.to_string(), "transport error: deadline elapsed");
        assert_eq!(err.status(), None);

        let ApiError::Transport(inner) = err else {
            panic!("expected Transport");
        };
        let io = inner.downcast_ref::<std::io::Error>().unwrap();
        assert_eq!(io.kind(), std::io::ErrorKind::TimedOut);
    }
}
