//! Error handling for non-2xx helpdesk API responses.

use std::fmt;

use reqwest::StatusCode;

use crate::error::DeskError;

/// A non-2xx response from the helpdesk API.
///
/// Keeps the HTTP status and the raw response body so the failure is
/// diagnosable without re-issuing the request.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: String,
}

impl ApiError {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}: {}", self.status.as_u16(), self.body)
    }
}

impl From<ApiError> for DeskError {
    fn from(err: ApiError) -> Self {
        DeskError::Api {
            status: err.status.as_u16(),
            body: err.body,
        }
    }
}
