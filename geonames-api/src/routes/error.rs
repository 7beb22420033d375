use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;

use crate::domain::CityLookupError;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.status, self.message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<CityLookupError> for ApiError {
    fn from(err: CityLookupError) -> Self {
        match err {
            CityLookupError::InvalidClientIp(_) | CityLookupError::UndeterminedClientIp => {
                Self::bad_request(err.to_string())
            }
            CityLookupError::Geolocation(ref e) => {
                tracing::error!("Geolocation error: {}", e);
                Self::internal("An error occurred while geolocating IP address")
            }
            CityLookupError::SearchBackend(ref e) => {
                tracing::error!("Search backend error: {}", e);
                Self::internal("An internal error occurred")
            }
            CityLookupError::MetadataStore(ref e) => {
                tracing::error!("Metadata store error: {}", e);
                Self::internal("An internal error occurred")
            }
        }
    }
}
