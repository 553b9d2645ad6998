use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use reelscout_core::error::{ApiError, ErrorEnvelope};
use reelscout_metadata::MetadataError;
use reelscout_videos::VideoError;

/// Newtype wrapper so we can implement `IntoResponse` in this crate.
#[derive(Debug)]
pub struct AppError(pub ApiError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            tracing::error!(code = self.0.code(), error = %self.0, "request failed");
        }
        let envelope = ErrorEnvelope::from(&self.0);
        (status, Json(envelope)).into_response()
    }
}

impl From<ApiError> for AppError {
    fn from(e: ApiError) -> Self {
        Self(e)
    }
}

impl From<MetadataError> for AppError {
    fn from(e: MetadataError) -> Self {
        match e {
            MetadataError::NotFound => Self(ApiError::NotFound("movie not found".into())),
            MetadataError::Network(msg) | MetadataError::Provider(msg) => {
                Self(ApiError::UpstreamUnavailable(format!("metadata catalog: {msg}")))
            }
        }
    }
}

impl From<VideoError> for AppError {
    fn from(e: VideoError) -> Self {
        Self(ApiError::UpstreamUnavailable(e.to_string()))
    }
}
