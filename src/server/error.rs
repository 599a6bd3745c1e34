use crate::core::error::CoreError;
use crate::core::history::FetchError;
use crate::service::ServiceError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::warn;

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

impl ServiceError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServiceError::Core(e) => match e {
                CoreError::MalformedPayload(_) | CoreError::InvalidCurrency(_) => {
                    StatusCode::BAD_REQUEST
                }
                CoreError::EmptyHistory | CoreError::MixedCurrencies { .. } => {
                    StatusCode::UNPROCESSABLE_ENTITY
                }
            },
            ServiceError::Fetch(e) => match e {
                FetchError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
                FetchError::UnreadableBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
            },
            ServiceError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!(%status, error = %self, "Request failed");
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ServiceError>;
