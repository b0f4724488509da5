use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

#[derive(Debug)]
pub struct ApiError {
    pub code: StatusCode,
    pub message: String,
    pub details: Option<Value>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match self.details {
            Some(details) => json!({
                "error": self.message,
                "details": details,
            }),
            None => json!({
                "error": self.message,
            }),
        };

        (self.code, Json(body)).into_response()
    }
}
