use std::any::Any;

use axum::response::{IntoResponse, Response};

use crate::app::errors::DefaultApiError;

pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic payload"
    };

    tracing::error!("SERVER ERROR: {}", details);

    DefaultApiError::InternalServerError.value().into_response()
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::*;

    #[test]
    fn panic_becomes_internal_server_error() {
        let res = handle_panic(Box::new("boom"));
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let res = handle_panic(Box::new(42_u8));
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
