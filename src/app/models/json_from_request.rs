use axum::{
    async_trait,
    body::{Bytes, HttpBody},
    extract::FromRequest,
    http::{header::CONTENT_TYPE, HeaderMap, Request, StatusCode},
    BoxError,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::api_error::ApiError;

/// JSON body extractor that never rejects on shape.
///
/// A missing body, an empty body, or a body sent without a JSON content type
/// reads as `{}`, as does a JSON body that is not an object. Only malformed
/// JSON under a JSON content type is rejected.
pub struct JsonFromRequest<T>(pub T);

#[async_trait]
impl<S, B, T> FromRequest<S, B> for JsonFromRequest<T>
where
    T: DeserializeOwned + Default,
    B: HttpBody + Send + 'static,
    B::Data: Send,
    B::Error: Into<BoxError>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request<B>, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = json_content_type(req.headers());

        let bytes = match Bytes::from_request(req, state).await {
            Ok(bytes) => bytes,
            Err(e) => {
                return Err(ApiError {
                    code: e.status(),
                    message: e.body_text(),
                    details: None,
                })
            }
        };

        if !is_json || bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(T::default()));
        }

        let value = match serde_json::from_slice::<Value>(&bytes) {
            Ok(value) => value,
            Err(e) => {
                tracing::debug!(%e);
                return Err(ApiError {
                    code: StatusCode::BAD_REQUEST,
                    message: format!("Malformed JSON body: {}", e),
                    details: None,
                });
            }
        };

        if !value.is_object() {
            return Ok(Self(T::default()));
        }

        Ok(Self(serde_json::from_value(value).unwrap_or_default()))
    }
}

fn json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok())
    else {
        return false;
    };

    let Ok(mime) = content_type.parse::<mime::Mime>()
    else {
        return false;
    };

    mime.type_() == "application"
        && (mime.subtype() == "json" || mime.suffix().map_or(false, |name| name == "json"))
}
