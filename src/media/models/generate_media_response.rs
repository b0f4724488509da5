use serde::Serialize;
use serde_json::value::RawValue;

#[derive(Debug, Serialize)]
pub struct GenerateMediaResponse {
    pub success: bool,
    /// Upstream `images` value, forwarded as received.
    pub images: Box<RawValue>,
}

impl GenerateMediaResponse {
    pub fn new(images: Box<RawValue>) -> Self {
        Self {
            success: true,
            images,
        }
    }
}
