use serde::Deserialize;
use serde_json::{value::RawValue, Value};

#[derive(Debug, Deserialize)]
pub struct StabilityGenerateImagesResponse {
    pub images: Option<Box<RawValue>>,
}

#[derive(Debug)]
pub enum StabilityGenerateImagesResult {
    Images(Box<RawValue>),
    Rejected(Value),
}

impl StabilityGenerateImagesResult {
    /// Anything other than an object with a truthy `images` field is a
    /// rejection; non-JSON bodies are kept as a JSON string.
    pub fn from_text(text: &str) -> Self {
        if let Ok(StabilityGenerateImagesResponse {
            images: Some(images),
        }) = serde_json::from_str(text)
        {
            if !is_falsy(&images) {
                return Self::Images(images);
            }
        }

        let details =
            serde_json::from_str::<Value>(text).unwrap_or_else(|_| Value::String(text.to_string()));

        Self::Rejected(details)
    }
}

/// `null`, `false`, `0` and `""`.
fn is_falsy(images: &RawValue) -> bool {
    match serde_json::from_str::<Value>(images.get()) {
        Ok(Value::Bool(b)) => !b,
        Ok(Value::Number(n)) => n.as_f64() == Some(0.0),
        Ok(Value::String(s)) => s.is_empty(),
        Ok(Value::Null) => true,
        _ => false,
    }
}
