use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct InputSpec {
    pub prompt: String,
    pub output_format: String,
    pub mode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub samples: Option<Value>,
}
