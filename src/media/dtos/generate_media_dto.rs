use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::{Validate, ValidationError};

/// Only `prompt` is interpreted; the other fields are forwarded as sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct GenerateMediaDto {
    #[validate(required, custom(function = "validate_prompt"))]
    pub prompt: Option<Value>,
    pub style: Option<Value>,
    pub resolution: Option<Value>,
    pub count: Option<Value>,
}

impl GenerateMediaDto {
    /// `{prompt}. Style: {style}. Ultra-detailed, high quality.`
    pub fn combined_prompt(&self) -> String {
        format!(
            "{}. Style: {}. Ultra-detailed, high quality.",
            text(&self.prompt),
            text(&self.style)
        )
    }
}

fn text(value: &Option<Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.to_string(),
        Some(other) => other.to_string(),
    }
}

fn validate_prompt(value: &Value) -> Result<(), ValidationError> {
    match value.as_str() {
        Some(prompt) if !prompt.trim().is_empty() => Ok(()),
        _ => Err(ValidationError::new("validate_prompt")),
    }
}
