pub static API_URL: &str = "https://api.stability.ai/v2beta/stable-image/generate/sdxl";

pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

pub static OUTPUT_FORMAT: &str = "png";
pub static MODE: &str = "text-to-image";
