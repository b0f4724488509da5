pub static ROOT_MESSAGE: &str = "NeonGen AI Backend Running 🚀";

pub async fn get_root() -> &'static str {
    ROOT_MESSAGE
}
