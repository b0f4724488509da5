use std::sync::Arc;

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::app::envy::Envy;

pub mod app;
pub mod media;

#[derive(Clone)]
pub struct AppState {
    pub envy: Arc<Envy>,
    pub client: reqwest::Client,
}

impl AppState {
    pub fn new(envy: Envy) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(envy.stability_timeout())
            .build()?;

        Ok(Self {
            envy: Arc::new(envy),
            client,
        })
    }
}

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE])
        .allow_methods([Method::GET, Method::POST]);

    Router::new()
        .route("/", get(app::controller::get_root))
        .route("/generate", post(media::controller::generate_media))
        .with_state(state)
        // layers
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(app::util::panic::handle_panic))
}
