use axum::{extract::State, Json};

use crate::{
    app::models::{api_error::ApiError, json_from_request::JsonFromRequest},
    AppState,
};

use super::{
    dtos::generate_media_dto::GenerateMediaDto,
    models::generate_media_response::GenerateMediaResponse, service,
};

pub async fn generate_media(
    State(state): State<AppState>,
    JsonFromRequest(dto): JsonFromRequest<GenerateMediaDto>,
) -> Result<Json<GenerateMediaResponse>, ApiError> {
    match service::generate_media(&dto, &state).await {
        Ok(res) => Ok(Json(res)),
        Err(e) => Err(e),
    }
}
