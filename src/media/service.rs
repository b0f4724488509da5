use validator::Validate;

use crate::{app::models::api_error::ApiError, AppState};

use super::{
    apis::stability::{
        self, structs::stability_generate_images_response::StabilityGenerateImagesResult,
    },
    dtos::generate_media_dto::GenerateMediaDto,
    errors::MediaApiError,
    models::generate_media_response::GenerateMediaResponse,
};

pub async fn generate_media(
    dto: &GenerateMediaDto,
    state: &AppState,
) -> Result<GenerateMediaResponse, ApiError> {
    let Some(stability_api_key) = state.envy.stability_api_key()
    else {
        return Err(MediaApiError::MissingApiKey.value());
    };

    if dto.validate().is_err() {
        return Err(MediaApiError::PromptRequired.value());
    }

    let result = stability::service::stability_generate_images(
        dto,
        stability_api_key,
        state.envy.stability_api_url(),
        &state.client,
    )
    .await?;

    match result {
        StabilityGenerateImagesResult::Images(images) => Ok(GenerateMediaResponse::new(images)),
        StabilityGenerateImagesResult::Rejected(details) => {
            Err(MediaApiError::GenerationFailed(details).value())
        }
    }
}
