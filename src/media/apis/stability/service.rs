use reqwest::{header, Response};

use crate::{
    app::{errors::DefaultApiError, models::api_error::ApiError},
    media::dtos::generate_media_dto::GenerateMediaDto,
};

use super::{
    config::{MODE, OUTPUT_FORMAT},
    models::input_spec::InputSpec,
    structs::stability_generate_images_response::StabilityGenerateImagesResult,
};

pub async fn stability_generate_images(
    dto: &GenerateMediaDto,
    stability_api_key: &str,
    stability_api_url: &str,
    client: &reqwest::Client,
) -> Result<StabilityGenerateImagesResult, ApiError> {
    let input_spec = provide_input_spec(dto);

    let Ok(authorization) = header::HeaderValue::from_str(&["Bearer ", stability_api_key].concat())
    else {
        tracing::error!("stability api key is not a valid header value");
        return Err(DefaultApiError::InternalServerError.value());
    };

    let mut headers = header::HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        header::HeaderValue::from_static("application/json"),
    );
    headers.insert(
        header::ACCEPT,
        header::HeaderValue::from_static("application/json"),
    );
    headers.insert(header::AUTHORIZATION, authorization);

    let result = client
        .post(stability_api_url)
        .headers(headers)
        .json(&input_spec)
        .send()
        .await;

    match result {
        Ok(res) => parse_response_to_stability_generate_images_result(res).await,
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub fn provide_input_spec(dto: &GenerateMediaDto) -> InputSpec {
    InputSpec {
        prompt: dto.combined_prompt(),
        output_format: OUTPUT_FORMAT.to_string(),
        mode: MODE.to_string(),
        size: dto.resolution.to_owned(),
        samples: dto.count.to_owned(),
    }
}

async fn parse_response_to_stability_generate_images_result(
    res: Response,
) -> Result<StabilityGenerateImagesResult, ApiError> {
    let status = res.status();

    match res.text().await {
        Ok(text) => {
            let result = StabilityGenerateImagesResult::from_text(&text);
            if let StabilityGenerateImagesResult::Rejected(_) = result {
                tracing::warn!(%status, %text, "stability returned no images");
            }
            Ok(result)
        }
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}
