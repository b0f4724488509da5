pub mod generate_media_response;
