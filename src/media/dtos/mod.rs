pub mod generate_media_dto;
