//! LED Commands
//!
//! Mutations of the device: storing, displaying and deleting images,
//! clearing the matrix.

use crate::context::ApiConfig;
use crate::error::ApiError;
use super::{send, LedRequest};

pub async fn clear_display(config: &ApiConfig) -> Result<(), ApiError> {
    send(LedRequest::clear(config)).await?;
    Ok(())
}

pub async fn upload_image(config: &ApiConfig, file: web_sys::File) -> Result<(), ApiError> {
    send(LedRequest::upload(config, file)).await?;
    Ok(())
}

/// Ask the server to fetch `url` into storage.
pub async fn download_image(config: &ApiConfig, url: &str) -> Result<(), ApiError> {
    send(LedRequest::download(config, url)).await?;
    Ok(())
}

pub async fn display_image(config: &ApiConfig, name: &str, x: &str, y: &str) -> Result<(), ApiError> {
    send(LedRequest::display(config, name, x, y)).await?;
    Ok(())
}

pub async fn delete_image(config: &ApiConfig, name: &str) -> Result<(), ApiError> {
    send(LedRequest::delete(config, name)).await?;
    Ok(())
}
