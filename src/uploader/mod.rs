use async_trait::async_trait;
use thiserror::Error;

use crate::domain::asset::{AssetFile, UploadedAsset};

pub mod cloudinary;

#[cfg(test)]
pub mod mock;

pub use cloudinary::{CloudinaryConfig, CloudinaryUploader};

/// Result type returned by asset uploads.
pub type UploadResult<T> = Result<T, UploadError>;

/// Errors that can occur while storing an asset with the asset host.
#[derive(Debug, Error)]
pub enum UploadError {
    /// The request could not be sent or its response could not be read.
    #[error("asset host request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The asset host answered with an error.
    #[error("asset host rejected the upload ({status}): {message}")]
    Rejected { status: u16, message: String },
}

/// Stores raw file bytes and returns a durable URL.
#[async_trait]
pub trait AssetUploader: Send + Sync {
    async fn upload(&self, file: AssetFile, folder: &str) -> UploadResult<UploadedAsset>;
}
