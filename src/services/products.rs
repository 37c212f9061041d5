use thiserror::Error;

use crate::domain::product::{NewProductRecord, ProductRecord};
use crate::repository::ProductWriter;
use crate::repository::errors::RepositoryError;
use crate::uploader::{AssetUploader, UploadError};
use crate::validation::{
    self, Field, FilePolicy, ProductCandidate, ValidationFailure, rules::FILE_REQUIRED,
};

/// Result type returned by the product submission service.
pub type SubmissionResult<T> = Result<T, SubmissionError>;

/// Ways a product submission can fail.
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// The payload broke one or more field rules.
    #[error(transparent)]
    Invalid(#[from] ValidationFailure),
    /// The asset host could not store the file.
    #[error("failed to upload product file: {0}")]
    Upload(#[from] UploadError),
    /// The product could not be persisted.
    #[error("failed to persist product: {0}")]
    Repository(#[from] RepositoryError),
}

/// Validates, uploads and persists a submitted product.
///
/// Nothing is uploaded unless validation passes, and nothing is persisted
/// unless the upload succeeds. The stored `file_url` is always the URL
/// returned by `uploader`.
pub async fn submit_product<R, U>(
    repo: &R,
    uploader: &U,
    folder: &str,
    candidate: ProductCandidate,
) -> SubmissionResult<ProductRecord>
where
    R: ProductWriter + ?Sized,
    U: AssetUploader + ?Sized,
{
    let product = validation::validate(candidate, FilePolicy::StrictRequired)?;

    let Some(file) = product.file else {
        return Err(ValidationFailure::single(Field::File, FILE_REQUIRED).into());
    };

    let asset = uploader.upload(file, folder).await?;

    let new_product = NewProductRecord::new(
        product.name_product,
        product.description,
        product.price,
        &asset,
    );
    let created = repo.create_product(&new_product)?;

    log::info!("Created product {} with image {}", created.id, created.file_url);

    Ok(created)
}
