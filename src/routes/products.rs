use actix_multipart::MultipartError;
use actix_multipart::form::MultipartForm;
use actix_web::error::InternalError;
use actix_web::{HttpRequest, HttpResponse, Responder, post, web};

use crate::config::ServerConfig;
use crate::domain::response::ProductResponse;
use crate::forms::products::SubmitProductForm;
use crate::repository::DieselRepository;
use crate::services::products::{self, SubmissionError};
use crate::uploader::AssetUploader;

#[post("/api/products")]
/// Create a product from a multipart form and answer with a JSON envelope.
///
/// * `201` with the stored record on success.
/// * `400` with every field error when validation fails.
/// * `500` with a generic message for any other failure.
pub async fn create_product(
    repo: web::Data<DieselRepository>,
    uploader: web::Data<dyn AssetUploader>,
    server_config: web::Data<ServerConfig>,
    MultipartForm(form): MultipartForm<SubmitProductForm>,
) -> impl Responder {
    let candidate = match form.into_candidate() {
        Ok(candidate) => candidate,
        Err(err) => {
            log::error!("Failed to read uploaded product file: {err}");
            return HttpResponse::InternalServerError().json(ProductResponse::failure());
        }
    };

    let result = products::submit_product(
        repo.get_ref(),
        uploader.get_ref(),
        &server_config.upload_folder,
        candidate,
    )
    .await;

    match result {
        Ok(product) => HttpResponse::Created().json(ProductResponse::created(product)),
        Err(SubmissionError::Invalid(failure)) => {
            log::info!("Rejected product submission: {failure}");
            HttpResponse::BadRequest().json(ProductResponse::invalid(failure.messages()))
        }
        Err(SubmissionError::Upload(err)) => {
            log::error!("Failed to upload product file: {err}");
            HttpResponse::InternalServerError().json(ProductResponse::failure())
        }
        Err(SubmissionError::Repository(err)) => {
            log::error!("Failed to create product: {err}");
            HttpResponse::InternalServerError().json(ProductResponse::failure())
        }
    }
}

/// Replace multipart extraction errors with the generic failure envelope.
pub fn multipart_error_handler(err: MultipartError, _req: &HttpRequest) -> actix_web::Error {
    log::error!("Failed to parse product upload: {err}");
    InternalError::from_response(
        err,
        HttpResponse::InternalServerError().json(ProductResponse::failure()),
    )
    .into()
}
