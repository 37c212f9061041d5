use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use thiserror::Error;

use crate::domain::asset::AssetFile;
use crate::domain::response::ProductResponse;

/// Errors raised before a response envelope could be obtained.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request to product API failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Validated product ready to be sent to the server.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPayload {
    pub name_product: String,
    pub description: String,
    pub price: f64,
    pub file: AssetFile,
}

/// Transport used by the submission controller.
#[async_trait]
pub trait ProductApi: Send + Sync {
    async fn create_product(&self, payload: ProductPayload) -> Result<ProductResponse, TransportError>;
}

/// `ProductApi` over HTTP: posts the payload as `multipart/form-data`.
#[derive(Clone)]
pub struct HttpProductApi {
    client: Client,
    base_url: String,
}

impl HttpProductApi {
    pub fn new(base_url: impl Into<String>) -> Result<Self, TransportError> {
        let client = Client::builder().timeout(Duration::from_secs(60)).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/api/products", self.base_url)
    }
}

fn build_form(payload: ProductPayload) -> Result<Form, TransportError> {
    let ProductPayload {
        name_product,
        description,
        price,
        file,
    } = payload;

    let mut part = Part::bytes(file.bytes).file_name(file.file_name);
    if let Some(content_type) = file.content_type.as_deref() {
        part = part.mime_str(content_type)?;
    }

    Ok(Form::new()
        .text("nameProduct", name_product)
        .text("description", description)
        .text("price", price.to_string())
        .part("file", part))
}

#[async_trait]
impl ProductApi for HttpProductApi {
    async fn create_product(&self, payload: ProductPayload) -> Result<ProductResponse, TransportError> {
        let form = build_form(payload)?;
        let response = self
            .client
            .post(self.endpoint())
            .multipart(form)
            .send()
            .await?;

        log::debug!("Product API answered {}", response.status());

        // Failure envelopes arrive with 4xx/5xx statuses and are decoded the
        // same way as successes.
        Ok(response.json::<ProductResponse>().await?)
    }
}
