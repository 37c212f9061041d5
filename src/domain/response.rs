use serde::{Deserialize, Serialize};

use crate::domain::product::ProductRecord;

pub const MESSAGE_CREATED: &str = "Producto creado correctamente";
pub const MESSAGE_VALIDATION_FAILED: &str = "Validación fallida";
pub const MESSAGE_INTERNAL_ERROR: &str = "Error interno del servidor";

/// JSON envelope returned by `POST /api/products`.
///
/// `data` is present only on success and `errors` only on validation
/// failures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<ProductRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl ProductResponse {
    pub fn created(record: ProductRecord) -> Self {
        Self {
            success: true,
            message: MESSAGE_CREATED.to_string(),
            data: Some(record),
            errors: None,
        }
    }

    pub fn invalid(errors: Vec<String>) -> Self {
        Self {
            success: false,
            message: MESSAGE_VALIDATION_FAILED.to_string(),
            data: None,
            errors: Some(errors),
        }
    }

    pub fn failure() -> Self {
        Self {
            success: false,
            message: MESSAGE_INTERNAL_ERROR.to_string(),
            data: None,
            errors: None,
        }
    }
}
