use std::io::{Read, Seek};

use actix_multipart::form::{MultipartForm, tempfile::TempFile, text::Text};

use crate::domain::asset::AssetFile;
use crate::validation::{FileInput, PriceInput, ProductCandidate};

#[derive(MultipartForm)]
/// Multipart form posted to create a product.
///
/// Every field is optional at this level so that missing values surface as
/// validation errors rather than extractor failures.
pub struct SubmitProductForm {
    #[multipart(rename = "nameProduct")]
    pub name_product: Option<Text<String>>,
    pub description: Option<Text<String>>,
    /// Sent as text; coerced to a number during validation.
    pub price: Option<Text<String>>,
    /// Bounded only by the request-wide `MultipartFormConfig::total_limit`.
    pub file: Option<TempFile>,
}

impl SubmitProductForm {
    /// Convert the received parts into a validation candidate.
    pub fn into_candidate(self) -> std::io::Result<ProductCandidate> {
        let file = match self.file {
            Some(upload) => read_upload(upload)?,
            None => FileInput::Missing,
        };

        Ok(ProductCandidate {
            name_product: self.name_product.map(|text| text.0),
            description: self.description.map(|text| text.0),
            price: self
                .price
                .map(|text| PriceInput::Text(text.0))
                .unwrap_or(PriceInput::Missing),
            file,
        })
    }
}

fn read_upload(mut upload: TempFile) -> std::io::Result<FileInput> {
    let file_name = match upload.file_name.take() {
        // A plain text part under the `file` name.
        None => return Ok(FileInput::NotAFile),
        // Browsers send an empty, unnamed file part when nothing was chosen.
        Some(name) if name.is_empty() && upload.size == 0 => return Ok(FileInput::Missing),
        Some(name) => name,
    };

    let mut bytes = Vec::with_capacity(upload.size);
    upload.file.rewind()?;
    upload.file.read_to_end(&mut bytes)?;

    let mut asset = AssetFile::new(file_name, bytes);
    if let Some(content_type) = upload.content_type.as_ref() {
        asset = asset.with_content_type(content_type.essence_str());
    }

    Ok(FileInput::File(asset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Seek, SeekFrom, Write};

    use tempfile::NamedTempFile;

    fn temp_upload(contents: &[u8], file_name: Option<&str>, content_type: Option<&str>) -> TempFile {
        let mut file = NamedTempFile::new().expect("create temp file");
        file.write_all(contents).expect("write upload");
        file.as_file_mut()
            .seek(SeekFrom::Start(0))
            .expect("rewind upload");

        TempFile {
            file,
            content_type: content_type.and_then(|value| value.parse().ok()),
            file_name: file_name.map(str::to_string),
            size: contents.len(),
        }
    }

    fn form(file: Option<TempFile>) -> SubmitProductForm {
        SubmitProductForm {
            name_product: Some(Text("Desk Lamp".to_string())),
            description: Some(Text("Warm light".to_string())),
            price: Some(Text("19.90".to_string())),
            file,
        }
    }

    #[test]
    fn file_part_becomes_asset() {
        let upload = temp_upload(b"\x89PNG", Some("lamp.png"), Some("image/png"));

        let candidate = form(Some(upload)).into_candidate().expect("read upload");

        assert_eq!(candidate.name_product.as_deref(), Some("Desk Lamp"));
        assert_eq!(candidate.price, PriceInput::Text("19.90".to_string()));
        match candidate.file {
            FileInput::File(asset) => {
                assert_eq!(asset.file_name, "lamp.png");
                assert_eq!(asset.content_type.as_deref(), Some("image/png"));
                assert_eq!(asset.bytes, b"\x89PNG".to_vec());
            }
            other => panic!("expected a file, got {other:?}"),
        }
    }

    #[test]
    fn unnamed_part_is_not_a_file() {
        let upload = temp_upload(b"https://evil.example/x.png", None, None);

        let candidate = form(Some(upload)).into_candidate().expect("read upload");

        assert_eq!(candidate.file, FileInput::NotAFile);
    }

    #[test]
    fn empty_unnamed_selection_is_missing() {
        let upload = temp_upload(b"", Some(""), Some("application/octet-stream"));

        let candidate = form(Some(upload)).into_candidate().expect("read upload");

        assert_eq!(candidate.file, FileInput::Missing);
    }

    #[test]
    fn absent_fields_stay_absent() {
        let candidate = SubmitProductForm {
            name_product: None,
            description: None,
            price: None,
            file: None,
        }
        .into_candidate()
        .expect("no upload to read");

        assert!(candidate.name_product.is_none());
        assert_eq!(candidate.price, PriceInput::Missing);
        assert_eq!(candidate.file, FileInput::Missing);
    }
}
