use serde::Deserialize;

/// A file picked by the user or received in an upload.
///
/// Always carries a file name, which is what distinguishes it from a plain
/// text field that merely happens to be called `file`.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetFile {
    /// Original file name as supplied by the client.
    pub file_name: String,
    /// MIME type reported by the client, if any.
    pub content_type: Option<String>,
    /// Raw file contents.
    pub bytes: Vec<u8>,
}

impl AssetFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: None,
            bytes,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Whether the reported MIME type is an image type.
    pub fn is_image(&self) -> bool {
        self.content_type
            .as_deref()
            .map(|value| value.starts_with("image/"))
            .unwrap_or(false)
    }
}

/// Successful result of storing an asset with the asset host.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UploadedAsset {
    /// Durable HTTPS URL of the stored asset.
    pub secure_url: String,
}
