use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::domain::asset::AssetFile;

/// Creates and releases preview resources for selected files.
pub trait PreviewProvider {
    type Handle;

    /// Create a preview for `file`, or `None` when it cannot be previewed.
    fn create(&mut self, file: &AssetFile) -> Option<Self::Handle>;

    /// Release a preview previously returned by [`PreviewProvider::create`].
    fn revoke(&mut self, handle: Self::Handle);
}

/// Image preview backed by a named temporary file.
#[derive(Debug)]
pub struct FilePreview {
    file: NamedTempFile,
}

impl FilePreview {
    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

/// Writes image previews to temporary files, removed on revocation.
#[derive(Debug, Default)]
pub struct TempFilePreviews;

impl PreviewProvider for TempFilePreviews {
    type Handle = FilePreview;

    fn create(&mut self, file: &AssetFile) -> Option<FilePreview> {
        let extension = Path::new(&file.file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| format!(".{ext}"))
            .unwrap_or_default();

        let written = tempfile::Builder::new()
            .prefix("preview-")
            .suffix(&extension)
            .tempfile()
            .and_then(|mut temp| {
                temp.write_all(&file.bytes)?;
                Ok(temp)
            });

        match written {
            Ok(temp) => Some(FilePreview { file: temp }),
            Err(err) => {
                log::warn!("Failed to create preview for {}: {err}", file.file_name);
                None
            }
        }
    }

    fn revoke(&mut self, handle: FilePreview) {
        let path = handle.path().to_path_buf();
        if let Err(err) = handle.file.close() {
            log::warn!("Failed to remove preview {}: {err}", path.display());
        }
    }
}
