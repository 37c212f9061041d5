use async_trait::async_trait;
use mockall::mock;

use super::{AssetUploader, UploadResult};
use crate::domain::asset::{AssetFile, UploadedAsset};

mock! {
    pub AssetUploader {}

    #[async_trait]
    impl AssetUploader for AssetUploader {
        async fn upload(&self, file: AssetFile, folder: &str) -> UploadResult<UploadedAsset>;
    }
}
