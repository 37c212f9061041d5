//! Helpers for integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;

use pushkind_products::config::ServerConfig;
use pushkind_products::db::SharedPool;
use pushkind_products::domain::asset::{AssetFile, UploadedAsset};
use pushkind_products::repository::DieselRepository;
use pushkind_products::uploader::{AssetUploader, CloudinaryConfig, UploadError, UploadResult};

pub const STUB_URL: &str = "https://res.cloudinary.com/demo/image/upload/stub.png";

/// Temporary database used in integration tests.
pub struct TestDb {
    filename: String,
    pool: Arc<SharedPool>,
}

impl TestDb {
    pub fn new(filename: &str) -> Self {
        std::fs::remove_file(filename).ok(); // Clean up old DB

        TestDb {
            filename: filename.to_string(),
            pool: Arc::new(SharedPool::new(filename)),
        }
    }

    pub fn pool(&self) -> Arc<SharedPool> {
        self.pool.clone()
    }

    pub fn repo(&self) -> DieselRepository {
        DieselRepository::new(self.pool())
    }
}

impl Drop for TestDb {
    fn drop(&mut self) {
        std::fs::remove_file(&self.filename).ok();
        std::fs::remove_file(format!("{}-shm", &self.filename)).ok();
        std::fs::remove_file(format!("{}-wal", &self.filename)).ok();
    }
}

/// Uploader answering with a fixed URL, or failing when `fail` is set.
#[derive(Debug, Default)]
pub struct StubUploader {
    pub fail: bool,
}

#[async_trait]
impl AssetUploader for StubUploader {
    async fn upload(&self, file: AssetFile, folder: &str) -> UploadResult<UploadedAsset> {
        assert!(!file.file_name.is_empty());
        assert!(!folder.is_empty());
        if self.fail {
            return Err(UploadError::Rejected {
                status: 503,
                message: "asset host unavailable".to_string(),
            });
        }
        Ok(UploadedAsset {
            secure_url: STUB_URL.to_string(),
        })
    }
}

/// Server settings pointing at `database_url` with a fake asset host.
pub fn server_config(database_url: &str, max_upload_bytes: usize) -> ServerConfig {
    ServerConfig {
        database_url: database_url.to_string(),
        address: "127.0.0.1".to_string(),
        port: 0,
        upload_folder: "ecommerce/products".to_string(),
        max_upload_bytes,
        cloudinary: CloudinaryConfig::new("demo", "key", "secret"),
    }
}
