use std::sync::Arc;

use crate::db::{DbConnection, SharedPool};
use crate::domain::product::{NewProductRecord, ProductRecord};
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod product;

#[cfg(test)]
pub mod mock;

#[derive(Clone)]
/// Diesel-backed repository implementation over the shared SQLite pool.
pub struct DieselRepository {
    pool: Arc<SharedPool>, // initialized by the first query
}

impl DieselRepository {
    /// Create a new repository using the provided pool handle.
    pub fn new(pool: Arc<SharedPool>) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?.get()?)
    }
}

/// Read-only operations over product records.
pub trait ProductReader {
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<ProductRecord>>;
}

/// Write operations over product records.
pub trait ProductWriter {
    fn create_product(&self, new_product: &NewProductRecord) -> RepositoryResult<ProductRecord>;
}
