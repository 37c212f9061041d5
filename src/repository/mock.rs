use mockall::mock;

use super::ProductWriter;
use crate::domain::product::{NewProductRecord, ProductRecord};
use crate::repository::errors::RepositoryResult;

mock! {
    pub ProductWriter {}

    impl ProductWriter for ProductWriter {
        fn create_product(&self, new_product: &NewProductRecord) -> RepositoryResult<ProductRecord>;
    }
}
