use async_trait::async_trait;
use mockall::mock;

use super::api::{ProductApi, ProductPayload, TransportError};
use crate::domain::response::ProductResponse;

mock! {
    pub ProductApi {}

    #[async_trait]
    impl ProductApi for ProductApi {
        async fn create_product(&self, payload: ProductPayload) -> Result<ProductResponse, TransportError>;
    }
}
