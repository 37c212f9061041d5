use diesel::prelude::*;

use crate::{
    domain::product::{NewProductRecord, ProductRecord},
    models::product::{NewProduct as DbNewProduct, Product as DbProduct},
    repository::errors::RepositoryResult,
    repository::{DieselRepository, ProductReader, ProductWriter},
};

impl ProductReader for DieselRepository {
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<ProductRecord>> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let product = products::table
            .filter(products::id.eq(id))
            .first::<DbProduct>(&mut conn)
            .optional()?;

        Ok(product.map(Into::into))
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(&self, new_product: &NewProductRecord) -> RepositoryResult<ProductRecord> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let db_new = DbNewProduct::from(new_product);

        let created = diesel::insert_into(products::table)
            .values(&db_new)
            .get_result::<DbProduct>(&mut conn)?;

        Ok(created.into())
    }
}
