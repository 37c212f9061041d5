use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product::{NewProductRecord as DomainNewProduct, ProductRecord};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::products)]
pub struct Product {
    pub id: i32,
    pub name_product: String,
    pub description: String,
    pub price: f64,
    pub file_url: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct<'a> {
    pub name_product: &'a str,
    pub description: &'a str,
    pub price: f64,
    pub file_url: &'a str,
    pub created_at: NaiveDateTime,
}

impl From<Product> for ProductRecord {
    fn from(value: Product) -> Self {
        Self {
            id: value.id,
            name_product: value.name_product,
            description: value.description,
            price: value.price,
            file_url: value.file_url,
            created_at: value.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewProduct> for NewProduct<'a> {
    fn from(value: &'a DomainNewProduct) -> Self {
        Self {
            name_product: value.name_product(),
            description: value.description(),
            price: value.price(),
            file_url: value.file_url(),
            created_at: value.created_at(),
        }
    }
}
