pub mod asset;
pub mod product;
pub mod response;
