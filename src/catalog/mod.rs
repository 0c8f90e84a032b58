//! Catalog Domain Module
//!
//! Static brands and products, with lookup by brand and free-text search.

pub mod handlers;
pub mod models;
pub mod store;

pub use handlers::routes;
pub use store::Catalog;
