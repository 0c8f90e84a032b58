//! Catalog Domain Models
//!
//! Brands and products are loaded once from fixtures and never mutated.

use serde::{Deserialize, Serialize};

/// Identifier shared by brands and products.
pub type CatalogId = u32;

/// A catalog grouping of products.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Brand {
    pub id: CatalogId,
    pub name: String,
}

/// A purchasable catalog item belonging to one brand.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: CatalogId,

    /// Foreign key to [`Brand::id`]; not checked since the data is static
    pub brand_id: CatalogId,

    pub name: String,

    pub description: String,

    /// Price in whole currency units
    pub price: u32,

    #[serde(default)]
    pub image_urls: Vec<String>,
}

impl Product {
    /// Case-insensitive substring match against name and description.
    ///
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

/// Search parameters accepted by `GET /api/products`, either in the query
/// string or as a JSON body.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
}
