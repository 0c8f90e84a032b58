//! Read-only catalog store.

use std::path::Path;

use super::models::{Brand, CatalogId, Product};
use crate::error::{AppError, Result};

const EMBEDDED_BRANDS: &str = include_str!("../../data/brands.json");
const EMBEDDED_PRODUCTS: &str = include_str!("../../data/products.json");

/// Immutable in-memory brand and product collections.
#[derive(Debug, Clone)]
pub struct Catalog {
    brands: Vec<Brand>,
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(brands: Vec<Brand>, products: Vec<Product>) -> Self {
        Self { brands, products }
    }

    /// Parses the brand and product fixture documents.
    pub fn from_json(brands: &str, products: &str) -> Result<Self> {
        Ok(Self::new(
            serde_json::from_str(brands)?,
            serde_json::from_str(products)?,
        ))
    }

    /// The fixture set compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_BRANDS, EMBEDDED_PRODUCTS)
    }

    /// Reads `brands.json` and `products.json` from `dir`.
    pub fn load(dir: &Path) -> Result<Self> {
        let brands = std::fs::read_to_string(dir.join("brands.json"))?;
        let products = std::fs::read_to_string(dir.join("products.json"))?;
        Self::from_json(&brands, &products)
    }

    pub fn brands(&self) -> &[Brand] {
        &self.brands
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn brand(&self, id: CatalogId) -> Option<&Brand> {
        self.brands.iter().find(|b| b.id == id)
    }

    pub fn product(&self, id: CatalogId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products of the brand named by `raw_id`.
    ///
    /// An id that does not parse, or parses but names no brand, is `NotFound`.
    /// A known brand with no products yields an empty list.
    pub fn products_for_brand(&self, raw_id: &str) -> Result<Vec<&Product>> {
        let brand = parse_id(raw_id)
            .and_then(|id| self.brand(id))
            .ok_or_else(|| AppError::not_found(format!("brand `{raw_id}`")))?;

        Ok(self
            .products
            .iter()
            .filter(|p| p.brand_id == brand.id)
            .collect())
    }

    /// Case-insensitive search over product names and descriptions.
    pub fn search(&self, query: Option<&str>) -> Result<Vec<&Product>> {
        let needle = query
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .ok_or_else(|| AppError::bad_request("query is required"))?
            .to_lowercase();

        Ok(self.products.iter().filter(|p| p.matches(&needle)).collect())
    }
}

/// Parses a path or body identifier.
pub fn parse_id(raw: &str) -> Option<CatalogId> {
    raw.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::embedded().expect("embedded fixtures parse")
    }

    #[test]
    fn test_embedded_fixture_shape() {
        let catalog = catalog();
        assert_eq!(catalog.brands().len(), 5);
        assert!(catalog.product(9).is_some());
        assert!(catalog.product(15).is_none());
        assert!(catalog.product(16).is_none());
    }

    #[test]
    fn test_products_for_brand_filters_by_brand_id() {
        let catalog = catalog();
        for brand in catalog.brands() {
            let products = catalog.products_for_brand(&brand.id.to_string()).unwrap();
            assert!(products.iter().all(|p| p.brand_id == brand.id));
        }
        assert_eq!(catalog.products_for_brand("2").unwrap().len(), 2);
    }

    #[test]
    fn test_products_for_unknown_brand_is_not_found() {
        let catalog = catalog();
        for raw in ["6", "0", "abc", "", "-1", "2.5"] {
            let err = catalog.products_for_brand(raw).unwrap_err();
            assert!(matches!(err, AppError::NotFound(_)), "raw id {raw:?}");
        }
    }

    #[test]
    fn test_brand_without_products_is_empty_not_missing() {
        let catalog = Catalog::new(
            vec![Brand {
                id: 7,
                name: "Empty".into(),
            }],
            Vec::new(),
        );
        assert!(catalog.products_for_brand("7").unwrap().is_empty());
    }

    #[test]
    fn test_search() {
        let catalog = catalog();
        let hits = catalog.search(Some("awful")).unwrap();
        assert_eq!(hits.len(), 1);

        let hits = catalog.search(Some("AWFUL")).unwrap();
        assert_eq!(hits.len(), 1);

        assert!(catalog.search(Some("no such glasses")).unwrap().is_empty());
    }

    #[test]
    fn test_search_requires_query() {
        let catalog = catalog();
        for query in [None, Some(""), Some("   ")] {
            let err = catalog.search(query).unwrap_err();
            assert!(matches!(err, AppError::BadRequest(_)));
        }
    }
}
