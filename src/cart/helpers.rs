//! Shopping Cart Business Logic Helpers
//!
//! This module contains helper functions for token resolution, cart
//! rendering and formatting.

use axum::http::HeaderMap;

use super::models::CartEntry;
use crate::catalog::{models::Product, Catalog};

/// Header accepted as an alternative to the `accessToken` body field
pub const ACCESS_TOKEN_HEADER: &str = "x-access-token";

/// Picks the access token from the request body, falling back to the
/// `X-Access-Token` header.
pub fn resolve_access_token(headers: &HeaderMap, body_token: Option<String>) -> Option<String> {
    body_token.or_else(|| {
        headers
            .get(ACCESS_TOKEN_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned)
    })
}

/// Resolves cart entries to their catalog products, preserving order.
pub fn resolve_cart_products(catalog: &Catalog, entries: &[CartEntry]) -> Vec<Product> {
    entries
        .iter()
        .filter_map(|e| catalog.product(e.product_id).cloned())
        .collect()
}

/// Produces a human-readable one-line summary for a list of cart products.
///
/// Repeated products are counted in order of first appearance.
/// Example output: `"2x Sugar, 1x Glasses"`.
pub fn format_item_summary(products: &[Product]) -> String {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for product in products {
        if let Some(existing) = counts.iter_mut().find(|(name, _)| *name == product.name) {
            existing.1 += 1;
        } else {
            counts.push((product.name.as_str(), 1));
        }
    }

    counts
        .iter()
        .map(|(name, qty)| format!("{qty}x {name}"))
        .collect::<Vec<_>>()
        .join(", ")
}
