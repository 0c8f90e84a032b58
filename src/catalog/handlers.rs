//! REST API handlers for brand and product lookup.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    routing::get,
    Json, Router,
};

use super::models::{Brand, Product, SearchParams};
use crate::error::{AppError, Result};
use crate::state::SharedState;

/// Creates routes for catalog operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/api/brands", get(list_brands))
        .route("/api/brands/:id/products", get(list_brand_products))
        .route("/api/products", get(search_products))
}

/// Endpoint: GET /api/brands
async fn list_brands(State(state): State<SharedState>) -> Json<Vec<Brand>> {
    Json(state.catalog.brands().to_vec())
}

/// Endpoint: GET /api/brands/:id/products
async fn list_brand_products(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Product>>> {
    let products = state.catalog.products_for_brand(&id)?;
    Ok(Json(products.into_iter().cloned().collect()))
}

/// Endpoint: GET /api/products?query=
///
/// Falls back to a JSON body `{"query": ...}` when the query string has none.
async fn search_products(
    State(state): State<SharedState>,
    params: std::result::Result<Query<SearchParams>, QueryRejection>,
    body: std::result::Result<Json<SearchParams>, JsonRejection>,
) -> Result<Json<Vec<Product>>> {
    let Query(params) = params.map_err(|e| AppError::bad_request(e.body_text()))?;
    let query = params
        .query
        .or_else(|| body.ok().and_then(|Json(b)| b.query));

    let products = state.catalog.search(query.as_deref())?;
    tracing::debug!(query = ?query, hits = products.len(), "Product search");

    Ok(Json(products.into_iter().cloned().collect()))
}
