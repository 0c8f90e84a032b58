//! REST API handlers for shopping cart operations
//!
//! Every endpoint checks the access token before looking at the product id,
//! so a request without a valid identity is always `401`.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::HeaderMap,
    routing::{get, post},
    Json, Router,
};

use super::{helpers::*, models::*};
use crate::catalog::{models::Product, store::parse_id};
use crate::error::{AppError, Result};
use crate::state::{AppState, SharedState};

/// Creates routes for cart-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/api/me/cart", get(get_cart).post(add_from_body))
        .route("/api/me/cart/:id", post(add_from_path).delete(remove_item))
}

/// Unpacks the optional JSON body shared by all cart endpoints.
///
/// A missing or malformed body carries no token.
fn cart_request(
    headers: &HeaderMap,
    body: std::result::Result<Json<CartRequest>, JsonRejection>,
) -> (Option<String>, Option<ProductRef>) {
    let request = body.map(|Json(r)| r).unwrap_or_default();
    let token = resolve_access_token(headers, request.access_token);
    (token, request.id)
}

/// Endpoint: GET /api/me/cart
async fn get_cart(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: std::result::Result<Json<CartRequest>, JsonRejection>,
) -> Result<Json<Vec<Product>>> {
    let (token, _) = cart_request(&headers, body);
    let entries = state.sessions.cart(token.as_deref())?;
    Ok(Json(resolve_cart_products(&state.catalog, &entries)))
}

/// Endpoint: POST /api/me/cart
/// Body: `{ "accessToken": "...", "id": 9 }`
async fn add_from_body(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: std::result::Result<Json<CartRequest>, JsonRejection>,
) -> Result<Json<Vec<Product>>> {
    let (token, product) = cart_request(&headers, body);
    state.sessions.authorize(token.as_deref())?;

    let product = product.ok_or_else(|| AppError::bad_request("product id is required"))?;
    add_to_cart(&state, token.as_deref(), product.id()).map(Json)
}

/// Endpoint: POST /api/me/cart/:id
async fn add_from_path(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: std::result::Result<Json<CartRequest>, JsonRejection>,
) -> Result<Json<Vec<Product>>> {
    let (token, _) = cart_request(&headers, body);
    add_to_cart(&state, token.as_deref(), parse_id(&id)).map(Json)
}

/// Endpoint: DELETE /api/me/cart/:id
async fn remove_item(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: std::result::Result<Json<CartRequest>, JsonRejection>,
) -> Result<Json<Vec<Product>>> {
    let (token, _) = cart_request(&headers, body);
    remove_from_cart(&state, token.as_deref(), parse_id(&id)).map(Json)
}

/// Adds one entry for `product_id` to the session's cart.
///
/// `product_id` is `None` when the client sent something that is not an id.
pub fn add_to_cart(
    state: &AppState,
    token: Option<&str>,
    product_id: Option<u32>,
) -> Result<Vec<Product>> {
    let username = state.sessions.authorize(token)?;

    let product = product_id
        .and_then(|id| state.catalog.product(id))
        .ok_or_else(|| AppError::not_found("product does not exist"))?;

    let entries = state.sessions.add(
        token,
        CartEntry {
            product_id: product.id,
        },
    )?;
    let products = resolve_cart_products(&state.catalog, &entries);

    tracing::debug!(
        %username,
        product_id = product.id,
        cart = %format_item_summary(&products),
        "Added to cart"
    );
    Ok(products)
}

/// Removes one entry for `product_id` from the session's cart.
pub fn remove_from_cart(
    state: &AppState,
    token: Option<&str>,
    product_id: Option<u32>,
) -> Result<Vec<Product>> {
    let username = state.sessions.authorize(token)?;

    let product_id =
        product_id.ok_or_else(|| AppError::not_found("product is not in the cart"))?;
    let entries = state.sessions.remove(token, product_id)?;
    let products = resolve_cart_products(&state.catalog, &entries);

    tracing::debug!(
        %username,
        product_id,
        cart = %format_item_summary(&products),
        "Removed from cart"
    );
    Ok(products)
}
