//! Shopping Cart Domain Models
//!
//! This module contains all data structures related to sessions and carts.

use serde::Deserialize;
use serde_json::Value;

use crate::catalog::{models::CatalogId, store::parse_id};

// =============================================================================
// Cart Domain Models
// =============================================================================

/// Reference to a product held in a session's cart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartEntry {
    pub product_id: CatalogId,
}

/// An authenticated user's session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub username: String,

    /// Ordered cart contents; repeated adds stay as repeated entries
    pub cart: Vec<CartEntry>,
}

impl Session {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            cart: Vec::new(),
        }
    }
}

/// Product identifier as sent by clients, either `9` or `"9"`.
///
/// Any other JSON value deserializes to `Invalid`, which names no product.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ProductRef {
    Number(i64),
    Text(String),
    Invalid(Value),
}

impl ProductRef {
    /// The catalog id this reference names, if it is a valid identifier.
    pub fn id(&self) -> Option<CatalogId> {
        match self {
            Self::Number(n) => CatalogId::try_from(*n).ok(),
            Self::Text(s) => parse_id(s),
            Self::Invalid(_) => None,
        }
    }
}

/// Body accepted by every `/api/me/cart` endpoint
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartRequest {
    pub access_token: Option<String>,

    /// Only read by `POST /api/me/cart`
    pub id: Option<ProductRef>,
}
