//! Session Registry
//!
//! Maps access tokens to sessions and their carts. The registry is owned by
//! the application state and passed to handlers; nothing here is global.

use dashmap::DashMap;
use uuid::Uuid;

use super::models::{CartEntry, Session};
use crate::auth::{models::User, UserDirectory};
use crate::catalog::models::CatalogId;
use crate::error::{AppError, Result};

// =============================================================================
// Session Registry
// =============================================================================

/// In-memory session storage.
///
/// Mutations of a single session happen under that entry's shard lock, so
/// concurrent requests for the same token are serialized.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    /// Sessions keyed by access token.
    sessions: DashMap<String, Session>,

    /// Access token issued to each username.
    tokens: DashMap<String, String>,
}

impl SessionRegistry {
    /// Pre-seeds an empty session for every user with a preset token.
    pub fn seeded(users: &UserDirectory) -> Self {
        let registry = Self::default();
        for user in users.users() {
            if user.access_token.is_some() {
                registry.open(user);
            }
        }
        registry
    }

    /// Returns the user's session token, creating the session if needed.
    pub fn open(&self, user: &User) -> String {
        let token = self
            .tokens
            .entry(user.username.clone())
            .or_insert_with(|| {
                user.access_token
                    .clone()
                    .unwrap_or_else(|| Uuid::new_v4().simple().to_string())
            })
            .clone();

        self.sessions
            .entry(token.clone())
            .or_insert_with(|| Session::new(&user.username));

        token
    }

    /// Username of the session behind `token`.
    pub fn authorize(&self, token: Option<&str>) -> Result<String> {
        let token = require_token(token)?;
        self.sessions
            .get(token)
            .map(|s| s.username.clone())
            .ok_or_else(invalid_token)
    }

    /// Snapshot of the cart behind `token`.
    pub fn cart(&self, token: Option<&str>) -> Result<Vec<CartEntry>> {
        let token = require_token(token)?;
        self.sessions
            .get(token)
            .map(|s| s.cart.clone())
            .ok_or_else(invalid_token)
    }

    /// Appends an entry and returns the updated cart.
    pub fn add(&self, token: Option<&str>, entry: CartEntry) -> Result<Vec<CartEntry>> {
        let token = require_token(token)?;
        let mut session = self.sessions.get_mut(token).ok_or_else(invalid_token)?;
        session.cart.push(entry);
        Ok(session.cart.clone())
    }

    /// Removes the first entry for `product_id` and returns the updated cart.
    pub fn remove(&self, token: Option<&str>, product_id: CatalogId) -> Result<Vec<CartEntry>> {
        let token = require_token(token)?;
        let mut session = self.sessions.get_mut(token).ok_or_else(invalid_token)?;

        let position = session
            .cart
            .iter()
            .position(|e| e.product_id == product_id)
            .ok_or_else(|| {
                AppError::not_found(format!("product {product_id} is not in the cart"))
            })?;

        session.cart.remove(position);
        Ok(session.cart.clone())
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

fn require_token(token: Option<&str>) -> Result<&str> {
    token
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| AppError::unauthorized("access token is required"))
}

fn invalid_token() -> AppError {
    AppError::unauthorized("invalid access token")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> SessionRegistry {
        SessionRegistry::seeded(&UserDirectory::embedded().unwrap())
    }

    fn entry(product_id: CatalogId) -> CartEntry {
        CartEntry { product_id }
    }

    #[test]
    fn test_seeded_sessions_start_empty() {
        let registry = registry();
        assert_eq!(registry.len(), 2);
        assert!(registry.cart(Some("123456")).unwrap().is_empty());
        assert_eq!(registry.authorize(Some("123456")).unwrap(), "greenlion235");
    }

    #[test]
    fn test_missing_or_unknown_token_is_unauthorized() {
        let registry = registry();
        for token in [None, Some(""), Some(" "), Some("12346"), Some("cat")] {
            assert!(matches!(
                registry.cart(token),
                Err(AppError::Unauthorized(_))
            ));
            assert!(matches!(
                registry.add(token, entry(9)),
                Err(AppError::Unauthorized(_))
            ));
            assert!(matches!(
                registry.remove(token, 9),
                Err(AppError::Unauthorized(_))
            ));
        }
    }

    #[test]
    fn test_add_keeps_order_and_duplicates() {
        let registry = registry();
        registry.add(Some("123456"), entry(9)).unwrap();
        registry.add(Some("123456"), entry(2)).unwrap();
        let cart = registry.add(Some("123456"), entry(9)).unwrap();
        assert_eq!(cart, vec![entry(9), entry(2), entry(9)]);
    }

    #[test]
    fn test_remove_takes_one_entry() {
        let registry = registry();
        registry.add(Some("123456"), entry(9)).unwrap();
        registry.add(Some("123456"), entry(2)).unwrap();
        registry.add(Some("123456"), entry(9)).unwrap();

        let cart = registry.remove(Some("123456"), 9).unwrap();
        assert_eq!(cart, vec![entry(2), entry(9)]);
    }

    #[test]
    fn test_remove_missing_entry_leaves_cart_unchanged() {
        let registry = registry();
        registry.add(Some("123456"), entry(9)).unwrap();

        let err = registry.remove(Some("123456"), 3).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(registry.cart(Some("123456")).unwrap(), vec![entry(9)]);
    }

    #[test]
    fn test_sessions_are_isolated() {
        let registry = registry();
        registry.add(Some("123456"), entry(9)).unwrap();
        assert!(registry.cart(Some("654321")).unwrap().is_empty());
    }
}
