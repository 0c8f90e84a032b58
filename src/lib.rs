//! Sunglasses Storefront Library
//!
//! A small REST API over a static sunglasses catalog, with plaintext login
//! and a per-session shopping cart.

// Domain modules
pub mod auth;
pub mod cart;
pub mod catalog;

// Infrastructure
pub mod config;
pub mod error;
pub mod router;
pub mod state;
