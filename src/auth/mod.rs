//! Authentication Module
//!
//! Plaintext login against the fixture user directory.

pub mod directory;
pub mod handlers;
pub mod models;

pub use directory::UserDirectory;
pub use handlers::routes;
