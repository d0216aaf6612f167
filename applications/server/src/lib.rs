//! Lumina Server Library
//!
//! Authentication backend: user registration and credential checks over a
//! JSON user store.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod services;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use services::{CredentialService, PasswordHasher, Registration};
pub use state::AppState;
