//! Lumina Core
//!
//! Platform-agnostic domain types, traits, and error handling for the Lumina
//! authentication backend.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `UserRecord`, `UserProfile`, `UserId`, `Role`
//! - **Core Traits**: `RecordStore`, the contract every user store implements
//! - **Validation**: the email shape check shared by registration and login
//! - **Error Handling**: Unified `LuminaError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use lumina_core::types::{CreateUser, Role, UserId, UserRecord};
//!
//! let id = UserId::from_position(0);
//! assert_eq!(id.as_str(), "user-1");
//!
//! let user = UserRecord::create(
//!     id,
//!     CreateUser {
//!         email: "alice@example.com".to_string(),
//!         password_hash: "$2b$04$hash".to_string(),
//!         ..Default::default()
//!     },
//! );
//! assert_eq!(user.role, Role::Student);
//! assert_eq!(user.branch, "General Studies");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use error::{LuminaError, Result};
pub use traits::RecordStore;
pub use types::{CreateUser, Role, UserId, UserProfile, UserRecord};
pub use validation::is_valid_email;
