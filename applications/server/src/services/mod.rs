/// Server services
pub mod credentials;
pub mod password;

pub use credentials::{CredentialService, Registration};
pub use password::PasswordHasher;
