/// Password hashing - bcrypt with per-hash random salt
use crate::error::{Result, ServerError};

/// bcrypt ignores everything past this many bytes
pub const MAX_PASSWORD_BYTES: usize = 72;

#[derive(Debug, Clone)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a password using bcrypt
    ///
    /// Passwords longer than `MAX_PASSWORD_BYTES` are refused instead of
    /// being silently truncated.
    pub fn hash_password(&self, password: &str) -> Result<String> {
        if password.len() > MAX_PASSWORD_BYTES {
            return Err(ServerError::Validation(format!(
                "password exceeds {} bytes",
                MAX_PASSWORD_BYTES
            )));
        }
        bcrypt::hash(password, self.cost).map_err(ServerError::from)
    }

    /// Verify a password against a hash (constant-time comparison)
    ///
    /// An over-long password never matches, even when its first
    /// `MAX_PASSWORD_BYTES` bytes do. The hash is still checked so the
    /// rejection costs the same as any other miss.
    pub fn verify_password(&self, password: &str, hash: &str) -> Result<bool> {
        let matched = bcrypt::verify(password, hash).map_err(ServerError::from)?;
        Ok(matched && password.len() <= MAX_PASSWORD_BYTES)
    }

    /// `hash_password` on the blocking pool
    pub async fn hash(&self, password: String) -> Result<String> {
        let hasher = self.clone();
        tokio::task::spawn_blocking(move || hasher.hash_password(&password))
            .await
            .map_err(|e| ServerError::Internal(format!("Hashing task failed: {}", e)))?
    }

    /// `verify_password` on the blocking pool
    pub async fn verify(&self, password: String, hash: String) -> Result<bool> {
        let hasher = self.clone();
        tokio::task::spawn_blocking(move || hasher.verify_password(&password, &hash))
            .await
            .map_err(|e| ServerError::Internal(format!("Verification task failed: {}", e)))?
    }
}
