/// Credential service - registration and login against the user store
use crate::{
    error::{Result, ServerError},
    services::{password::MAX_PASSWORD_BYTES, PasswordHasher},
};
use lumina_core::{is_valid_email, CreateUser, RecordStore, Role, UserId, UserRecord};
use std::sync::Arc;
use tokio::sync::Mutex;

pub const MISSING_CREDENTIALS: &str = "missing credentials";
pub const INVALID_EMAIL: &str = "invalid email format";
pub const INVALID_ROLE: &str = "invalid role";
pub const PASSWORD_TOO_LONG: &str = "password too long";
pub const USER_EXISTS: &str = "user already exists";
pub const INVALID_CREDENTIALS: &str = "invalid credentials";

/// Registration input
///
/// `email` and `password` are required; the rest fall back to defaults.
#[derive(Debug, Clone, Default)]
pub struct Registration {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
    pub branch: Option<String>,
    pub class_name: Option<String>,
}

pub struct CredentialService {
    store: Arc<dyn RecordStore>,
    hasher: PasswordHasher,
    /// Held across every load-modify-save cycle
    write_lock: Mutex<()>,
    /// Verified when no stored hash was checked, so misses cost the same as wrong passwords
    decoy_hash: String,
}

impl CredentialService {
    pub fn new(store: Arc<dyn RecordStore>, hasher: PasswordHasher) -> Result<Self> {
        let decoy_hash = hasher.hash_password("")?;
        Ok(Self {
            store,
            hasher,
            write_lock: Mutex::new(()),
            decoy_hash,
        })
    }

    /// Register a new account
    pub async fn register(&self, registration: Registration) -> Result<UserRecord> {
        let email = registration.email.filter(|e| !e.is_empty());
        let password = registration.password.filter(|p| !p.is_empty());
        let (Some(email), Some(password)) = (email, password) else {
            return Err(ServerError::Validation(MISSING_CREDENTIALS.to_string()));
        };

        if !is_valid_email(&email) {
            return Err(ServerError::Validation(INVALID_EMAIL.to_string()));
        }

        if password.len() > MAX_PASSWORD_BYTES {
            return Err(ServerError::Validation(PASSWORD_TOO_LONG.to_string()));
        }

        let role = registration
            .role
            .as_deref()
            .map(str::parse::<Role>)
            .transpose()
            .map_err(|_| ServerError::Validation(INVALID_ROLE.to_string()))?;

        let password_hash = self.hasher.hash(password).await?;

        let _guard = self.write_lock.lock().await;
        let mut records = self.store.load().await?;

        if records.iter().any(|r| r.email == email) {
            tracing::info!("Rejected duplicate registration");
            return Err(ServerError::Conflict(USER_EXISTS.to_string()));
        }

        let user = UserRecord::create(
            UserId::from_position(records.len()),
            CreateUser {
                name: registration.name,
                email,
                password_hash,
                role,
                branch: registration.branch,
                class_name: registration.class_name,
            },
        );

        records.push(user.clone());
        self.store.save(&records).await?;

        tracing::info!("Registered user {} ({})", user.id, user.role);
        Ok(user)
    }

    /// Check an email/password pair, returning the matching account
    ///
    /// Unknown email and wrong password fail with the same error.
    pub async fn login(&self, email: &str, password: &str) -> Result<UserRecord> {
        if !is_valid_email(email) {
            return Err(ServerError::Validation(INVALID_EMAIL.to_string()));
        }

        let records = self.store.load().await?;
        let candidates: Vec<UserRecord> = records
            .into_iter()
            .filter(|r| r.email == email)
            .collect();

        let mut verified = false;
        for record in candidates {
            match self
                .hasher
                .verify(password.to_string(), record.password_hash.clone())
                .await
            {
                Ok(true) => {
                    tracing::info!("User {} logged in", record.id);
                    return Ok(record);
                }
                Ok(false) => verified = true,
                Err(e) => tracing::warn!("Unverifiable password hash for {}: {}", record.id, e),
            }
        }

        // No real hash was checked; spend the same time on the decoy
        if !verified {
            self.hasher
                .verify(password.to_string(), self.decoy_hash.clone())
                .await?;
        }

        tracing::warn!("Failed login attempt");
        Err(ServerError::Auth(INVALID_CREDENTIALS.to_string()))
    }

    /// Every stored account, in registration order
    pub async fn list(&self) -> Result<Vec<UserRecord>> {
        Ok(self.store.load().await?)
    }
}
