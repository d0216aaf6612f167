/// Shared application state
use crate::services::CredentialService;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub credentials: Arc<CredentialService>,
}

impl AppState {
    pub fn new(credentials: Arc<CredentialService>) -> Self {
        Self { credentials }
    }
}
