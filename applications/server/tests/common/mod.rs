/// Common test utilities and fixtures
use lumina_server::services::{CredentialService, PasswordHasher};
use lumina_storage::JsonFileStore;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

/// Lowest bcrypt cost, keeps tests fast
pub const TEST_BCRYPT_COST: u32 = 4;

/// Credential service backed by a JSON file in a fresh temp directory
///
/// Keep the returned `TempDir` alive for the duration of the test.
pub fn create_test_service() -> (Arc<CredentialService>, PathBuf, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("users.json");
    let store = Arc::new(JsonFileStore::new(&path));
    let service =
        CredentialService::new(store, PasswordHasher::new(TEST_BCRYPT_COST)).unwrap();
    (Arc::new(service), path, temp_dir)
}

/// Test user credentials
#[allow(dead_code)]
pub mod fixtures {
    pub const TEST_EMAIL: &str = "a@b.com";
    pub const TEST_PASSWORD: &str = "p1";

    pub const SECOND_EMAIL: &str = "c@d.com";
    pub const SECOND_PASSWORD: &str = "p2";
}
