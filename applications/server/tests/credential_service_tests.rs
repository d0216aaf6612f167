/// Credential service tests
/// Tests registration, login, and persistence against an on-disk store
mod common;

use common::{create_test_service, fixtures};
use lumina_core::{RecordStore, Role};
use lumina_server::{
    services::{credentials, Registration},
    ServerError,
};
use lumina_storage::JsonFileStore;

fn registration(email: &str, password: &str) -> Registration {
    Registration {
        email: Some(email.to_string()),
        password: Some(password.to_string()),
        ..Default::default()
    }
}

/// Register two users, then log in as the first
#[tokio::test]
async fn test_end_to_end_flow() {
    let (service, _path, _temp_dir) = create_test_service();

    let first = service
        .register(registration(fixtures::TEST_EMAIL, fixtures::TEST_PASSWORD))
        .await
        .unwrap();
    assert_eq!(first.id.as_str(), "user-1");

    let second = service
        .register(registration(fixtures::SECOND_EMAIL, fixtures::SECOND_PASSWORD))
        .await
        .unwrap();
    assert_eq!(second.id.as_str(), "user-2");

    let logged_in = service
        .login(fixtures::TEST_EMAIL, fixtures::TEST_PASSWORD)
        .await
        .unwrap();
    assert_eq!(logged_in, first);
}

/// Any valid credentials can log in right after registering
#[tokio::test]
async fn test_register_then_login() {
    let (service, _path, _temp_dir) = create_test_service();

    let pairs = [
        ("student@school.edu", "hunter2"),
        ("first.last+tag@mail.example.co.uk", "correct horse battery staple"),
        ("x@y.z", " "),
        ("unicode@例え.jp", "pässwörd"),
    ];

    for (email, password) in pairs {
        service.register(registration(email, password)).await.unwrap();
        let user = service.login(email, password).await.unwrap();
        assert_eq!(user.email, email);
    }
}

/// Second registration for an email conflicts and leaves one record
#[tokio::test]
async fn test_duplicate_registration() {
    let (service, path, _temp_dir) = create_test_service();

    service
        .register(registration(fixtures::TEST_EMAIL, fixtures::TEST_PASSWORD))
        .await
        .unwrap();
    let err = service
        .register(registration(fixtures::TEST_EMAIL, "another"))
        .await
        .unwrap_err();
    assert!(matches!(err, ServerError::Conflict(_)));

    let records = JsonFileStore::new(&path).load().await.unwrap();
    let matching = records
        .iter()
        .filter(|r| r.email == fixtures::TEST_EMAIL)
        .count();
    assert_eq!(matching, 1);
}

/// A malformed email is rejected before the store is touched
#[tokio::test]
async fn test_login_bad_format_never_reaches_store() {
    let (service, path, _temp_dir) = create_test_service();

    let err = service.login("bad-format", "x").await.unwrap_err();

    assert!(matches!(err, ServerError::Validation(ref m) if m == credentials::INVALID_EMAIL));
    assert!(!path.exists(), "Store should not be created by a rejected login");
}

/// Wrong password and unknown user produce the same error
#[tokio::test]
async fn test_no_user_existence_leakage() {
    let (service, _path, _temp_dir) = create_test_service();
    service
        .register(registration("real@user.com", "rightpass"))
        .await
        .unwrap();

    let wrong_password = service.login("real@user.com", "wrongpass").await.unwrap_err();
    let unknown_user = service.login("nouser@x.com", "x").await.unwrap_err();

    assert!(matches!(wrong_password, ServerError::Auth(_)));
    assert!(matches!(unknown_user, ServerError::Auth(_)));
    assert_eq!(wrong_password.to_string(), unknown_user.to_string());
}

/// The plain-text password never reaches the disk
#[tokio::test]
async fn test_password_not_stored_in_plain_text() {
    let (service, path, _temp_dir) = create_test_service();
    let password = "SuperSecret-Plaintext-42";

    service
        .register(registration(fixtures::TEST_EMAIL, password))
        .await
        .unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(!contents.contains(password));
    assert!(contents.contains("\"passwordHash\": \"$2b$04$"));
}

/// Registrations survive a new service over the same file
#[tokio::test]
async fn test_records_persist_across_services() {
    let (service, path, _temp_dir) = create_test_service();
    let input = Registration {
        name: Some("Grace".to_string()),
        role: Some("instructor".to_string()),
        ..registration(fixtures::TEST_EMAIL, fixtures::TEST_PASSWORD)
    };
    service.register(input).await.unwrap();
    drop(service);

    let store = std::sync::Arc::new(JsonFileStore::new(&path));
    let reopened = lumina_server::CredentialService::new(
        store,
        lumina_server::PasswordHasher::new(common::TEST_BCRYPT_COST),
    )
    .unwrap();

    let user = reopened
        .login(fixtures::TEST_EMAIL, fixtures::TEST_PASSWORD)
        .await
        .unwrap();
    assert_eq!(user.name, "Grace");
    assert_eq!(user.role, Role::Instructor);

    let next = reopened
        .register(registration(fixtures::SECOND_EMAIL, fixtures::SECOND_PASSWORD))
        .await
        .unwrap();
    assert_eq!(next.id.as_str(), "user-2");
}

/// Concurrent registrations are serialized: nothing is lost, ids are distinct
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_registrations_are_not_lost() {
    let (service, path, _temp_dir) = create_test_service();
    let count = 16;

    let handles: Vec<_> = (0..count)
        .map(|i| {
            let service = std::sync::Arc::clone(&service);
            tokio::spawn(async move {
                service
                    .register(registration(&format!("user{}@example.com", i), "pw"))
                    .await
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let records = JsonFileStore::new(&path).load().await.unwrap();
    assert_eq!(records.len(), count);

    let mut ids: Vec<String> = records.iter().map(|r| r.id.to_string()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), count, "Every record should have a distinct id");

    for (position, record) in records.iter().enumerate() {
        assert_eq!(record.id.as_str(), format!("user-{}", position + 1));
    }
}
