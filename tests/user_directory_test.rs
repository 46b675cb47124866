// ABOUTME: Integration tests for the account directory operations
// ABOUTME: Registration, email uniqueness, login, sessions, and partial profile updates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalog Health

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use uuid::Uuid;
use vitalog::errors::ErrorCode;
use vitalog::models::{ProfileUpdate, RegisterRequest};
use vitalog::store::DataStore;

fn request(name: &str, email: &str) -> RegisterRequest {
    RegisterRequest {
        name: name.into(),
        email: email.into(),
        password: "hunter2".into(),
        ..RegisterRequest::default()
    }
}

async fn store() -> DataStore {
    DataStore::open("memory://").await.unwrap()
}

#[tokio::test]
async fn test_register_sets_session() {
    let store = store().await;
    let account = store.register(request("Dana", "dana@example.com")).await.unwrap();

    let session = store.current_session().await.unwrap();
    assert_eq!(session.id, account.id);
    assert_eq!(session.email, "dana@example.com");
}

#[tokio::test]
async fn test_duplicate_email_rejected_and_state_unchanged() {
    let store = store().await;
    store.register(request("Dana", "dana@example.com")).await.unwrap();

    let error = store
        .register(request("Imposter", "dana@example.com"))
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::DuplicateEmail);

    // The original account is untouched and remains the only one.
    assert_eq!(store.account_count().await.unwrap(), 1);
    let stored = store
        .get_account_by_email("dana@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.name, "Dana");
}

#[tokio::test]
async fn test_email_comparison_is_case_sensitive_in_directory() {
    // Case normalization is the caller's job; the directory compares the
    // strings exactly as stored.
    let store = store().await;
    store.register(request("Dana", "dana@example.com")).await.unwrap();
    store.register(request("Dana2", "DANA@example.com")).await.unwrap();
    assert_eq!(store.account_count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_login_exact_match_and_session() {
    let store = store().await;
    let account = store.register(request("Dana", "dana@example.com")).await.unwrap();
    store.logout().await.unwrap();
    assert!(store.current_session().await.is_none());

    let logged_in = store.login("dana@example.com", "hunter2").await.unwrap();
    assert_eq!(logged_in.id, account.id);
    assert_eq!(store.current_session().await.unwrap().id, account.id);
}

#[tokio::test]
async fn test_login_wrong_password_rejected() {
    let store = store().await;
    store.register(request("Dana", "dana@example.com")).await.unwrap();
    store.logout().await.unwrap();

    let error = store.login("dana@example.com", "wrong").await.unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidCredentials);
    assert!(store.current_session().await.is_none());
}

#[tokio::test]
async fn test_logout_is_idempotent() {
    let store = store().await;
    store.register(request("Dana", "dana@example.com")).await.unwrap();
    store.logout().await.unwrap();
    store.logout().await.unwrap();
    assert!(store.current_session().await.is_none());
}

#[tokio::test]
async fn test_update_profile_merges_and_refreshes_session() {
    let store = store().await;
    let account = store
        .register(RegisterRequest {
            height_cm: Some(170.0),
            ..request("Dana", "dana@example.com")
        })
        .await
        .unwrap();

    let updated = store
        .update_profile(
            account.id,
            ProfileUpdate {
                weight_kg: Some(70.0),
                ..ProfileUpdate::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.weight_kg, Some(70.0));
    assert_eq!(updated.height_cm, Some(170.0));
    assert_eq!(updated.name, "Dana");

    // The session snapshot follows the update.
    let session = store.current_session().await.unwrap();
    assert_eq!(session.weight_kg, Some(70.0));
}

#[tokio::test]
async fn test_update_profile_of_other_account_leaves_session() {
    let store = store().await;
    let first = store.register(request("Dana", "dana@example.com")).await.unwrap();
    let second = store.register(request("Riley", "riley@example.com")).await.unwrap();
    // Riley registered last and owns the session.
    assert_eq!(store.current_session().await.unwrap().id, second.id);

    store
        .update_profile(
            first.id,
            ProfileUpdate {
                name: Some("Dana Q".into()),
                ..ProfileUpdate::default()
            },
        )
        .await
        .unwrap();

    let session = store.current_session().await.unwrap();
    assert_eq!(session.id, second.id);
    assert_eq!(session.name, "Riley");
}

#[tokio::test]
async fn test_update_unknown_account_fails() {
    let store = store().await;
    let error = store
        .update_profile(Uuid::new_v4(), ProfileUpdate::default())
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::AccountNotFound);
}

#[tokio::test]
async fn test_emails_unique_across_all_accounts() {
    let store = store().await;
    store.register(request("A", "a@example.com")).await.unwrap();
    store.register(request("B", "b@example.com")).await.unwrap();
    store.register(request("C", "c@example.com")).await.unwrap();

    for email in ["a@example.com", "b@example.com", "c@example.com"] {
        let error = store.register(request("Dup", email)).await.unwrap_err();
        assert_eq!(error.code, ErrorCode::DuplicateEmail);
    }
    assert_eq!(store.account_count().await.unwrap(), 3);
}
