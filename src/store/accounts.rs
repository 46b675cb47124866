// ABOUTME: Account directory operations over the users and currentUser storage keys
// ABOUTME: Handles registration, login, session resolution, and partial profile updates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalog Health

use tracing::{info, warn};
use uuid::Uuid;

use super::DataStore;
use crate::constants::storage_keys;
use crate::errors::{AppError, AppResult};
use crate::models::{Account, ProfileUpdate, RegisterRequest};

impl DataStore {
    /// Register a new account and set it as the active session.
    ///
    /// Email uniqueness is checked by exact comparison against every stored
    /// account. Callers normalize case before submitting; the directory
    /// itself compares the strings as stored.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An account with the same email already exists (`DuplicateEmail`)
    /// - The storage medium fails a read or write
    pub async fn register(&self, request: RegisterRequest) -> AppResult<Account> {
        let _guard = self.accounts_lock().clone().lock_owned().await;

        let mut accounts: Vec<Account> = self.read_collection(storage_keys::USERS).await?;
        if accounts.iter().any(|account| account.email == request.email) {
            return Err(AppError::duplicate_email(request.email));
        }

        let account = Account::new(request);
        accounts.push(account.clone());
        self.write_collection(storage_keys::USERS, &accounts).await?;
        self.write_record(storage_keys::CURRENT_USER, &account)
            .await?;

        info!(account_id = %account.id, "Registered new account");
        Ok(account)
    }

    /// Authenticate by exact email and password match and set the active
    /// session.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No stored account matches both fields (`InvalidCredentials`)
    /// - The storage medium fails a read or write
    pub async fn login(&self, email: &str, password: &str) -> AppResult<Account> {
        let _guard = self.accounts_lock().clone().lock_owned().await;

        let accounts: Vec<Account> = self.read_collection(storage_keys::USERS).await?;
        let account = accounts
            .into_iter()
            .find(|account| account.email == email && account.password == password)
            .ok_or_else(AppError::invalid_credentials)?;

        self.write_record(storage_keys::CURRENT_USER, &account)
            .await?;

        info!(account_id = %account.id, "Login succeeded");
        Ok(account)
    }

    /// Clear the active session. Logging out with no session is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage medium fails the removal.
    pub async fn logout(&self) -> AppResult<()> {
        let _guard = self.accounts_lock().clone().lock_owned().await;
        self.remove_record(storage_keys::CURRENT_USER).await
    }

    /// Resolve the active session, if any.
    ///
    /// Absent, corrupt, and unreadable session state all collapse to `None`:
    /// callers of this path cannot distinguish "no session" from "broken
    /// storage", and treating both as logged-out is the defined behavior.
    pub async fn current_session(&self) -> Option<Account> {
        match self.read_record(storage_keys::CURRENT_USER).await {
            Ok(session) => session,
            Err(error) => {
                warn!(%error, "Session lookup failed; treating as logged out");
                None
            }
        }
    }

    /// Apply a partial profile update to the account with `account_id`.
    ///
    /// Fields the update does not carry are left unchanged. When the updated
    /// account is the active session, the stored session snapshot is
    /// refreshed to match.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No stored account has `account_id` (`AccountNotFound`)
    /// - The storage medium fails a read or write
    pub async fn update_profile(
        &self,
        account_id: Uuid,
        update: ProfileUpdate,
    ) -> AppResult<Account> {
        let _guard = self.accounts_lock().clone().lock_owned().await;

        let mut accounts: Vec<Account> = self.read_collection(storage_keys::USERS).await?;
        let account = accounts
            .iter_mut()
            .find(|account| account.id == account_id)
            .ok_or_else(|| AppError::account_not_found(account_id))?;

        update.apply(account);
        let updated = account.clone();
        self.write_collection(storage_keys::USERS, &accounts).await?;

        let session: Option<Account> = self.read_record(storage_keys::CURRENT_USER).await?;
        if session.is_some_and(|session| session.id == account_id) {
            self.write_record(storage_keys::CURRENT_USER, &updated)
                .await?;
        }

        info!(account_id = %account_id, "Profile updated");
        Ok(updated)
    }

    /// Look up an account by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage medium fails the read.
    pub async fn get_account(&self, account_id: Uuid) -> AppResult<Option<Account>> {
        let accounts: Vec<Account> = self.read_collection(storage_keys::USERS).await?;
        Ok(accounts.into_iter().find(|account| account.id == account_id))
    }

    /// Look up an account by exact email.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage medium fails the read.
    pub async fn get_account_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        let accounts: Vec<Account> = self.read_collection(storage_keys::USERS).await?;
        Ok(accounts.into_iter().find(|account| account.email == email))
    }

    /// Total number of registered accounts.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage medium fails the read.
    pub async fn account_count(&self) -> AppResult<usize> {
        let accounts: Vec<Account> = self.read_collection(storage_keys::USERS).await?;
        Ok(accounts.len())
    }
}
