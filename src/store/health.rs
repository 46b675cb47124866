// ABOUTME: Health record store operations over the healthData storage key
// ABOUTME: Daily upsert, date and range queries, snapshot aggregation, CSV export, bulk clear
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalog Health

use chrono::{Days, NaiveDate};
use std::collections::HashMap;
use tracing::{debug, info};
use uuid::Uuid;

use super::DataStore;
use crate::constants::storage_keys;
use crate::errors::AppResult;
use crate::models::{HealthRecord, MetricKind};

/// Header line of the CSV export format.
const CSV_HEADER: &str = "Date,Type,Value";

impl DataStore {
    /// Record an observation of `kind` for today, replacing any observation
    /// of the same kind already logged today.
    ///
    /// This is the invariant-bearing operation of the store: the collection
    /// is scanned for a record matching (account, kind, today) and the match
    /// is replaced in place; only when no match exists is the new record
    /// appended. A blind append here would corrupt every aggregation and the
    /// CSV export with same-day duplicates.
    ///
    /// The replacement record carries a fresh identifier and timestamp.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage medium fails a read or write.
    pub async fn log_observation(
        &self,
        account_id: Uuid,
        kind: MetricKind,
        value: f64,
    ) -> AppResult<HealthRecord> {
        let today = Self::local_today();
        let record = HealthRecord::new(account_id, kind, value, today);

        let _guard = self.health_lock().clone().lock_owned().await;

        let mut records: Vec<HealthRecord> =
            self.read_collection(storage_keys::HEALTH_DATA).await?;
        let existing = records.iter().position(|existing| {
            existing.account_id == account_id && existing.kind == kind && existing.date == today
        });
        match existing {
            Some(index) => {
                debug!(account_id = %account_id, kind = %kind, "Replacing today's observation");
                records[index] = record.clone();
            }
            None => {
                debug!(account_id = %account_id, kind = %kind, "Appending new observation");
                records.push(record.clone());
            }
        }
        self.write_collection(storage_keys::HEALTH_DATA, &records)
            .await?;

        Ok(record)
    }

    /// All of one account's records for a single calendar date, in storage
    /// order. The order is insertion order and not otherwise guaranteed.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage medium fails the read.
    pub async fn records_for_date(
        &self,
        account_id: Uuid,
        date: NaiveDate,
    ) -> AppResult<Vec<HealthRecord>> {
        let records: Vec<HealthRecord> = self.read_collection(storage_keys::HEALTH_DATA).await?;
        Ok(records
            .into_iter()
            .filter(|record| record.account_id == account_id && record.date == date)
            .collect())
    }

    /// Today's observations reduced to a kind-keyed map.
    ///
    /// Kinds without an observation today are simply missing from the map;
    /// defaults are the presentation layer's concern.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage medium fails the read.
    pub async fn today_snapshot(&self, account_id: Uuid) -> AppResult<HashMap<MetricKind, f64>> {
        let today = Self::local_today();
        let records = self.records_for_date(account_id, today).await?;
        Ok(records
            .into_iter()
            .map(|record| (record.kind, record.value))
            .collect())
    }

    /// All of one account's records dated within the inclusive range
    /// `[today - days, today]`, every kind included.
    ///
    /// Comparison is chronological on the parsed dates. Grouping by kind or
    /// date is the caller's concern (see `intelligence::analytics`).
    ///
    /// # Errors
    ///
    /// Returns an error if the storage medium fails the read.
    pub async fn records_in_range(
        &self,
        account_id: Uuid,
        days: u64,
    ) -> AppResult<Vec<HealthRecord>> {
        let today = Self::local_today();
        let start = today
            .checked_sub_days(Days::new(days))
            .unwrap_or(NaiveDate::MIN);

        let records: Vec<HealthRecord> = self.read_collection(storage_keys::HEALTH_DATA).await?;
        Ok(records
            .into_iter()
            .filter(|record| {
                record.account_id == account_id && record.date >= start && record.date <= today
            })
            .collect())
    }

    /// Export every record of one account as CSV, all history, in storage
    /// order.
    ///
    /// The output is a `Date,Type,Value` header followed by one row per
    /// record, with no trailing newline. An account with zero records
    /// exports as the empty string, which callers use to distinguish
    /// "nothing to export" from a produced document.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage medium fails the read.
    pub async fn export_csv(&self, account_id: Uuid) -> AppResult<String> {
        let records: Vec<HealthRecord> = self.read_collection(storage_keys::HEALTH_DATA).await?;
        let rows: Vec<String> = records
            .iter()
            .filter(|record| record.account_id == account_id)
            .map(|record| format!("{},{},{}", record.date, record.kind, record.value))
            .collect();

        if rows.is_empty() {
            return Ok(String::new());
        }
        Ok(format!("{CSV_HEADER}\n{}", rows.join("\n")))
    }

    /// Remove every record belonging to `account_id`. Irreversible. Records
    /// of other accounts are untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage medium fails a read or write.
    pub async fn clear_account_records(&self, account_id: Uuid) -> AppResult<()> {
        let _guard = self.health_lock().clone().lock_owned().await;

        let mut records: Vec<HealthRecord> =
            self.read_collection(storage_keys::HEALTH_DATA).await?;
        let before = records.len();
        records.retain(|record| record.account_id != account_id);
        self.write_collection(storage_keys::HEALTH_DATA, &records)
            .await?;

        info!(
            account_id = %account_id,
            removed = before - records.len(),
            "Cleared account health records"
        );
        Ok(())
    }
}
