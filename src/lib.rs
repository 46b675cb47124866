// ABOUTME: Main library entry point for the Vitalog health-tracking data layer
// ABOUTME: Exposes the storage engine, data store, derived metrics, and notification boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalog Health

#![deny(unsafe_code)]

//! # Vitalog
//!
//! A local, single-process health-tracking data layer: users log daily
//! metrics (steps, water, sleep, calories, heart rate, mood), query
//! aggregated history, manage a profile with BMI computation, and hand
//! reminder content to an external scheduler.
//!
//! ## Features
//!
//! - **Per-day upsert semantics**: one record per (account, kind, day);
//!   re-logging a metric replaces that day's observation
//! - **Account directory**: registration with email uniqueness, login,
//!   session resolution, partial profile updates
//! - **Derived metrics**: BMI and category, goal progress, achievement
//!   threshold events, period summaries and streaks
//! - **Pluggable storage**: opaque async key-value medium with in-memory
//!   and on-device file backends
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use vitalog::models::{MetricKind, RegisterRequest};
//! use vitalog::store::DataStore;
//!
//! #[tokio::main]
//! async fn main() -> vitalog::errors::AppResult<()> {
//!     let store = DataStore::open("memory://").await?;
//!
//!     let account = store
//!         .register(RegisterRequest {
//!             name: "Dana".into(),
//!             email: "dana@example.com".into(),
//!             password: "hunter2".into(),
//!             ..RegisterRequest::default()
//!         })
//!         .await?;
//!
//!     store
//!         .log_observation(account.id, MetricKind::Steps, 7_500.0)
//!         .await?;
//!     let snapshot = store.today_snapshot(account.id).await?;
//!     println!("today: {snapshot:?}");
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! The crate is layered leaf to root:
//! - **storage**: the opaque key-value medium and its backends
//! - **store**: full-collection read-modify-write operations with
//!   per-collection write serialization
//! - **intelligence**: pure computations over loaded records
//! - **notifications**: formatted content handed across the scheduling
//!   boundary

/// Application configuration resolved from the environment
pub mod config;

/// Application constants and storage key names
pub mod constants;

/// Unified error handling with stable error codes
pub mod errors;

/// Derived metrics: BMI, targets, achievements, period analytics
pub mod intelligence;

/// Structured logging configuration
pub mod logging;

/// Core data models
pub mod models;

/// Reminder and notification boundary
pub mod notifications;

/// Data store over the storage engine
pub mod store;

/// Key-value storage engine with pluggable backends
pub mod storage;

/// Caller-side validation of metric and profile values
pub mod validation;
