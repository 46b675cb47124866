// ABOUTME: Derived-metrics layer: pure computations over already-loaded records
// ABOUTME: BMI, goal targets and progress, achievement thresholds, period analytics, display formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalog Health

//! # Derived Metrics
//!
//! Side-effect-free computations over values the data store has already
//! loaded. Nothing in this module touches storage; presentation layers call
//! in with records or profile fields and get numbers, categories, and events
//! back.

/// Threshold evaluation producing discrete achievement events
pub mod achievements;

/// Grouping, summaries, and streaks over period records
pub mod analytics;

/// Body mass index computation and categorization
pub mod body_metrics;

/// Per-kind display formatting and presentation lookups
pub mod display;

/// Daily goal targets and progress ratios
pub mod targets;

pub use achievements::{evaluate_thresholds, ThresholdEvent};
pub use analytics::{group_by_date, streak_length, summarize_period, PeriodSummary};
pub use body_metrics::{bmi, bmi_from_profile, BmiCategory};
pub use targets::{daily_target, progress_ratio};
