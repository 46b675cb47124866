// ABOUTME: Period analytics over record sequences: grouping, summary statistics, streaks
// ABOUTME: Pure reductions consumed by presentation after a range query
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalog Health

//! Period analytics.
//!
//! Range queries return flat record sequences; these helpers do the grouping
//! and reduction the presentation layer charts from.

use chrono::{Days, NaiveDate};
use std::collections::{BTreeMap, HashMap, HashSet};
use uuid::Uuid;

use crate::models::{HealthRecord, MetricKind};

/// Records grouped by calendar date, each day reduced to a kind-keyed map.
///
/// The `BTreeMap` keeps days in chronological order; kinds without an
/// observation on a given day are missing from that day's map.
#[must_use]
pub fn group_by_date(records: &[HealthRecord]) -> BTreeMap<NaiveDate, HashMap<MetricKind, f64>> {
    let mut grouped: BTreeMap<NaiveDate, HashMap<MetricKind, f64>> = BTreeMap::new();
    for record in records {
        grouped
            .entry(record.date)
            .or_default()
            .insert(record.kind, record.value);
    }
    grouped
}

/// Summary statistics over one account's period records.
///
/// Averages are taken over every day in the period that has at least one
/// observation of any kind, with missing kinds counted as zero for that day.
/// That matches how the trend charts zero-fill their series.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PeriodSummary {
    /// Number of days with at least one observation
    pub days_logged: usize,
    /// Steps summed across the period
    pub total_steps: f64,
    /// Calories summed across the period
    pub total_calories: f64,
    /// Mean glasses of water per logged day
    pub avg_water: f64,
    /// Mean hours of sleep per logged day
    pub avg_sleep: f64,
}

/// Reduce a period's records to summary statistics.
#[must_use]
pub fn summarize_period(records: &[HealthRecord]) -> PeriodSummary {
    let grouped = group_by_date(records);
    let days_logged = grouped.len();
    if days_logged == 0 {
        return PeriodSummary::default();
    }

    let mut summary = PeriodSummary {
        days_logged,
        ..PeriodSummary::default()
    };
    for day in grouped.values() {
        summary.total_steps += day.get(&MetricKind::Steps).copied().unwrap_or(0.0);
        summary.total_calories += day.get(&MetricKind::Meals).copied().unwrap_or(0.0);
        summary.avg_water += day.get(&MetricKind::Water).copied().unwrap_or(0.0);
        summary.avg_sleep += day.get(&MetricKind::Sleep).copied().unwrap_or(0.0);
    }
    summary.avg_water /= days_logged as f64;
    summary.avg_sleep /= days_logged as f64;
    summary
}

/// Length of the streak of consecutive days, ending at `today`, on which
/// `account_id` logged an observation of `kind`.
///
/// Zero when there is no observation for today. One observation per day is
/// all it takes; the value is not compared to any goal.
#[must_use]
pub fn streak_length(
    records: &[HealthRecord],
    account_id: Uuid,
    kind: MetricKind,
    today: NaiveDate,
) -> u32 {
    let logged_dates: HashSet<NaiveDate> = records
        .iter()
        .filter(|record| record.account_id == account_id && record.kind == kind)
        .map(|record| record.date)
        .collect();

    let mut streak = 0;
    let mut day = today;
    while logged_dates.contains(&day) {
        streak += 1;
        let Some(previous) = day.checked_sub_days(Days::new(1)) else {
            break;
        };
        day = previous;
    }
    streak
}
