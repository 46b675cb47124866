// ABOUTME: Reminder and notification boundary between the data layer and OS scheduling
// ABOUTME: Notification kinds, the scheduler trait, and event-to-message formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalog Health

//! # Notification Boundary
//!
//! The data layer decides *that* something is worth telling the user and
//! formats the content; delivering it (OS scheduling, permissions, sounds)
//! lives on the far side of [`ReminderScheduler`]. Implementations receive
//! fully formatted title and body strings and a kind for channel routing.

/// Daily reminder slot derivation from notification preferences
pub mod reminders;

use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

use crate::errors::AppResult;
use crate::intelligence::ThresholdEvent;
use crate::models::MetricKind;

pub use reminders::{active_reminder_slots, ReminderKind, ReminderSlot};

/// Channel a notification belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// One-off, delivered now
    Immediate,
    /// A daily goal was met
    Achievement,
    /// Partial progress toward a goal
    GoalProgress,
    /// An observation outside a healthy band
    HealthAlert,
    /// A multi-day logging streak
    Streak,
}

/// The external scheduling collaborator.
///
/// The core calls this with formatted content only; cadence, permissions,
/// and platform mechanics are the implementor's concern.
#[async_trait]
pub trait ReminderScheduler: Send + Sync {
    /// Request delivery of one notification.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying delivery mechanism rejects the
    /// request.
    async fn notify(&self, kind: NotificationKind, title: &str, body: &str) -> Result<()>;
}

/// A formatted notification ready to hand to a scheduler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Routing channel
    pub kind: NotificationKind,
    /// Title line
    pub title: String,
    /// Body text
    pub body: String,
}

/// Format a threshold event into deliverable content.
#[must_use]
pub fn notification_for_event(event: &ThresholdEvent) -> Notification {
    match event {
        ThresholdEvent::GoalMet { message, .. } => Notification {
            kind: NotificationKind::Achievement,
            title: "🎉 Achievement Unlocked!".into(),
            body: format!("Congratulations! You've achieved: {message}"),
        },
        ThresholdEvent::GoalProgress {
            goal_label, ratio, ..
        } => {
            let percentage = (ratio * 100.0).round() as i64;
            Notification {
                kind: NotificationKind::GoalProgress,
                title: "🎯 Goal Progress Update".into(),
                body: format!("You're {percentage}% towards your {goal_label} goal! Keep going!"),
            }
        }
        ThresholdEvent::HealthAlert { kind, message } => Notification {
            kind: NotificationKind::HealthAlert,
            title: format!("⚠️ Health Alert - {}", kind.label()),
            body: message.clone(),
        },
    }
}

/// Format a streak milestone into deliverable content.
#[must_use]
pub fn streak_notification(kind: MetricKind, days: u32) -> Notification {
    Notification {
        kind: NotificationKind::Streak,
        title: "🔥 Streak Alert!".into(),
        body: format!(
            "Amazing! You've maintained your {} streak for {days} days!",
            kind.label()
        ),
    }
}

/// Format and deliver every event through `scheduler`.
///
/// # Errors
///
/// Returns an error if the scheduler rejects any delivery; earlier events
/// in the batch are already delivered at that point.
pub async fn dispatch_events(
    scheduler: &dyn ReminderScheduler,
    events: &[ThresholdEvent],
) -> AppResult<()> {
    for event in events {
        let notification = notification_for_event(event);
        scheduler
            .notify(notification.kind, &notification.title, &notification.body)
            .await?;
    }
    Ok(())
}

/// Scheduler that records requests to the structured log instead of an OS.
///
/// Used by the CLI, where "delivery" is the terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingScheduler;

#[async_trait]
impl ReminderScheduler for TracingScheduler {
    async fn notify(&self, kind: NotificationKind, title: &str, body: &str) -> Result<()> {
        info!(?kind, title, body, "Notification requested");
        Ok(())
    }
}
