// ABOUTME: Command handlers for the Vitalog CLI
// ABOUTME: Account, logging, history, export, clear, and settings subcommand implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalog Health

use anyhow::Result;
use async_trait::async_trait;
use clap::Subcommand;
use tokio::fs;

use vitalog::errors::{AppError, AppResult};
use vitalog::intelligence::{
    self, bmi_from_profile, evaluate_thresholds, progress_ratio, BmiCategory,
};
use vitalog::models::{Account, MetricKind, ProfileUpdate, RegisterRequest};
use vitalog::notifications::{
    active_reminder_slots, dispatch_events, NotificationKind, ReminderScheduler,
};
use vitalog::store::DataStore;
use vitalog::validation;

/// Account management commands
#[non_exhaustive]
#[derive(Subcommand)]
pub enum AccountCommand {
    /// Register a new account and start a session
    Register {
        /// Display name
        #[arg(long)]
        name: String,
        /// Email address
        #[arg(long)]
        email: String,
        /// Password
        #[arg(long)]
        password: String,
        /// Age in years
        #[arg(long)]
        age: Option<u16>,
        /// Self-reported gender
        #[arg(long)]
        gender: Option<String>,
        /// Height in centimeters
        #[arg(long)]
        height: Option<f64>,
        /// Weight in kilograms
        #[arg(long)]
        weight: Option<f64>,
    },

    /// Log in with email and password
    Login {
        /// Email address
        #[arg(long)]
        email: String,
        /// Password
        #[arg(long)]
        password: String,
    },

    /// End the active session
    Logout,

    /// Show the active account and its BMI
    Whoami,

    /// Update profile fields of the active account
    Update {
        /// New display name
        #[arg(long)]
        name: Option<String>,
        /// New age in years
        #[arg(long)]
        age: Option<u16>,
        /// New self-reported gender
        #[arg(long)]
        gender: Option<String>,
        /// New height in centimeters
        #[arg(long)]
        height: Option<f64>,
        /// New weight in kilograms
        #[arg(long)]
        weight: Option<f64>,
        /// New profile photo URI
        #[arg(long)]
        photo: Option<String>,
    },
}

/// Reminder settings commands
#[non_exhaustive]
#[derive(Subcommand)]
pub enum SettingsCommand {
    /// Show reminder settings and the derived daily slots
    Show,

    /// Change reminder toggles and times
    Set {
        /// Water reminder: on or off
        #[arg(long)]
        water: Option<String>,
        /// Sleep reminder: on or off
        #[arg(long)]
        sleep: Option<String>,
        /// Exercise reminder: on or off
        #[arg(long)]
        exercise: Option<String>,
        /// Meal reminder: on or off
        #[arg(long)]
        meal: Option<String>,
        /// Water reminder time, HH:MM
        #[arg(long)]
        water_time: Option<String>,
        /// Sleep reminder time, HH:MM
        #[arg(long)]
        sleep_time: Option<String>,
        /// Exercise reminder time, HH:MM
        #[arg(long)]
        exercise_time: Option<String>,
        /// Meal reminder time, HH:MM
        #[arg(long)]
        meal_time: Option<String>,
    },
}

/// Scheduler that delivers to the terminal.
struct TerminalScheduler;

#[async_trait]
impl ReminderScheduler for TerminalScheduler {
    async fn notify(&self, _kind: NotificationKind, title: &str, body: &str) -> Result<()> {
        println!("{title}");
        println!("  {body}");
        Ok(())
    }
}

pub async fn account(store: &DataStore, action: AccountCommand) -> AppResult<()> {
    match action {
        AccountCommand::Register {
            name,
            email,
            password,
            age,
            gender,
            height,
            weight,
        } => {
            validation::validate_email(&email)?;
            if let Some(age) = age {
                validation::validate_age(age)?;
            }
            if let Some(height) = height {
                validation::validate_height_cm(height)?;
            }
            if let Some(weight) = weight {
                validation::validate_weight_kg(weight)?;
            }

            let account = store
                .register(RegisterRequest {
                    name,
                    email: email.to_lowercase(),
                    password,
                    age,
                    gender,
                    height_cm: height,
                    weight_kg: weight,
                    profile_photo: None,
                })
                .await?;
            println!("Registered {} <{}>", account.name, account.email);
            Ok(())
        }
        AccountCommand::Login { email, password } => {
            let account = store.login(&email.to_lowercase(), &password).await?;
            println!("Logged in as {} <{}>", account.name, account.email);
            Ok(())
        }
        AccountCommand::Logout => {
            store.logout().await?;
            println!("Logged out");
            Ok(())
        }
        AccountCommand::Whoami => {
            let account = require_session(store).await?;
            println!("{} <{}>", account.name, account.email);
            if let Some(age) = account.age {
                println!("  age: {age}");
            }
            if let Some(gender) = &account.gender {
                println!("  gender: {gender}");
            }
            if let Some(height) = account.height_cm {
                println!("  height: {height} cm");
            }
            if let Some(weight) = account.weight_kg {
                println!("  weight: {weight} kg");
            }
            let bmi = bmi_from_profile(account.height_cm, account.weight_kg);
            if bmi > 0.0 {
                let category = BmiCategory::from_bmi(bmi);
                println!("  BMI: {bmi:.1} ({category})");
            } else {
                println!("  BMI: set height and weight to compute");
            }
            Ok(())
        }
        AccountCommand::Update {
            name,
            age,
            gender,
            height,
            weight,
            photo,
        } => {
            if let Some(age) = age {
                validation::validate_age(age)?;
            }
            if let Some(height) = height {
                validation::validate_height_cm(height)?;
            }
            if let Some(weight) = weight {
                validation::validate_weight_kg(weight)?;
            }

            let session = require_session(store).await?;
            let update = ProfileUpdate {
                name,
                age,
                gender,
                height_cm: height,
                weight_kg: weight,
                profile_photo: photo,
            };
            if update.is_empty() {
                println!("Nothing to update");
                return Ok(());
            }
            let account = store.update_profile(session.id, update).await?;
            println!("Profile updated for {} <{}>", account.name, account.email);
            Ok(())
        }
    }
}

pub async fn log_metric(store: &DataStore, kind: &str, value: f64) -> AppResult<()> {
    let kind: MetricKind = kind.parse()?;
    validation::validate_metric_value(kind, value)?;

    let account = require_session(store).await?;
    let record = store.log_observation(account.id, kind, value).await?;
    println!(
        "Logged {} = {} for {}",
        record.kind.label(),
        intelligence::display::format_value(record.kind, record.value),
        record.date
    );

    let events = evaluate_thresholds(kind, value);
    dispatch_events(&TerminalScheduler, &events).await?;
    Ok(())
}

pub async fn today(store: &DataStore) -> AppResult<()> {
    let account = require_session(store).await?;
    let snapshot = store.today_snapshot(account.id).await?;

    println!("Today ({})", DataStore::local_today());
    for kind in MetricKind::ALL {
        match snapshot.get(&kind) {
            Some(&value) => {
                let percent = (progress_ratio(kind, value) * 100.0).round() as i64;
                println!(
                    "  {:<11} {:>8}  (target {}, {percent}%)",
                    kind.label(),
                    intelligence::display::format_value(kind, value),
                    intelligence::display::target_display(kind)
                );
            }
            None => println!(
                "  {:<11} {:>8}  (target {})",
                kind.label(),
                "-",
                intelligence::display::target_display(kind)
            ),
        }
    }
    Ok(())
}

pub async fn history(store: &DataStore, days: u64) -> AppResult<()> {
    let account = require_session(store).await?;
    let records = store.records_in_range(account.id, days).await?;
    if records.is_empty() {
        println!("No records in the last {days} days");
        return Ok(());
    }

    let grouped = intelligence::group_by_date(&records);
    for (date, day) in &grouped {
        let parts: Vec<String> = MetricKind::ALL
            .iter()
            .filter_map(|kind| {
                day.get(kind).map(|&value| {
                    format!(
                        "{} {}",
                        kind.label(),
                        intelligence::display::format_value(*kind, value)
                    )
                })
            })
            .collect();
        println!("{date}: {}", parts.join(", "));
    }

    let summary = intelligence::summarize_period(&records);
    println!();
    println!(
        "{} days logged; {} total steps; {:.1} avg water; {:.1}h avg sleep; {} total calories",
        summary.days_logged,
        intelligence::display::format_value(MetricKind::Steps, summary.total_steps),
        summary.avg_water,
        summary.avg_sleep,
        intelligence::display::format_value(MetricKind::Meals, summary.total_calories),
    );

    let today = DataStore::local_today();
    for kind in MetricKind::ALL {
        let streak = intelligence::streak_length(&records, account.id, kind, today);
        if streak >= 2 {
            println!("{} streak: {streak} days", kind.label());
        }
    }
    Ok(())
}

pub async fn export(store: &DataStore, output: Option<std::path::PathBuf>) -> AppResult<()> {
    let account = require_session(store).await?;
    let csv = store.export_csv(account.id).await?;
    if csv.is_empty() {
        println!("No health data to export");
        return Ok(());
    }
    match output {
        Some(path) => {
            fs::write(&path, &csv).await.map_err(|error| {
                AppError::storage(format!("Failed to write {}: {error}", path.display()))
            })?;
            println!("Exported to {}", path.display());
        }
        None => println!("{csv}"),
    }
    Ok(())
}

pub async fn clear(store: &DataStore, yes: bool) -> AppResult<()> {
    let account = require_session(store).await?;
    if !yes {
        return Err(AppError::validation(
            "Clearing is irreversible; pass --yes to confirm",
        ));
    }
    store.clear_account_records(account.id).await?;
    println!("All health data cleared for {}", account.email);
    Ok(())
}

pub async fn settings(store: &DataStore, action: SettingsCommand) -> AppResult<()> {
    match action {
        SettingsCommand::Show => {
            let preferences = store.notification_preferences().await?;
            print_settings_line("water", preferences.water_reminders, &preferences.water_reminder_time);
            print_settings_line("sleep", preferences.sleep_reminders, &preferences.sleep_reminder_time);
            print_settings_line(
                "exercise",
                preferences.exercise_reminders,
                &preferences.exercise_reminder_time,
            );
            print_settings_line("meal", preferences.meal_reminders, &preferences.meal_reminder_time);

            let slots = active_reminder_slots(&preferences)?;
            println!();
            for slot in slots {
                println!("{} daily at {}", slot.kind.title(), slot.time.format("%H:%M"));
            }
            Ok(())
        }
        SettingsCommand::Set {
            water,
            sleep,
            exercise,
            meal,
            water_time,
            sleep_time,
            exercise_time,
            meal_time,
        } => {
            let mut preferences = store.notification_preferences().await?;
            if let Some(value) = water {
                preferences.water_reminders = parse_toggle(&value)?;
            }
            if let Some(value) = sleep {
                preferences.sleep_reminders = parse_toggle(&value)?;
            }
            if let Some(value) = exercise {
                preferences.exercise_reminders = parse_toggle(&value)?;
            }
            if let Some(value) = meal {
                preferences.meal_reminders = parse_toggle(&value)?;
            }
            if let Some(value) = water_time {
                preferences.water_reminder_time = value;
            }
            if let Some(value) = sleep_time {
                preferences.sleep_reminder_time = value;
            }
            if let Some(value) = exercise_time {
                preferences.exercise_reminder_time = value;
            }
            if let Some(value) = meal_time {
                preferences.meal_reminder_time = value;
            }

            // Reject malformed times before persisting them.
            active_reminder_slots(&preferences)?;

            store.save_notification_preferences(&preferences).await?;
            println!("Settings saved");
            Ok(())
        }
    }
}

async fn require_session(store: &DataStore) -> AppResult<Account> {
    store
        .current_session()
        .await
        .ok_or_else(|| AppError::validation("You must be logged in; run account login first"))
}

fn print_settings_line(name: &str, enabled: bool, time: &str) {
    let state = if enabled { "on" } else { "off" };
    println!("{name:<9} {state:<4} at {time}");
}

fn parse_toggle(value: &str) -> AppResult<bool> {
    match value {
        "on" | "true" | "yes" => Ok(true),
        "off" | "false" | "no" => Ok(false),
        other => Err(AppError::validation(format!(
            "Expected on or off, got {other:?}"
        ))),
    }
}
