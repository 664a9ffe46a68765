//! Logs command - read and prune the session event log

use anyhow::Result;
use chrono::{TimeZone, Utc};
use clap::Subcommand;
use colored::Colorize;
use dialoguer::Confirm;

use bingham_core::services::logging::now_ms;
use bingham_core::{LogEntry, LoggingService};

use super::get_bank_dir;
use crate::output::create_table;

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

#[derive(Subcommand)]
pub enum LogsCommands {
    /// Show recent session events, newest first
    List {
        #[arg(short, long, default_value = "50")]
        limit: usize,
        /// Only failed actions
        #[arg(long)]
        errors: bool,
        #[arg(long)]
        json: bool,
    },
    /// Delete events older than a number of days
    Clear {
        #[arg(long, default_value = "30")]
        older_than_days: u64,
        /// Do not ask for confirmation
        #[arg(long, short = 'f')]
        force: bool,
        #[arg(long)]
        json: bool,
    },
}

pub fn run(command: LogsCommands) -> Result<()> {
    let bank_dir = get_bank_dir()?;
    std::fs::create_dir_all(&bank_dir)?;
    let log = LoggingService::new(&bank_dir, env!("CARGO_PKG_VERSION"))?;

    match command {
        LogsCommands::List { limit, errors, json } => list(&log, limit, errors, json),
        LogsCommands::Clear {
            older_than_days,
            force,
            json,
        } => clear(&log, older_than_days, force, json),
    }
}

fn list(log: &LoggingService, limit: usize, errors_only: bool, json: bool) -> Result<()> {
    let entries = if errors_only {
        log.get_errors(limit)?
    } else {
        log.get_recent(limit)?
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else if entries.is_empty() {
        println!("No session events recorded.");
    } else {
        let mut table = create_table();
        table.set_header(vec!["Time", "Event", "Action", "Account type", "Error"]);
        for entry in &entries {
            table.add_row(entry_row(entry));
        }
        println!("{}", table);
    }
    Ok(())
}

fn clear(log: &LoggingService, older_than_days: u64, force: bool, json: bool) -> Result<()> {
    if !force && !json {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete session events older than {} days?", older_than_days))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let deleted = log.delete_before(cutoff_ms(now_ms(), older_than_days))?;
    if json {
        println!("{}", serde_json::json!({ "deleted": deleted }));
    } else {
        println!("Deleted {} session events", deleted);
    }
    Ok(())
}

fn cutoff_ms(now: i64, older_than_days: u64) -> i64 {
    let days = i64::try_from(older_than_days).unwrap_or(i64::MAX);
    now.saturating_sub(days.saturating_mul(DAY_MS))
}

fn entry_row(entry: &LogEntry) -> Vec<String> {
    vec![
        timestamp_cell(entry.timestamp),
        entry.event.clone(),
        entry.action.clone().unwrap_or_default(),
        entry.account_type.clone().unwrap_or_default(),
        error_cell(entry).red().to_string(),
    ]
}

fn timestamp_cell(timestamp_ms: i64) -> String {
    Utc.timestamp_millis_opt(timestamp_ms)
        .single()
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| timestamp_ms.to_string())
}

/// "category: message" for failures, empty otherwise
fn error_cell(entry: &LogEntry) -> String {
    match (&entry.error_category, &entry.error_message) {
        (Some(category), Some(message)) => format!("{}: {}", category, message),
        (None, Some(message)) => message.clone(),
        _ => String::new(),
    }
}
