// ABOUTME: Dashboard command for fittracker-cli
// ABOUTME: Loads a day log into the in-memory store and prints the snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTracker

use std::path::Path;

use anyhow::Result;
use chrono::NaiveDate;
use fittracker::dashboard::load_dashboard;
use fittracker::data_source::{DayLog, InMemoryStore};
use fittracker::intelligence::IntelligenceConfig;
use tracing::info;

use crate::helpers::io::{print_json, read_json, resolve_today};

/// Print the dashboard snapshot for a day log document
pub async fn dashboard(
    log_path: &Path,
    today: Option<NaiveDate>,
    config: &IntelligenceConfig<true>,
) -> Result<()> {
    let log: DayLog = read_json(log_path)?;
    let user_id = log.profile.id;

    let store = InMemoryStore::new();
    store.import_day(log).await;
    info!(user_id = %user_id, "Day log imported");

    let snapshot = load_dashboard(&store, user_id, resolve_today(today), config).await?;
    print_json(&snapshot)
}
