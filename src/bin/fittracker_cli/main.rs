// ABOUTME: FitTracker CLI - command-line front end for the calculation engine
// ABOUTME: Computes daily targets, workout estimates, energy balance, and dashboard snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTracker
//!
//! Usage:
//! ```bash
//! # Daily targets for a profile document
//! fittracker-cli targets --profile profile.json --workout-calories 516
//!
//! # Day 3 of the plan for a 102.4 kg user
//! fittracker-cli workout predefined --id 3 --weight 102.4
//!
//! # 30 minutes of high-intensity HIIT
//! fittracker-cli workout custom --type hiit --intensity high --duration 30 --weight 80
//!
//! # 45 minutes of running
//! fittracker-cli workout cardio --type run --duration 45 --weight 80
//!
//! # Energy-balance semaphore
//! fittracker-cli balance --consumed 2100 --workout-calories 516 --steps 8000 --target 2663
//!
//! # Full dashboard snapshot from a day log
//! fittracker-cli dashboard --log day.json --today 2025-06-01
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use fittracker::config::AppConfig;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "fittracker-cli",
    about = "FitTracker calculation CLI",
    long_about = "Command-line front end for FitTracker nutrition targets, workout estimates, and energy balance."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Intelligence config document (overrides `FITTRACKER_CONFIG_PATH`)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Daily calorie and macro targets for a profile
    Targets {
        /// Profile JSON document
        #[arg(long)]
        profile: PathBuf,

        /// Workout kcal burned today
        #[arg(long, default_value = "0")]
        workout_calories: f64,

        /// Day to compute for (defaults to today, local time)
        #[arg(long)]
        today: Option<NaiveDate>,
    },

    /// Workout energy estimates
    Workout {
        #[command(subcommand)]
        action: WorkoutCommand,
    },

    /// Energy-balance semaphore and next-meal margin
    Balance {
        /// kcal eaten
        #[arg(long)]
        consumed: f64,

        /// Workout kcal burned
        #[arg(long, default_value = "0")]
        workout_calories: f64,

        /// Steps walked
        #[arg(long, default_value = "0")]
        steps: u32,

        /// Daily calorie target
        #[arg(long)]
        target: i32,
    },

    /// Full daily dashboard from a day log document
    Dashboard {
        /// Day log JSON document (profile, meals, workouts, steps, water, foods)
        #[arg(long)]
        log: PathBuf,

        /// Day to compute for (defaults to today, local time)
        #[arg(long)]
        today: Option<NaiveDate>,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum WorkoutCommand {
    /// Day of the four-day strength plan
    Predefined {
        /// Plan day id (1-4)
        #[arg(long)]
        id: u32,

        /// Body weight (kg)
        #[arg(long)]
        weight: f64,

        /// Duration in minutes (default: 40)
        #[arg(long)]
        duration: Option<u32>,
    },

    /// Free-form session by category and intensity
    Custom {
        /// strength, cardio, or hiit
        #[arg(long = "type")]
        category: String,

        /// low, medium, or high
        #[arg(long)]
        intensity: String,

        /// Duration in minutes
        #[arg(long)]
        duration: u32,

        /// Body weight (kg)
        #[arg(long)]
        weight: f64,
    },

    /// Specific cardio activity
    Cardio {
        /// walk, walkVega, run, or bike
        #[arg(long = "type")]
        cardio: String,

        /// Duration in minutes
        #[arg(long)]
        duration: u32,

        /// Body weight (kg)
        #[arg(long)]
        weight: f64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let app_config = AppConfig::from_env()?;
    let logging = if cli.verbose {
        app_config.logging.clone().with_level("debug")
    } else {
        app_config.logging.clone()
    };
    logging.init()?;

    info!("{}", app_config.summary());
    let config = app_config.load_intelligence(cli.config.as_deref())?;

    match cli.command {
        Command::Targets {
            profile,
            workout_calories,
            today,
        } => commands::estimate::targets(&profile, workout_calories, today, &config)?,
        Command::Workout { action } => match action {
            WorkoutCommand::Predefined {
                id,
                weight,
                duration,
            } => commands::estimate::predefined(id, weight, duration, &config)?,
            WorkoutCommand::Custom {
                category,
                intensity,
                duration,
                weight,
            } => commands::estimate::custom(&category, &intensity, duration, weight, &config)?,
            WorkoutCommand::Cardio {
                cardio,
                duration,
                weight,
            } => commands::estimate::cardio(&cardio, duration, weight, &config)?,
        },
        Command::Balance {
            consumed,
            workout_calories,
            steps,
            target,
        } => commands::estimate::balance(consumed, workout_calories, steps, target, &config)?,
        Command::Dashboard { log, today } => {
            commands::daily::dashboard(&log, today, &config).await?;
        }
    }

    Ok(())
}
