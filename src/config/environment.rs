// ABOUTME: Environment configuration for the FitTracker facade and CLI
// ABOUTME: Reads deployment mode, logging settings, and the intelligence override document location
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTracker

//! Environment-based configuration management

use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fittracker_core::constants::env_config;
use fittracker_intelligence::config::IntelligenceConfig;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::logging::LoggingConfig;

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Application configuration assembled from the environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Logging settings
    pub logging: LoggingConfig,
    /// JSON document overriding the intelligence tables
    pub intelligence_config_path: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `FITTRACKER_CONFIG_PATH` names a file that does not exist
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let environment = Environment::from_str_or_default(
            &env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        );
        let intelligence_config_path = env::var(env_config::CONFIG_PATH).ok().map(PathBuf::from);

        let config = Self {
            environment,
            logging: LoggingConfig::from_env(),
            intelligence_config_path,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the override document is missing
    pub fn validate(&self) -> Result<()> {
        if let Some(path) = &self.intelligence_config_path {
            if !path.is_file() {
                return Err(anyhow::anyhow!(
                    "{} points to a missing file: {}",
                    env_config::CONFIG_PATH,
                    path.display()
                ));
            }
        }
        Ok(())
    }

    /// Build the intelligence tables: defaults or the override document, then env overrides
    ///
    /// `override_path` takes precedence over `FITTRACKER_CONFIG_PATH`.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be read or the tables fail validation
    pub fn load_intelligence(&self, override_path: Option<&Path>) -> Result<IntelligenceConfig<true>> {
        let path = override_path.or(self.intelligence_config_path.as_deref());

        let draft = match path {
            Some(path) => IntelligenceConfig::<false>::from_json_file(path)
                .with_context(|| format!("Failed to read intelligence config {}", path.display()))?,
            None => IntelligenceConfig::<true>::default().into_draft(),
        };

        let config = draft
            .apply_env_overrides()
            .context("Invalid FITTRACKER_* override")?
            .validate()
            .context("Intelligence config failed validation")?;
        Ok(config)
    }

    /// One-line description for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "FitTracker configuration: environment={}, log_level={}, intelligence_config={}",
            self.environment,
            self.logging.level,
            self.intelligence_config_path
                .as_deref()
                .map_or_else(|| "defaults".to_owned(), |p| p.display().to_string())
        )
    }
}
