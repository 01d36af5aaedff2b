//! Configuration builder.
//!
//! This module provides a builder pattern API for creating configurations.

use super::{Result, models::*, validation};
use crate::marshal::MalformedPolicy;
use crate::ranking::TieBreak;
use std::path::Path;

/// Builder for creating MemrankConfig instances.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: MemrankConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration (e.g. one produced by `ConfigLoader`).
    pub fn from_config(config: MemrankConfig) -> Self {
        Self { config }
    }

    /// Set the malformed-record policy.
    pub fn with_malformed_policy(mut self, policy: MalformedPolicy) -> Self {
        self.config.ranking.malformed_records = policy;
        self
    }

    /// Fail the whole call on any malformed record.
    pub fn with_strict_records(self) -> Self {
        self.with_malformed_policy(MalformedPolicy::Strict)
    }

    /// Set how records with equal scores are ordered.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.config.ranking.tie_break = tie_break;
        self
    }

    /// Set the log level.
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.config.logging.level = level;
        self
    }

    /// Set the log format.
    pub fn with_log_format(mut self, format: LogFormat) -> Self {
        self.config.logging.format = format;
        self
    }

    /// Log to a file instead of stdout.
    pub fn with_log_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config.logging.file = Some(path.as_ref().to_path_buf());
        self.config.logging.stdout = false;
        self
    }

    /// Use default logging configuration (info level, stdout).
    pub fn with_default_logging(mut self) -> Self {
        self.config.logging = LoggingConfig::default();
        self
    }

    /// Disable log output entirely.
    pub fn without_logging(mut self) -> Self {
        self.config.logging.stdout = false;
        self.config.logging.file = None;
        self
    }

    /// Build the configuration, validating it first.
    pub fn build(self) -> Result<MemrankConfig> {
        validation::validate_config(&self.config)?;
        Ok(self.config)
    }

    /// Configuration for local development: verbose pretty logs.
    pub fn development() -> Self {
        Self::new()
            .with_log_level(LogLevel::Debug)
            .with_log_format(LogFormat::Pretty)
    }

    /// Configuration for tests: strict records, id tie-break, no log output.
    pub fn testing() -> Self {
        Self::new()
            .with_strict_records()
            .with_tie_break(TieBreak::IdAscending)
            .with_log_level(LogLevel::Debug)
            .without_logging()
    }

    /// Configuration for production hosts: compatible skipping, JSON logs.
    pub fn production() -> Self {
        Self::new()
            .with_malformed_policy(MalformedPolicy::Skip)
            .with_log_level(LogLevel::Info)
            .with_log_format(LogFormat::Json)
    }
}
