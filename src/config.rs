use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::exporter::TabularExporter;
use crate::quintic::QuinticTrajectory;
use crate::sampler::ConsoleSampler;

/// Everything needed to build a trajectory and render both views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Polynomial coefficients, constant term first
    #[serde(default = "default_coefficients")]
    pub coefficients: Vec<f64>,

    /// Trajectory duration in seconds
    #[serde(default = "default_duration")]
    pub duration: f64,

    /// Console trace settings
    #[serde(default)]
    pub console: ConsoleConfig,

    /// Tabular export settings
    #[serde(default)]
    pub export: ExportConfig,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            coefficients: default_coefficients(),
            duration: default_duration(),
            console: ConsoleConfig::default(),
            export: ExportConfig::default(),
        }
    }
}

/// Console trace configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Sampling rate in Hz
    #[serde(default = "default_rate_hz")]
    pub rate_hz: f64,

    /// Number of leading samples to print
    #[serde(default = "default_window")]
    pub window: usize,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            rate_hz: default_rate_hz(),
            window: default_window(),
        }
    }
}

/// Tabular export configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Time between rows in seconds
    #[serde(default = "default_step")]
    pub step: f64,

    /// Append a jerk column
    #[serde(default)]
    pub jerk_column: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            step: default_step(),
            jerk_column: false,
        }
    }
}

// 100 mm of travel in 5 s
fn default_coefficients() -> Vec<f64> {
    vec![0.0, 0.0, 0.0, 2.68, 1.45, 0.12]
}

fn default_duration() -> f64 {
    5.0
}

fn default_rate_hz() -> f64 {
    ConsoleSampler::RATE_HZ
}

fn default_window() -> usize {
    ConsoleSampler::WINDOW
}

fn default_step() -> f64 {
    TabularExporter::STEP
}

impl ProfileConfig {
    /// Load configuration from a file, auto-detecting TOML or JSON format
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;

        match path.extension().and_then(|s| s.to_str()) {
            Some("toml") => Self::from_toml(&content),
            Some("json") => Self::from_json(&content),
            _ => Self::from_toml(&content).or_else(|_| Self::from_json(&content)),
        }
    }

    /// Parse configuration from TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("failed to parse config as TOML")
    }

    /// Parse configuration from JSON string
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("failed to parse config as JSON")
    }

    /// Validate the configuration by building every component once
    pub fn validate(&self) -> Result<()> {
        let traj = self.trajectory()?;
        self.sampler()?;
        self.exporter()?
            .row_count(traj.duration())
            .context("invalid export settings")?;
        Ok(())
    }

    pub fn trajectory(&self) -> Result<QuinticTrajectory> {
        QuinticTrajectory::new(&self.coefficients, self.duration).context("invalid trajectory")
    }

    pub fn sampler(&self) -> Result<ConsoleSampler> {
        ConsoleSampler::new(self.console.rate_hz, self.console.window)
            .context("invalid console settings")
    }

    pub fn exporter(&self) -> Result<TabularExporter> {
        let exporter = TabularExporter::new(self.export.step).context("invalid export settings")?;
        Ok(exporter.with_jerk_column(self.export.jerk_column))
    }
}
