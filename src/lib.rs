//! # quintic_motion
//!
//! A small library for evaluating quintic (5th-order) polynomial motion profiles in Rust.
//!
//! This library provides the following modules:
//! - `quintic` for the trajectory itself: position, velocity, acceleration and jerk at any time.
//! - `motion_sample` for a single evaluated point of a trajectory.
//! - `sampler` for a decimated 8 kHz console trace.
//! - `exporter` for a complete 100 Hz comma-separated table.
//! - `config` for loading trajectory and view settings from TOML or JSON.
//! - `profile` for wiring a configuration to caller-supplied output sinks.
//!
//! Author: Anton Khrustalev, creapunk

pub mod config;
pub mod error;
pub mod exporter;
pub mod motion_sample;
pub mod profile;
pub mod quintic;
pub mod sampler;

// Re-export main structs for convenience:
pub use config::{ConsoleConfig, ExportConfig, ProfileConfig};
pub use error::ProfileError;
pub use exporter::TabularExporter;
pub use motion_sample::MotionSample;
pub use profile::ProfileReport;
pub use quintic::{QuinticTrajectory, COEF_COUNT};
pub use sampler::ConsoleSampler;
