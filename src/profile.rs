use anyhow::{Context, Result};
use std::io;

use crate::config::ProfileConfig;

/// What a profile run emitted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProfileReport {
    /// Lines written to the display sink
    pub trace_lines: usize,

    /// Data rows written to the table sink, header excluded
    pub rows: usize,
}

/// Builds the trajectory described by `config`, prints the decimated trace to
/// `display` and streams the tabular export to `table`.
///
/// Both sinks are owned by the caller; nothing is opened or closed here.
pub fn run<D, T>(config: &ProfileConfig, display: &mut D, table: &mut T) -> Result<ProfileReport>
where
    D: io::Write,
    T: io::Write,
{
    let traj = config.trajectory()?;
    let sampler = config.sampler()?;
    let exporter = config.exporter()?;
    exporter
        .row_count(traj.duration())
        .context("invalid export settings")?;

    let trace = sampler.trace(&traj);
    display
        .write_all(trace.as_bytes())
        .context("failed to write console trace")?;

    let rows = exporter
        .write_to(&traj, table)
        .context("failed to write tabular export")?;
    table.flush().context("failed to flush tabular export")?;

    tracing::info!(
        duration = traj.duration(),
        rows,
        step = exporter.step(),
        "motion profile generated"
    );

    Ok(ProfileReport {
        trace_lines: trace.lines().count(),
        rows,
    })
}
