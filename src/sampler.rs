use std::fmt::{self, Write};

use crate::error::{ProfileError, Result};
use crate::quintic::QuinticTrajectory;

/// Decimated console trace of a trajectory.
///
/// Only the first `window` samples of the `rate_hz` stream are printed, followed
/// by a single summary line at the end of the trajectory. The full sample set is
/// never evaluated, so the output size does not depend on the duration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConsoleSampler {
    /// Sampling rate in Hz.
    rate_hz: f64,

    /// Number of leading samples to print.
    window: usize,
}

impl Default for ConsoleSampler {
    fn default() -> Self {
        Self {
            rate_hz: Self::RATE_HZ,
            window: Self::WINDOW,
        }
    }
}

impl ConsoleSampler {
    /// 8 kHz, i.e. 0.125 ms per sample
    pub const RATE_HZ: f64 = 8000.0;

    /// 40 samples = first 5 ms at 8 kHz
    pub const WINDOW: usize = 40;

    /// Creates a sampler with a custom rate and window size.
    pub fn new(rate_hz: f64, window: usize) -> Result<Self> {
        if !rate_hz.is_finite() || rate_hz <= 0.0 {
            return Err(ProfileError::InvalidRate { rate_hz });
        }
        Ok(Self { rate_hz, window })
    }

    /// Sampling rate in Hz.
    pub fn rate_hz(&self) -> f64 {
        self.rate_hz
    }

    /// Number of leading samples printed before the summary line.
    pub fn window(&self) -> usize {
        self.window
    }

    /// Sample count the full rate would produce over the trajectory duration.
    pub fn total_samples(&self, traj: &QuinticTrajectory) -> u64 {
        (traj.duration() * self.rate_hz).round() as u64
    }

    /// Writes the decimated trace into `out`.
    pub fn write_trace<W: Write>(&self, traj: &QuinticTrajectory, out: &mut W) -> fmt::Result {
        let dt = 1.0 / self.rate_hz;
        let total = self.total_samples(traj);
        let window_ms = self.window as f64 * dt * 1000.0;

        writeln!(out, "=== 5th-Order Motion Profile ===")?;
        writeln!(
            out,
            "Showing first {window_ms:.3}ms + endpoint ({total} total samples at {:.0}Hz)...",
            self.rate_hz
        )?;
        writeln!(out)?;

        for i in 0..self.window {
            let s = traj.sample(i as f64 * dt);
            writeln!(
                out,
                "t={:.3}ms | Pos={:.3}mm | Vel={:.3}mm/s | Acc={:.3}mm/s²",
                s.time * 1000.0,
                s.pos,
                s.vel,
                s.acc
            )?;
        }

        let end = traj.sample(traj.duration());
        writeln!(out)?;
        writeln!(out, "...[{total} total samples]...")?;
        writeln!(
            out,
            "t={:.3}ms | Pos={:.3}mm | Vel={:.3}mm/s | Acc={:.3}mm/s² | Jerk={:.3}mm/s³",
            end.time * 1000.0,
            end.pos,
            end.vel,
            end.acc,
            end.jrk
        )
    }

    /// Renders the decimated trace into a new string.
    pub fn trace(&self, traj: &QuinticTrajectory) -> String {
        let mut out = String::new();
        // writing into a String cannot fail
        let _ = self.write_trace(traj, &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_lines(trace: &str) -> Vec<&str> {
        trace.lines().filter(|l| l.starts_with("t=")).collect()
    }

    fn time_ms(line: &str) -> f64 {
        let field = line.split(" | ").next().unwrap();
        field
            .trim_start_matches("t=")
            .trim_end_matches("ms")
            .parse()
            .unwrap()
    }

    #[test]
    fn emits_window_plus_summary() {
        for duration in [0.0, 0.001, 5.0, 3600.0] {
            let traj =
                QuinticTrajectory::new(&[0.0, 0.0, 0.0, 2.68, 1.45, 0.12], duration).unwrap();
            let trace = ConsoleSampler::default().trace(&traj);
            let lines = sample_lines(&trace);
            assert_eq!(lines.len(), 41);
            assert_eq!(lines.iter().filter(|l| l.contains("Jerk=")).count(), 1);
            assert_eq!(time_ms(lines[40]), duration * 1000.0);
        }
    }

    #[test]
    fn window_follows_8khz_cadence() {
        let traj = QuinticTrajectory::new(&[0.0, 0.0, 0.0, 2.68, 1.45, 0.12], 5.0).unwrap();
        let trace = ConsoleSampler::default().trace(&traj);
        let lines = sample_lines(&trace);
        assert_eq!(lines[0], "t=0.000ms | Pos=0.000mm | Vel=0.000mm/s | Acc=0.000mm/s²");
        assert_eq!(time_ms(lines[1]), 0.125);
        assert_eq!(time_ms(lines[39]), 4.875);
        assert!(lines[40].ends_with("| Jerk=370.080mm/s³"));
        assert!(trace.contains("...[40000 total samples]..."));
    }

    #[test]
    fn custom_window() {
        let traj = QuinticTrajectory::new(&[1.0, 0.0, 0.0, 0.0, 0.0, 0.0], 1.0).unwrap();
        let sampler = ConsoleSampler::new(1000.0, 3).unwrap();
        let trace = sampler.trace(&traj);
        assert_eq!(sampler.rate_hz(), 1000.0);
        assert_eq!(sampler.window(), 3);
        assert_eq!(sample_lines(&trace).len(), 4);
        assert_eq!(sampler.total_samples(&traj), 1000);
    }

    #[test]
    fn rejects_bad_rate() {
        for rate_hz in [0.0, -8000.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                ConsoleSampler::new(rate_hz, 40),
                Err(ProfileError::InvalidRate { .. })
            ));
        }
    }
}
