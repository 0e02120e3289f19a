use std::fmt::Write as _;
use std::io;

use crate::error::{ProfileError, Result};
use crate::motion_sample::MotionSample;
use crate::quintic::QuinticTrajectory;

/// Regularly spaced comma-separated table of a trajectory.
///
/// Rows cover `t = 0, step, 2*step, ...` up to and including the duration.
/// Sample times are derived from the row index, not accumulated, so the row
/// count and the endpoint do not drift. Jerk is left out unless
/// [`TabularExporter::with_jerk_column`] is enabled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TabularExporter {
    /// Time between rows in seconds.
    step: f64,

    /// Append a `jerk` column after `acc`.
    jerk_column: bool,
}

impl Default for TabularExporter {
    fn default() -> Self {
        Self {
            step: Self::STEP,
            jerk_column: false,
        }
    }
}

impl TabularExporter {
    /// 100 Hz
    pub const STEP: f64 = 0.01;

    // Tolerance used to decide whether duration/step lands on a whole row
    const ROW_EPSILON: f64 = 1e-9;

    // Upper bound on the up-front allocation in `export`, in bytes
    const CAPACITY_HINT_MAX: usize = 1 << 20;

    /// Creates an exporter with a custom stride in seconds.
    pub fn new(step: f64) -> Result<Self> {
        if !step.is_finite() || step <= 0.0 {
            return Err(ProfileError::InvalidStep { step });
        }
        Ok(Self {
            step,
            jerk_column: false,
        })
    }

    /// Enables or disables the trailing jerk column.
    pub fn with_jerk_column(mut self, enabled: bool) -> Self {
        self.jerk_column = enabled;
        self
    }

    /// Time between rows in seconds.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Whether a trailing jerk column is written.
    pub fn jerk_column(&self) -> bool {
        self.jerk_column
    }

    /// Number of rows emitted for `duration`, both ends inclusive.
    ///
    /// Fails with [`ProfileError::InvalidDuration`] for a negative or non-finite
    /// duration and with [`ProfileError::TooManyRows`] when the count does not
    /// fit in a `usize`.
    pub fn row_count(&self, duration: f64) -> Result<usize> {
        if !duration.is_finite() || duration < 0.0 {
            return Err(ProfileError::InvalidDuration { duration });
        }
        let ratio = duration / self.step;
        let nearest = ratio.round();
        // relative, so exact multiples stay inclusive once ulp(ratio) > ROW_EPSILON
        let intervals = if (ratio - nearest).abs() <= Self::ROW_EPSILON * nearest.max(1.0) {
            nearest
        } else {
            ratio.floor()
        };
        let too_many = ProfileError::TooManyRows {
            duration,
            step: self.step,
        };
        if intervals >= usize::MAX as f64 {
            return Err(too_many);
        }
        (intervals as usize).checked_add(1).ok_or(too_many)
    }

    /// Header line without the trailing newline.
    pub fn header(&self) -> &'static str {
        if self.jerk_column {
            "time,pos,vel,acc,jerk"
        } else {
            "time,pos,vel,acc"
        }
    }

    /// Serializes the full table, header included, into a string.
    pub fn export(&self, traj: &QuinticTrajectory) -> Result<String> {
        let rows = self.row_count(traj.duration())?;
        let hint = rows.saturating_add(1).saturating_mul(64).min(Self::CAPACITY_HINT_MAX);
        let mut out = String::with_capacity(hint);
        out.push_str(self.header());
        out.push('\n');
        for i in 0..rows {
            self.push_row(&mut out, &traj.sample(i as f64 * self.step));
        }
        tracing::debug!(rows, step = self.step, "tabular export rendered");
        Ok(out)
    }

    /// Streams the same table as [`TabularExporter::export`] into `sink`.
    ///
    /// Returns the number of data rows written. A row count that cannot be
    /// represented is reported as [`io::ErrorKind::InvalidInput`] before anything
    /// is written.
    pub fn write_to<W: io::Write>(&self, traj: &QuinticTrajectory, sink: &mut W) -> io::Result<usize> {
        let rows = self
            .row_count(traj.duration())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        sink.write_all(self.header().as_bytes())?;
        sink.write_all(b"\n")?;
        let mut line = String::with_capacity(96);
        for i in 0..rows {
            line.clear();
            self.push_row(&mut line, &traj.sample(i as f64 * self.step));
            sink.write_all(line.as_bytes())?;
        }
        Ok(rows)
    }

    // f64 Display is the shortest string that parses back to the same value
    fn push_row(&self, out: &mut String, s: &MotionSample) {
        let _ = write!(out, "{},{},{},{}", s.time, s.pos, s.vel, s.acc);
        if self.jerk_column {
            let _ = write!(out, ",{}", s.jrk);
        }
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COEF: [f64; 6] = [0.0, 0.0, 0.0, 2.68, 1.45, 0.12];

    fn data_rows(table: &str) -> Vec<Vec<f64>> {
        table
            .lines()
            .skip(1)
            .map(|l| l.split(',').map(|f| f.parse().unwrap()).collect())
            .collect()
    }

    #[test]
    fn reference_table_has_501_rows() {
        let traj = QuinticTrajectory::new(&COEF, 5.0).unwrap();
        let exporter = TabularExporter::default();
        let table = exporter.export(&traj).unwrap();
        assert!(table.starts_with("time,pos,vel,acc\n"));

        let rows = data_rows(&table);
        assert_eq!(rows.len(), 501);
        assert_eq!(exporter.row_count(5.0), Ok(501));
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), 4);
            assert_eq!(row[0], i as f64 * 0.01);
        }
    }

    #[test]
    fn fields_round_trip_exactly() {
        let traj = QuinticTrajectory::new(&COEF, 5.0).unwrap();
        let table = TabularExporter::default().export(&traj).unwrap();
        for row in data_rows(&table) {
            let t = row[0];
            assert_eq!(row[1], traj.position(t));
            assert_eq!(row[2], traj.velocity(t));
            assert_eq!(row[3], traj.acceleration(t));
        }
    }

    #[test]
    fn endpoint_is_inclusive_but_not_exceeded() {
        let exporter = TabularExporter::default();
        assert_eq!(exporter.row_count(0.0), Ok(1));
        assert_eq!(exporter.row_count(0.3), Ok(31));
        assert_eq!(exporter.row_count(1.0), Ok(101));
        // 0.025 is not a whole number of steps: stop at 0.02
        assert_eq!(exporter.row_count(0.025), Ok(3));
    }

    #[test]
    fn optional_jerk_column() {
        let traj = QuinticTrajectory::new(&COEF, 0.1).unwrap();
        let table = TabularExporter::default().with_jerk_column(true).export(&traj).unwrap();
        assert!(table.starts_with("time,pos,vel,acc,jerk\n"));
        let rows = data_rows(&table);
        assert_eq!(rows.len(), 11);
        assert_eq!(rows[0][4], 6.0 * 2.68);
    }

    #[test]
    fn streaming_matches_in_memory() {
        let traj = QuinticTrajectory::new(&COEF, 2.0).unwrap();
        let exporter = TabularExporter::new(0.05).unwrap();
        assert_eq!(exporter.step(), 0.05);
        assert!(!exporter.jerk_column());
        assert!(exporter.with_jerk_column(true).jerk_column());
        let mut sink: Vec<u8> = Vec::new();
        let rows = exporter.write_to(&traj, &mut sink).unwrap();
        assert_eq!(rows, 41);
        assert_eq!(String::from_utf8(sink).unwrap(), exporter.export(&traj).unwrap());
    }

    #[test]
    fn rejects_bad_step() {
        for step in [0.0, -0.01, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                TabularExporter::new(step),
                Err(ProfileError::InvalidStep { .. })
            ));
        }
    }

    #[test]
    fn long_durations_keep_the_endpoint() {
        let exporter = TabularExporter::default();
        // 112022.93 / 0.01 evaluates to one ulp below 11202293
        assert_eq!(exporter.row_count(112022.93), Ok(11_202_294));
        for k in [8_000_001_u64, 11_202_293, 20_000_000] {
            let duration = k as f64 * 0.01;
            assert_eq!(exporter.row_count(duration), Ok(k as usize + 1), "k={k}");
        }
    }

    #[test]
    fn unrepresentable_row_count_is_rejected() {
        let exporter = TabularExporter::default();
        assert!(matches!(
            exporter.row_count(1e300),
            Err(ProfileError::TooManyRows { .. })
        ));
        for duration in [-1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                exporter.row_count(duration),
                Err(ProfileError::InvalidDuration { .. })
            ));
        }

        let traj = QuinticTrajectory::new(&COEF, 1e300).unwrap();
        assert!(matches!(
            exporter.export(&traj),
            Err(ProfileError::TooManyRows { .. })
        ));
        let mut sink: Vec<u8> = Vec::new();
        let err = exporter.write_to(&traj, &mut sink).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert!(sink.is_empty());
    }
}
