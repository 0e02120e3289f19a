use crate::quintic::QuinticTrajectory;

/// Instantaneous state of a trajectory at a single point in time.
///
/// Samples are produced on the fly by the console and tabular views and are
/// never collected.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct MotionSample {
    pub time: f64,
    pub pos: f64,
    pub vel: f64,
    pub acc: f64,
    pub jrk: f64,
}

impl MotionSample {
    /// Creates a new MotionSample.
    pub fn new(time: f64, pos: f64, vel: f64, acc: f64, jrk: f64) -> Self {
        Self {
            time,
            pos,
            vel,
            acc,
            jrk,
        }
    }

    /// Evaluates `traj` at time `t`.
    pub fn at(traj: &QuinticTrajectory, t: f64) -> Self {
        Self::new(
            t,
            traj.position(t),
            traj.velocity(t),
            traj.acceleration(t),
            traj.jerk(t),
        )
    }
}
