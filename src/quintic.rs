use crate::error::{ProfileError, Result};
use crate::motion_sample::MotionSample;

/// Number of coefficients of a quintic polynomial (degree 5).
pub const COEF_COUNT: usize = 6;

/// A quintic position profile `s(t) = c0 + c1*t + ... + c5*t^5` over `[0, duration]`.
///
/// Coefficients are stored low-to-high degree. All evaluation methods are pure
/// and accept any real `t`; staying inside `[0, duration]` is up to the caller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuinticTrajectory {
    /// `[c0, c1, c2, c3, c4, c5]`
    coef: [f64; COEF_COUNT],

    /// Nominal end of the time domain, in seconds.
    duration: f64,
}

impl QuinticTrajectory {
    /// Creates a trajectory from a coefficient slice (constant term first).
    ///
    /// Fails with [`ProfileError::InvalidCoefficients`] unless exactly six values
    /// are given, and with [`ProfileError::InvalidDuration`] for a negative or
    /// non-finite duration.
    pub fn new(coef: &[f64], duration: f64) -> Result<Self> {
        let coef: [f64; COEF_COUNT] = coef
            .try_into()
            .map_err(|_| ProfileError::InvalidCoefficients { len: coef.len() })?;
        Self::from_array(coef, duration)
    }

    /// Creates a trajectory from a fixed-size coefficient array.
    pub fn from_array(coef: [f64; COEF_COUNT], duration: f64) -> Result<Self> {
        if !duration.is_finite() || duration < 0.0 {
            return Err(ProfileError::InvalidDuration { duration });
        }
        tracing::debug!(?coef, duration, "quintic trajectory created");
        Ok(Self { coef, duration })
    }

    /// Returns the coefficients, constant term first.
    pub fn coefficients(&self) -> &[f64; COEF_COUNT] {
        &self.coef
    }

    /// Returns the nominal duration in seconds.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// s(t) = c0 + c1*t + c2*t^2 + c3*t^3 + c4*t^4 + c5*t^5
    pub fn position(&self, t: f64) -> f64 {
        let [c0, c1, c2, c3, c4, c5] = self.coef;
        c0 + t * (c1 + t * (c2 + t * (c3 + t * (c4 + t * c5))))
    }

    /// v(t) = c1 + 2*c2*t + 3*c3*t^2 + 4*c4*t^3 + 5*c5*t^4
    pub fn velocity(&self, t: f64) -> f64 {
        let [_, c1, c2, c3, c4, c5] = self.coef;
        c1 + t * (2.0 * c2 + t * (3.0 * c3 + t * (4.0 * c4 + t * 5.0 * c5)))
    }

    /// a(t) = 2*c2 + 6*c3*t + 12*c4*t^2 + 20*c5*t^3
    pub fn acceleration(&self, t: f64) -> f64 {
        let [_, _, c2, c3, c4, c5] = self.coef;
        2.0 * c2 + t * (6.0 * c3 + t * (12.0 * c4 + t * 20.0 * c5))
    }

    /// j(t) = 6*c3 + 24*c4*t + 60*c5*t^2
    pub fn jerk(&self, t: f64) -> f64 {
        let [_, _, _, c3, c4, c5] = self.coef;
        6.0 * c3 + t * (24.0 * c4 + t * 60.0 * c5)
    }

    /// Evaluates position and its three derivatives at `t`.
    pub fn sample(&self, t: f64) -> MotionSample {
        MotionSample::at(self, t)
    }
}
