use thiserror::Error;

/// Validation failures raised while building a trajectory or one of its views.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ProfileError {
    #[error("expected 6 polynomial coefficients, got {len}")]
    InvalidCoefficients { len: usize },
    #[error("duration must be finite and non-negative, got {duration}")]
    InvalidDuration { duration: f64 },
    #[error("export step must be finite and positive, got {step}")]
    InvalidStep { step: f64 },
    #[error("{duration} s at a {step} s step produces more rows than can be counted")]
    TooManyRows { duration: f64, step: f64 },
    #[error("sampling rate must be finite and positive, got {rate_hz} Hz")]
    InvalidRate { rate_hz: f64 },
}

pub type Result<T> = std::result::Result<T, ProfileError>;
