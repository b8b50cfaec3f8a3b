//! Error type for puzzle operations

/// Errors raised when a caller breaks an argument contract
#[derive(Debug, thiserror::Error)]
pub enum SpinnerError {
    #[error("Angle list is empty")]
    EmptyAngles,

    #[error("Subject index {index} out of range for {len} spinners")]
    SubjectOutOfRange { index: usize, len: usize },

    #[error("Tolerance must be finite and non-negative, got {0}")]
    InvalidTolerance(f32),

    #[error("Angle must be finite, got {0}")]
    InvalidAngle(f32),

    #[error("Spinner count {count} outside {min}..={max}")]
    SpinnerCount { count: usize, min: usize, max: usize },

    #[error("Every scramble was already solved after {attempts} attempts")]
    ScrambleExhausted { attempts: u32 },

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SpinnerError>;

/// Reject negative, NaN and infinite tolerances
pub(crate) fn check_tolerance(tolerance: f32) -> Result<f32> {
    if tolerance.is_finite() && tolerance >= 0.0 {
        Ok(tolerance)
    } else {
        Err(SpinnerError::InvalidTolerance(tolerance))
    }
}

/// Reject empty lists and non-finite angles
pub(crate) fn check_angles(angles: &[f32]) -> Result<()> {
    if angles.is_empty() {
        return Err(SpinnerError::EmptyAngles);
    }
    match angles.iter().find(|a| !a.is_finite()) {
        Some(&bad) => Err(SpinnerError::InvalidAngle(bad)),
        None => Ok(()),
    }
}
