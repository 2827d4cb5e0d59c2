use thiserror::Error;

// Every failure a terrain builder can report.
// Generation is pure, so none of these are worth retrying with the same input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TerrainError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Dimension mismatch: expected {expected:?} (rows, cols), found {found:?}")]
    DimensionMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },

    #[error("Config error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for TerrainError {
    fn from(err: serde_json::Error) -> Self {
        TerrainError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TerrainError>;

// Reject anything that is not a finite, strictly positive number.
pub(crate) fn ensure_positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(TerrainError::InvalidArgument(format!(
            "{name} must be a finite positive number, got {value}"
        )))
    }
}

// Same as above but zero is allowed.
pub(crate) fn ensure_non_negative(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(TerrainError::InvalidArgument(format!(
            "{name} must be a finite non-negative number, got {value}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_check_rejects_zero_and_nan() {
        assert!(ensure_positive("size", 1.0).is_ok());
        assert!(ensure_positive("size", 0.0).is_err());
        assert!(ensure_positive("size", -2.0).is_err());
        assert!(ensure_positive("size", f64::NAN).is_err());
    }

    #[test]
    fn non_negative_check_accepts_zero() {
        assert!(ensure_non_negative("weight", 0.0).is_ok());
        assert!(ensure_non_negative("weight", -0.1).is_err());
        assert!(ensure_non_negative("weight", f64::INFINITY).is_err());
    }

    #[test]
    fn json_errors_become_config_errors() {
        let err: TerrainError = serde_json::from_str::<u32>("not json").unwrap_err().into();
        assert!(matches!(err, TerrainError::Config(_)));
    }
}
