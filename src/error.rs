//! Error type shared by the calculator, the store and the submission layer.

use thiserror::Error;

/// Everything that can go wrong while recording or reading grades.
#[derive(Error, Debug)]
pub enum GradeError {
    #[error("Name cannot be empty.")]
    EmptyName,

    #[error("Scores list cannot be empty.")]
    EmptyScores,

    #[error("could not convert score to a number: '{0}'")]
    InvalidScore(String),

    #[error("Scores must be between 0 and 100 (got {0}).")]
    ScoreOutOfRange(f64),

    #[error("Maximum attempts ({max}) reached. Please restart the application.")]
    TooManyAttempts { max: u32 },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl GradeError {
    /// True for failures caused by the caller's input rather than storage.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            GradeError::EmptyName
                | GradeError::EmptyScores
                | GradeError::InvalidScore(_)
                | GradeError::ScoreOutOfRange(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, GradeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_classification() {
        assert!(GradeError::EmptyName.is_validation());
        assert!(GradeError::EmptyScores.is_validation());
        assert!(GradeError::InvalidScore("abc".into()).is_validation());
        assert!(GradeError::ScoreOutOfRange(101.0).is_validation());
        assert!(!GradeError::TooManyAttempts { max: 4 }.is_validation());

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert!(!GradeError::from(io).is_validation());
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            GradeError::TooManyAttempts { max: 4 }.to_string(),
            "Maximum attempts (4) reached. Please restart the application."
        );
        assert_eq!(
            GradeError::InvalidScore("abc".into()).to_string(),
            "could not convert score to a number: 'abc'"
        );
    }
}
