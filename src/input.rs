//! Parsing and validation of user-entered submissions.
//!
//! [`SubmissionGuard`] counts consecutive invalid submissions and refuses
//! further ones once its limit is reached; only a new guard (a restart)
//! clears the counter.

use tracing::{debug, warn};

use crate::error::{GradeError, Result};
use crate::record::StudentRecord;
use crate::store::GradeStore;

/// Default number of consecutive invalid submissions allowed.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 4;

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;

/// Trims `name` and rejects it if nothing is left.
pub fn parse_name(name: &str) -> Result<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(GradeError::EmptyName);
    }
    Ok(name)
}

/// Parses comma-separated score text such as `"90, 85.5,70"`.
///
/// Every piece must be a finite number in `[0, 100]`; one bad piece fails
/// the whole input. Empty text is a single empty piece and is rejected.
pub fn parse_scores(text: &str) -> Result<Vec<f64>> {
    let mut scores = Vec::new();

    for piece in text.trim().split(',') {
        let piece = piece.trim();
        let score = piece
            .parse::<f64>()
            .ok()
            .filter(|s| s.is_finite())
            .ok_or_else(|| GradeError::InvalidScore(piece.to_string()))?;
        scores.push(score);
    }

    if let Some(&bad) = scores.iter().find(|s| !(MIN_SCORE..=MAX_SCORE).contains(*s)) {
        return Err(GradeError::ScoreOutOfRange(bad));
    }

    Ok(scores)
}

/// Gatekeeper between raw user input and the [`GradeStore`].
#[derive(Debug)]
pub struct SubmissionGuard {
    attempts: u32,
    max_attempts: u32,
}

impl Default for SubmissionGuard {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS)
    }
}

impl SubmissionGuard {
    pub fn new(max_attempts: u32) -> Self {
        Self {
            attempts: 0,
            max_attempts,
        }
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn is_exhausted(&self) -> bool {
        self.attempts >= self.max_attempts
    }

    /// Validates a submission and appends it to `store`.
    ///
    /// Validation failures count towards the limit and a success resets the
    /// count. Storage errors are returned without being counted.
    pub fn submit(
        &mut self,
        store: &GradeStore,
        name: &str,
        scores_text: &str,
    ) -> Result<StudentRecord> {
        if self.is_exhausted() {
            warn!(max_attempts = self.max_attempts, "Submission refused");
            return Err(GradeError::TooManyAttempts {
                max: self.max_attempts,
            });
        }

        let result = parse_name(name).and_then(|name| {
            let scores = parse_scores(scores_text)?;
            store.add_student(name, &scores)
        });

        match &result {
            Ok(_) => self.attempts = 0,
            Err(e) if e.is_validation() => {
                self.attempts += 1;
                warn!(
                    error = %e,
                    attempts = self.attempts,
                    max_attempts = self.max_attempts,
                    "Invalid submission"
                );
            }
            Err(e) => debug!(error = %e, "Submission failed in storage"),
        }

        result
    }
}
