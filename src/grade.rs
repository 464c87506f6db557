//! Letter grades and score averaging.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{GradeError, Result};

/// Five-bucket letter grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "A" => Ok(Grade::A),
            "B" => Ok(Grade::B),
            "C" => Ok(Grade::C),
            "D" => Ok(Grade::D),
            "F" => Ok(Grade::F),
            other => Err(format!("unknown grade '{other}'")),
        }
    }
}

/// Converts a score into a letter grade by its distance below `best_score`.
///
/// | Gap below best | Grade |
/// |----------------|-------|
/// | <= 10          | A     |
/// | <= 20          | B     |
/// | <= 30          | C     |
/// | <= 40          | D     |
/// | > 40           | F     |
///
/// Inputs are not validated; negative or out-of-range values are graded as-is.
pub fn grade(score: f64, best_score: f64) -> Grade {
    match score {
        s if s >= best_score - 10.0 => Grade::A,
        s if s >= best_score - 20.0 => Grade::B,
        s if s >= best_score - 30.0 => Grade::C,
        s if s >= best_score - 40.0 => Grade::D,
        _ => Grade::F,
    }
}

/// Computes the arithmetic mean of a slice of scores.
///
/// # Errors
///
/// Returns [`GradeError::EmptyScores`] for an empty slice.
pub fn average(scores: &[f64]) -> Result<f64> {
    if scores.is_empty() {
        return Err(GradeError::EmptyScores);
    }
    Ok(scores.iter().sum::<f64>() / scores.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_zero_gap_is_a() {
        for s in [0.0, 42.5, 100.0, -5.0] {
            assert_eq!(grade(s, s), Grade::A);
        }
    }

    #[test]
    fn test_grade_boundaries() {
        let best = 90.0;
        assert_eq!(grade(80.0, best), Grade::A);
        assert_eq!(grade(79.99, best), Grade::B);
        assert_eq!(grade(70.0, best), Grade::B);
        assert_eq!(grade(69.99, best), Grade::C);
        assert_eq!(grade(60.0, best), Grade::C);
        assert_eq!(grade(59.99, best), Grade::D);
        assert_eq!(grade(50.0, best), Grade::D);
        assert_eq!(grade(49.99, best), Grade::F);
        assert_eq!(grade(0.0, best), Grade::F);
    }

    #[test]
    fn test_grade_score_above_best() {
        assert_eq!(grade(120.0, 90.0), Grade::A);
    }

    #[test]
    fn test_average_single() {
        assert_eq!(average(&[73.25]).unwrap(), 73.25);
    }

    #[test]
    fn test_average_many() {
        assert_eq!(average(&[90.0, 80.0, 70.0]).unwrap(), 80.0);
    }

    #[test]
    fn test_average_within_min_max() {
        let lists: [&[f64]; 3] = [&[1.0, 2.0, 3.0], &[100.0, 0.0], &[55.5, 55.5, 99.9, 12.1]];
        for list in lists {
            let avg = average(list).unwrap();
            let min = list.iter().copied().fold(f64::INFINITY, f64::min);
            let max = list.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            assert!(min <= avg && avg <= max);
        }
    }

    #[test]
    fn test_average_empty_fails() {
        assert!(matches!(average(&[]), Err(GradeError::EmptyScores)));
    }

    #[test]
    fn test_grade_letters() {
        assert_eq!(Grade::C.to_string(), "C");
        assert_eq!("F".parse::<Grade>().unwrap(), Grade::F);
        assert!("E".parse::<Grade>().is_err());
    }
}
