use serde::Serialize;

use crate::error::{GradeError, Result};
use crate::grade::{Grade, average, grade};

/// Column names of the backing CSV file, in order.
pub const HEADERS: [&str; 6] = [
    "Name",
    "Test Scores",
    "Lowest",
    "Highest",
    "Average",
    "Final Grade",
];

/// One student's scores together with the statistics derived from them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentRecord {
    pub name: String,
    pub scores: Vec<f64>,
    pub lowest: f64,
    pub highest: f64,
    pub average: f64,
    pub final_grade: Grade,
}

impl StudentRecord {
    /// Builds a record, grading the average against the student's own highest score.
    pub fn new(name: &str, scores: &[f64]) -> Result<Self> {
        if scores.is_empty() {
            return Err(GradeError::EmptyScores);
        }

        let lowest = scores.iter().copied().fold(f64::INFINITY, f64::min);
        let highest = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let average = average(scores)?;

        Ok(StudentRecord {
            name: name.to_string(),
            scores: scores.to_vec(),
            lowest,
            highest,
            average,
            final_grade: grade(average, highest),
        })
    }

    /// The persisted form of the record, one string per column of [`HEADERS`].
    pub fn to_row(&self) -> [String; 6] {
        [
            self.name.clone(),
            format_scores(&self.scores),
            format!("{:.2}", self.lowest),
            format!("{:.2}", self.highest),
            format!("{:.2}", self.average),
            self.final_grade.to_string(),
        ]
    }
}

/// Joins scores with `", "`, keeping at least one fractional digit (`90.0`, `85.5`).
pub fn format_scores(scores: &[f64]) -> String {
    scores
        .iter()
        .map(|s| {
            if s.fract() == 0.0 && s.is_finite() {
                format!("{s:.1}")
            } else {
                s.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_computes_summary() {
        let record = StudentRecord::new("Alice", &[90.0, 80.0, 70.0]).unwrap();

        assert_eq!(record.lowest, 70.0);
        assert_eq!(record.highest, 90.0);
        assert_eq!(record.average, 80.0);
        assert_eq!(record.final_grade, Grade::A);
    }

    #[test]
    fn test_new_rejects_empty_scores() {
        assert!(matches!(
            StudentRecord::new("Bob", &[]),
            Err(GradeError::EmptyScores)
        ));
    }

    #[test]
    fn test_low_average_against_own_best() {
        // average 55 vs best 100: gap 45
        let record = StudentRecord::new("Carol", &[100.0, 10.0]).unwrap();
        assert_eq!(record.final_grade, Grade::F);
    }

    #[test]
    fn test_to_row() {
        let record = StudentRecord::new("Dan", &[85.5, 92.0]).unwrap();
        assert_eq!(
            record.to_row(),
            [
                "Dan".to_string(),
                "85.5, 92.0".to_string(),
                "85.50".to_string(),
                "92.00".to_string(),
                "88.75".to_string(),
                "A".to_string(),
            ]
        );
    }

    #[test]
    fn test_format_scores() {
        assert_eq!(format_scores(&[90.0, 80.0, 70.0]), "90.0, 80.0, 70.0");
        assert_eq!(format_scores(&[0.25]), "0.25");
    }
}
