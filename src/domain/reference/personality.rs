//! Reference tables for the forced-choice personality inventory.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::domain::foundation::DomainError;
use crate::domain::personality::DichotomyAxis;

/// A forced-choice question: one prompt, two options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub prompt: String,
    pub option_a: String,
    pub option_b: String,
}

/// Short interpretation text stored per profile code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortInterpretation {
    pub code: String,
    pub title: String,
    pub summary: String,
}

/// Question bank, axis column groups, and interpretation text.
///
/// Axis columns are 1-based indices into the answer vector and mark the
/// positions whose "A" answers count toward the axis's first pole.
#[derive(Debug, Clone)]
pub struct PersonalityTables {
    questions: Vec<Question>,
    answer_count: usize,
    axis_columns: HashMap<DichotomyAxis, Vec<usize>>,
    short: HashMap<String, ShortInterpretation>,
    detailed: HashMap<String, String>,
}

impl PersonalityTables {
    /// Builds the tables, checking internal consistency.
    ///
    /// Every axis must be present with unique in-bounds 1-based columns, and
    /// each short interpretation must be stored under its own code.
    pub fn new(
        questions: Vec<Question>,
        answer_count: usize,
        axis_columns: HashMap<DichotomyAxis, Vec<usize>>,
        short: HashMap<String, ShortInterpretation>,
        detailed: HashMap<String, String>,
    ) -> Result<Self, DomainError> {
        if answer_count == 0 {
            return Err(DomainError::reference_data("answer count cannot be zero"));
        }

        for axis in DichotomyAxis::ALL {
            let columns = axis_columns.get(&axis).ok_or_else(|| {
                DomainError::reference_data(format!("missing column group for axis {}", axis))
            })?;
            if columns.is_empty() {
                return Err(DomainError::reference_data(format!(
                    "axis {} has no columns",
                    axis
                )));
            }
            let mut seen = HashSet::new();
            for &column in columns {
                if column == 0 || column > answer_count {
                    return Err(DomainError::reference_data(format!(
                        "axis {} column {} is outside 1..={}",
                        axis, column, answer_count
                    )));
                }
                if !seen.insert(column) {
                    return Err(DomainError::reference_data(format!(
                        "axis {} lists column {} twice",
                        axis, column
                    )));
                }
            }
        }

        for (code, record) in &short {
            if code != &record.code {
                return Err(DomainError::reference_data(format!(
                    "short interpretation stored under '{}' carries code '{}'",
                    code, record.code
                )));
            }
        }

        Ok(Self {
            questions,
            answer_count,
            axis_columns,
            short,
            detailed,
        })
    }

    /// Length every answer vector must have (40 in the standard dataset).
    pub fn answer_count(&self) -> usize {
        self.answer_count
    }

    /// The ordered question bank.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// The 1-based first-pole columns for an axis.
    pub fn axis_columns(&self, axis: DichotomyAxis) -> &[usize] {
        // Presence of every axis is guaranteed by the constructor.
        self.axis_columns
            .get(&axis)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Short interpretation stored under a profile code.
    pub fn short_interpretation(&self, code: &str) -> Option<&ShortInterpretation> {
        self.short.get(code)
    }

    /// Detailed interpretation stored under a profile code.
    pub fn detailed_interpretation(&self, code: &str) -> Option<&str> {
        self.detailed.get(code).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn axis_columns(answer_count: usize) -> HashMap<DichotomyAxis, Vec<usize>> {
        let quarter = answer_count / 4;
        DichotomyAxis::ALL
            .into_iter()
            .enumerate()
            .map(|(i, axis)| {
                let start = i * quarter + 1;
                (axis, (start..start + quarter).collect())
            })
            .collect()
    }

    #[test]
    fn accepts_consistent_tables() {
        let tables =
            PersonalityTables::new(vec![], 8, axis_columns(8), HashMap::new(), HashMap::new())
                .unwrap();
        assert_eq!(tables.answer_count(), 8);
        assert_eq!(tables.axis_columns(DichotomyAxis::EI), &[1, 2]);
        assert_eq!(tables.axis_columns(DichotomyAxis::JP), &[7, 8]);
    }

    #[test]
    fn rejects_missing_axis() {
        let mut columns = axis_columns(8);
        columns.remove(&DichotomyAxis::TF);
        let result = PersonalityTables::new(vec![], 8, columns, HashMap::new(), HashMap::new());
        assert!(result.is_err());
    }

    #[test]
    fn rejects_out_of_bounds_column() {
        let mut columns = axis_columns(8);
        columns.get_mut(&DichotomyAxis::EI).unwrap().push(9);
        let result = PersonalityTables::new(vec![], 8, columns, HashMap::new(), HashMap::new());
        assert!(result.is_err());
    }

    #[test]
    fn rejects_duplicate_column() {
        let mut columns = axis_columns(8);
        columns.get_mut(&DichotomyAxis::SN).unwrap().push(3);
        let result = PersonalityTables::new(vec![], 8, columns, HashMap::new(), HashMap::new());
        assert!(result.is_err());
    }

    #[test]
    fn rejects_mismatched_short_interpretation_key() {
        let mut short = HashMap::new();
        short.insert(
            "ESTJ".to_string(),
            ShortInterpretation {
                code: "INFP".to_string(),
                title: "Mediator".to_string(),
                summary: "Quiet and idealistic".to_string(),
            },
        );
        let result = PersonalityTables::new(vec![], 8, axis_columns(8), short, HashMap::new());
        assert!(result.is_err());
    }
}
