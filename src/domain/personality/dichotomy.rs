//! Dichotomy axis scoring - pole counts and profile resolution.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Answer, TypeProfile};
use crate::domain::foundation::DomainError;
use crate::domain::reference::ReferenceTables;

/// One of the four personality dichotomy axes.
///
/// Each axis carries an ordered letter pair. The first letter is the pole
/// whose count comes from "A" answers in the axis's columns; the second
/// pole's count is the complement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DichotomyAxis {
    /// Extraversion / Introversion.
    EI,
    /// Sensing / Intuition.
    SN,
    /// Thinking / Feeling.
    TF,
    /// Judging / Perceiving.
    JP,
}

impl DichotomyAxis {
    /// All axes in profile-assembly order.
    pub const ALL: [DichotomyAxis; 4] = [
        DichotomyAxis::EI,
        DichotomyAxis::SN,
        DichotomyAxis::TF,
        DichotomyAxis::JP,
    ];

    /// The (first, second) pole letters of this axis.
    ///
    /// Resolution compares the first-pole count against the second-pole
    /// count with a strict `<`, so an exact tie resolves to the first
    /// letter. That direction is load-bearing scoring behavior; keep the
    /// pairs ordered exactly as listed here.
    pub fn poles(&self) -> (char, char) {
        match self {
            DichotomyAxis::EI => ('E', 'I'),
            DichotomyAxis::SN => ('S', 'N'),
            DichotomyAxis::TF => ('T', 'F'),
            DichotomyAxis::JP => ('J', 'P'),
        }
    }
}

impl fmt::Display for DichotomyAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (first, second) = self.poles();
        write!(f, "{}{}", first, second)
    }
}

/// Scorer resolving answer vectors into 4-letter profiles.
#[derive(Clone)]
pub struct TypeScorer {
    tables: Arc<ReferenceTables>,
}

impl TypeScorer {
    /// Creates a scorer over the injected reference tables.
    pub fn new(tables: Arc<ReferenceTables>) -> Self {
        Self { tables }
    }

    /// Counts "A" answers among the axis's designated columns.
    ///
    /// # Errors
    ///
    /// - `ShapeMismatch` if the answer vector length differs from the
    ///   configured answer count
    pub fn first_pole_count(
        &self,
        answers: &[Answer],
        axis: DichotomyAxis,
    ) -> Result<usize, DomainError> {
        self.check_shape(answers)?;
        Ok(self.count_in_columns(answers, axis))
    }

    /// Resolves one axis to its winning pole letter.
    pub fn resolve_axis(
        &self,
        answers: &[Answer],
        axis: DichotomyAxis,
    ) -> Result<char, DomainError> {
        self.check_shape(answers)?;
        Ok(self.resolve_unchecked(answers, axis))
    }

    /// Resolves all four axes and assembles the profile code.
    pub fn profile(&self, answers: &[Answer]) -> Result<TypeProfile, DomainError> {
        self.check_shape(answers)?;

        let code: String = DichotomyAxis::ALL
            .into_iter()
            .map(|axis| self.resolve_unchecked(answers, axis))
            .collect();
        Ok(TypeProfile::new(code))
    }

    fn check_shape(&self, answers: &[Answer]) -> Result<(), DomainError> {
        let expected = self.tables.personality().answer_count();
        if answers.len() != expected {
            return Err(DomainError::shape_mismatch("answers", expected, answers.len()));
        }
        Ok(())
    }

    fn count_in_columns(&self, answers: &[Answer], axis: DichotomyAxis) -> usize {
        // Columns are 1-based and bounds-checked at table construction.
        self.tables
            .personality()
            .axis_columns(axis)
            .iter()
            .filter(|&&column| answers[column - 1] == Answer::A)
            .count()
    }

    fn resolve_unchecked(&self, answers: &[Answer], axis: DichotomyAxis) -> char {
        let columns = self.tables.personality().axis_columns(axis);
        let first_count = self.count_in_columns(answers, axis);
        let second_count = columns.len() - first_count;

        let (first, second) = axis.poles();
        // Strict comparison: an exact tie goes to the first pole.
        if first_count < second_count {
            second
        } else {
            first
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::reference::{
        ChecklistTables, PersonalityTables, SatisfactionTables, ANTISOCIAL_SCALE,
        DETACHMENT_SCALE, PRIMARY_SCALE,
    };
    use std::collections::HashMap;

    // 40 answers; EI counts 10 columns, the other axes 20 each. Axes may
    // share columns; only duplicates within one axis are rejected.
    fn standard_tables() -> Arc<ReferenceTables> {
        let mut axis_columns = HashMap::new();
        axis_columns.insert(DichotomyAxis::EI, (1..=10).collect::<Vec<_>>());
        axis_columns.insert(DichotomyAxis::SN, (11..=30).collect::<Vec<_>>());
        axis_columns.insert(DichotomyAxis::TF, (21..=40).collect::<Vec<_>>());
        axis_columns.insert(DichotomyAxis::JP, (1..=40).step_by(2).collect::<Vec<_>>());
        tables_with_axes(40, axis_columns)
    }

    fn tables_with_axes(
        answer_count: usize,
        axis_columns: HashMap<DichotomyAxis, Vec<usize>>,
    ) -> Arc<ReferenceTables> {
        let satisfaction = SatisfactionTables::new(
            vec!["Factor 1".to_string(), "Factor 2".to_string()],
            HashMap::new(),
        )
        .unwrap();
        let personality = PersonalityTables::new(
            vec![],
            answer_count,
            axis_columns,
            HashMap::new(),
            HashMap::new(),
        )
        .unwrap();

        let mut groups = HashMap::new();
        groups.insert(PRIMARY_SCALE.to_string(), vec![1, 2]);
        groups.insert(DETACHMENT_SCALE.to_string(), vec![1]);
        groups.insert(ANTISOCIAL_SCALE.to_string(), vec![2]);
        let checklist = ChecklistTables::new(2, groups).unwrap();

        Arc::new(ReferenceTables::new(satisfaction, personality, checklist))
    }

    #[test]
    fn all_a_answers_resolve_to_first_poles() {
        let scorer = TypeScorer::new(standard_tables());
        let answers = vec![Answer::A; 40];

        assert_eq!(scorer.first_pole_count(&answers, DichotomyAxis::EI).unwrap(), 10);
        assert_eq!(scorer.first_pole_count(&answers, DichotomyAxis::SN).unwrap(), 20);

        let profile = scorer.profile(&answers).unwrap();
        assert_eq!(profile.as_str(), "ESTJ");
    }

    #[test]
    fn all_b_answers_resolve_to_second_poles() {
        let scorer = TypeScorer::new(standard_tables());
        let answers = vec![Answer::B; 40];

        let profile = scorer.profile(&answers).unwrap();
        assert_eq!(profile.as_str(), "INFP");
    }

    #[test]
    fn exact_tie_resolves_to_first_pole() {
        let scorer = TypeScorer::new(standard_tables());

        // Exactly 5 "A" answers among the EI columns 1..=10.
        let mut answers = vec![Answer::B; 40];
        for column in 1..=5 {
            answers[column - 1] = Answer::A;
        }

        assert_eq!(scorer.first_pole_count(&answers, DichotomyAxis::EI).unwrap(), 5);
        assert_eq!(scorer.resolve_axis(&answers, DichotomyAxis::EI).unwrap(), 'E');
    }

    #[test]
    fn one_below_the_tie_resolves_to_second_pole() {
        let scorer = TypeScorer::new(standard_tables());

        let mut answers = vec![Answer::B; 40];
        for column in 1..=4 {
            answers[column - 1] = Answer::A;
        }

        assert_eq!(scorer.resolve_axis(&answers, DichotomyAxis::EI).unwrap(), 'I');
    }

    #[test]
    fn counts_only_designated_columns() {
        let mut axis_columns = HashMap::new();
        axis_columns.insert(DichotomyAxis::EI, vec![1, 3]);
        axis_columns.insert(DichotomyAxis::SN, vec![2, 4]);
        axis_columns.insert(DichotomyAxis::TF, vec![1, 2]);
        axis_columns.insert(DichotomyAxis::JP, vec![3, 4]);
        let scorer = TypeScorer::new(tables_with_axes(4, axis_columns));

        let answers = vec![Answer::A, Answer::B, Answer::B, Answer::A];
        assert_eq!(scorer.first_pole_count(&answers, DichotomyAxis::EI).unwrap(), 1);
        assert_eq!(scorer.first_pole_count(&answers, DichotomyAxis::SN).unwrap(), 1);
    }

    #[test]
    fn wrong_length_vector_fails() {
        let scorer = TypeScorer::new(standard_tables());
        let err = scorer.profile(&vec![Answer::A; 39]).unwrap_err();
        assert_eq!(err.code, crate::domain::foundation::ErrorCode::ShapeMismatch);
    }

    #[test]
    fn scoring_twice_yields_identical_profiles() {
        let scorer = TypeScorer::new(standard_tables());
        let answers: Vec<Answer> = (0..40)
            .map(|i| if i % 3 == 0 { Answer::A } else { Answer::B })
            .collect();

        assert_eq!(
            scorer.profile(&answers).unwrap(),
            scorer.profile(&answers).unwrap()
        );
    }
}
