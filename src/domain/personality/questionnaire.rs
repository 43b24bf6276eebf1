//! Question bank access for questionnaire presentation.

use std::sync::Arc;

use crate::domain::reference::{Question, ReferenceTables};

/// Read-only view over the ordered question bank.
#[derive(Clone)]
pub struct Questionnaire {
    tables: Arc<ReferenceTables>,
}

impl Questionnaire {
    /// Creates a questionnaire view over the injected reference tables.
    pub fn new(tables: Arc<ReferenceTables>) -> Self {
        Self { tables }
    }

    /// The question at a 0-based bank position, if it exists.
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.tables.personality().questions().get(index)
    }

    /// Number of questions in the bank.
    pub fn len(&self) -> usize {
        self.tables.personality().questions().len()
    }

    /// True when the bank holds no questions.
    pub fn is_empty(&self) -> bool {
        self.tables.personality().questions().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::personality::DichotomyAxis;
    use crate::domain::reference::{
        ChecklistTables, PersonalityTables, SatisfactionTables, ANTISOCIAL_SCALE,
        DETACHMENT_SCALE, PRIMARY_SCALE,
    };
    use std::collections::HashMap;

    fn tables() -> Arc<ReferenceTables> {
        let satisfaction =
            SatisfactionTables::new(vec!["Factor 1".to_string()], HashMap::new()).unwrap();

        let questions = vec![
            Question {
                prompt: "At a party you".to_string(),
                option_a: "talk to many people".to_string(),
                option_b: "talk to a few friends".to_string(),
            },
            Question {
                prompt: "You prefer plans that are".to_string(),
                option_a: "settled in advance".to_string(),
                option_b: "open to change".to_string(),
            },
        ];

        let axis_columns: HashMap<DichotomyAxis, Vec<usize>> = DichotomyAxis::ALL
            .into_iter()
            .map(|axis| (axis, vec![1, 2]))
            .collect();
        let personality =
            PersonalityTables::new(questions, 2, axis_columns, HashMap::new(), HashMap::new())
                .unwrap();

        let mut groups = HashMap::new();
        groups.insert(PRIMARY_SCALE.to_string(), vec![1]);
        groups.insert(DETACHMENT_SCALE.to_string(), vec![1]);
        groups.insert(ANTISOCIAL_SCALE.to_string(), vec![1]);
        let checklist = ChecklistTables::new(1, groups).unwrap();

        Arc::new(ReferenceTables::new(satisfaction, personality, checklist))
    }

    #[test]
    fn returns_question_by_position() {
        let questionnaire = Questionnaire::new(tables());
        assert_eq!(questionnaire.len(), 2);
        assert_eq!(
            questionnaire.question(1).unwrap().prompt,
            "You prefer plans that are"
        );
    }

    #[test]
    fn out_of_range_position_returns_none() {
        let questionnaire = Questionnaire::new(tables());
        assert!(questionnaire.question(2).is_none());
    }
}
