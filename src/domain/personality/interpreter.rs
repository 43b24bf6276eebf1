//! Profile interpretation lookup.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::TypeProfile;
use crate::domain::reference::{ReferenceTables, ShortInterpretation};

/// Interpretation text matched to a profile code.
///
/// Both lookups are unique-keyed; an unknown or malformed code simply
/// matches nothing, which is a valid empty reading rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileReading {
    pub profile: TypeProfile,
    pub short: Option<ShortInterpretation>,
    pub detailed: Option<String>,
}

/// Lookup service for profile interpretation text.
#[derive(Clone)]
pub struct ProfileInterpreter {
    tables: Arc<ReferenceTables>,
}

impl ProfileInterpreter {
    /// Creates an interpreter over the injected reference tables.
    pub fn new(tables: Arc<ReferenceTables>) -> Self {
        Self { tables }
    }

    /// Short interpretation stored under the profile code, if any.
    pub fn short(&self, profile: &TypeProfile) -> Option<&ShortInterpretation> {
        self.tables.personality().short_interpretation(profile.as_str())
    }

    /// Detailed interpretation stored under the profile code, if any.
    pub fn detailed(&self, profile: &TypeProfile) -> Option<&str> {
        self.tables
            .personality()
            .detailed_interpretation(profile.as_str())
    }

    /// The full reading for a profile: code plus whatever text matched.
    pub fn reading(&self, profile: &TypeProfile) -> ProfileReading {
        ProfileReading {
            profile: profile.clone(),
            short: self.short(profile).cloned(),
            detailed: self.detailed(profile).map(str::to_string),
        }
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

        let axis_columns: HashMap<DichotomyAxis, Vec<usize>> = DichotomyAxis::ALL
            .into_iter()
            .enumerate()
            .map(|(i, axis)| (axis, vec![i * 2 + 1, i * 2 + 2]))
            .collect();

        let mut short = HashMap::new();
        short.insert(
            "ESTJ".to_string(),
            ShortInterpretation {
                code: "ESTJ".to_string(),
                title: "Executive".to_string(),
                summary: "Organized and decisive".to_string(),
            },
        );
        let mut detailed = HashMap::new();
        detailed.insert(
            "ESTJ".to_string(),
            "Executives thrive on order and tradition.".to_string(),
        );

        let personality =
            PersonalityTables::new(vec![], 8, axis_columns, short, detailed).unwrap();

        let mut groups = HashMap::new();
        groups.insert(PRIMARY_SCALE.to_string(), vec![1]);
        groups.insert(DETACHMENT_SCALE.to_string(), vec![1]);
        groups.insert(ANTISOCIAL_SCALE.to_string(), vec![1]);
        let checklist = ChecklistTables::new(1, groups).unwrap();

        Arc::new(ReferenceTables::new(satisfaction, personality, checklist))
    }

    #[test]
    fn known_profile_matches_both_texts() {
        let interpreter = ProfileInterpreter::new(tables());
        let reading = interpreter.reading(&TypeProfile::new("ESTJ"));

        assert_eq!(reading.short.unwrap().title, "Executive");
        assert!(reading.detailed.unwrap().contains("order"));
    }

    #[test]
    fn unknown_profile_yields_empty_reading_without_error() {
        let interpreter = ProfileInterpreter::new(tables());
        let reading = interpreter.reading(&TypeProfile::new("XXXX"));

        assert!(reading.short.is_none());
        assert!(reading.detailed.is_none());
    }

    #[test]
    fn malformed_profile_is_just_an_unmatched_key() {
        let interpreter = ProfileInterpreter::new(tables());
        assert!(interpreter.short(&TypeProfile::new("not-a-code")).is_none());
    }
}
