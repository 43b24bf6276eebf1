//! Reference tables for the job-satisfaction survey.

use std::collections::{HashMap, HashSet};

use crate::domain::foundation::DomainError;

/// Ordered factor names plus improvement guidance keyed by factor name.
///
/// Factor order is significant: position j of every respondent's score
/// vector refers to `factor_names()[j]`.
#[derive(Debug, Clone)]
pub struct SatisfactionTables {
    factor_names: Vec<String>,
    guidance: HashMap<String, String>,
}

impl SatisfactionTables {
    /// Builds the tables, checking internal consistency.
    ///
    /// Factor names must be non-empty and unique; every guidance entry must
    /// be keyed by a known factor name. Full guidance coverage is a dataset
    /// concern enforced at load time, not here, so tests can build partial
    /// synthetic tables.
    pub fn new(
        factor_names: Vec<String>,
        guidance: HashMap<String, String>,
    ) -> Result<Self, DomainError> {
        if factor_names.is_empty() {
            return Err(DomainError::reference_data("factor name list is empty"));
        }

        let mut seen = HashSet::new();
        for name in &factor_names {
            if name.trim().is_empty() {
                return Err(DomainError::reference_data("factor names cannot be blank"));
            }
            if !seen.insert(name.as_str()) {
                return Err(DomainError::reference_data(format!(
                    "duplicate factor name '{}'",
                    name
                )));
            }
        }

        for key in guidance.keys() {
            if !seen.contains(key.as_str()) {
                return Err(DomainError::reference_data(format!(
                    "guidance entry '{}' does not match any factor name",
                    key
                )));
            }
        }

        Ok(Self {
            factor_names,
            guidance,
        })
    }

    /// Number of satisfaction factors (20 in the standard dataset).
    pub fn factor_count(&self) -> usize {
        self.factor_names.len()
    }

    /// The ordered factor names.
    pub fn factor_names(&self) -> &[String] {
        &self.factor_names
    }

    /// Improvement guidance for a factor, if the dataset carries one.
    pub fn guidance_for(&self, factor: &str) -> Option<&str> {
        self.guidance.get(factor).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("Factor {}", i)).collect()
    }

    #[test]
    fn accepts_consistent_tables() {
        let mut guidance = HashMap::new();
        guidance.insert("Factor 1".to_string(), "Rotate duties".to_string());
        let tables = SatisfactionTables::new(names(3), guidance).unwrap();
        assert_eq!(tables.factor_count(), 3);
        assert_eq!(tables.guidance_for("Factor 1"), Some("Rotate duties"));
        assert_eq!(tables.guidance_for("Factor 2"), None);
    }

    #[test]
    fn rejects_empty_factor_list() {
        let result = SatisfactionTables::new(vec![], HashMap::new());
        assert!(result.is_err());
    }

    #[test]
    fn rejects_duplicate_factor_names() {
        let mut factors = names(2);
        factors.push("Factor 1".to_string());
        assert!(SatisfactionTables::new(factors, HashMap::new()).is_err());
    }

    #[test]
    fn rejects_guidance_for_unknown_factor() {
        let mut guidance = HashMap::new();
        guidance.insert("Mystery".to_string(), "text".to_string());
        assert!(SatisfactionTables::new(names(2), guidance).is_err());
    }
}
