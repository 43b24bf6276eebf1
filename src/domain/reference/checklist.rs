//! Reference tables for the clinical checklist.

use std::collections::{HashMap, HashSet};

use crate::domain::foundation::DomainError;

/// Group key for the primary checklist total.
pub const PRIMARY_SCALE: &str = "total";

/// Group key for the detachment sub-scale.
pub const DETACHMENT_SCALE: &str = "detachment";

/// Group key for the antisocial sub-scale.
pub const ANTISOCIAL_SCALE: &str = "antisocial";

/// Named groups of 1-based item indices summed per scale.
///
/// Sub-scale groups may overlap each other; every index must fall within
/// the declared item count.
#[derive(Debug, Clone)]
pub struct ChecklistTables {
    item_count: usize,
    groups: HashMap<String, Vec<usize>>,
}

impl ChecklistTables {
    /// Builds the tables, checking internal consistency.
    ///
    /// The primary group and both sub-scale groups must be present and
    /// non-empty, with every index inside 1..=item_count.
    pub fn new(
        item_count: usize,
        groups: HashMap<String, Vec<usize>>,
    ) -> Result<Self, DomainError> {
        if item_count == 0 {
            return Err(DomainError::reference_data("item count cannot be zero"));
        }

        for required in [PRIMARY_SCALE, DETACHMENT_SCALE, ANTISOCIAL_SCALE] {
            if !groups.contains_key(required) {
                return Err(DomainError::reference_data(format!(
                    "missing checklist group '{}'",
                    required
                )));
            }
        }

        for (key, columns) in &groups {
            if columns.is_empty() {
                return Err(DomainError::reference_data(format!(
                    "checklist group '{}' has no items",
                    key
                )));
            }
            let mut seen = HashSet::new();
            for &column in columns {
                if column == 0 || column > item_count {
                    return Err(DomainError::reference_data(format!(
                        "checklist group '{}' index {} is outside 1..={}",
                        key, column, item_count
                    )));
                }
                if !seen.insert(column) {
                    return Err(DomainError::reference_data(format!(
                        "checklist group '{}' lists index {} twice",
                        key, column
                    )));
                }
            }
        }

        Ok(Self { item_count, groups })
    }

    /// Length every item vector must have (20 in the standard dataset).
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// The 1-based indices summed for a group, if the group exists.
    pub fn group(&self, key: &str) -> Option<&[usize]> {
        self.groups.get(key).map(Vec::as_slice)
    }
}
