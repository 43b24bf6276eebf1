//! Checklist scorer - group sums over 1-based item index sets.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::DomainError;
use crate::domain::reference::{ReferenceTables, ANTISOCIAL_SCALE, DETACHMENT_SCALE, PRIMARY_SCALE};

/// One named sub-scale with its summed total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscaleScore {
    pub scale: String,
    pub total: u32,
}

/// Checklist result: the primary total followed by the sub-scale pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistReport {
    pub total: u32,
    pub subscales: Vec<SubscaleScore>,
}

/// Scorer for the clinical checklist.
#[derive(Clone)]
pub struct ChecklistScorer {
    tables: Arc<ReferenceTables>,
}

impl ChecklistScorer {
    /// Creates a scorer over the injected reference tables.
    pub fn new(tables: Arc<ReferenceTables>) -> Self {
        Self { tables }
    }

    /// Sums the item values at the group's 1-based indices.
    ///
    /// # Errors
    ///
    /// - `ShapeMismatch` if the item vector length differs from the
    ///   configured item count
    /// - `ReferenceDataInvalid` for an unknown group key
    /// - `IndexOutOfBounds` if a group index falls beyond the item vector
    pub fn scale_total(&self, items: &[u32], group: &str) -> Result<u32, DomainError> {
        let checklist = self.tables.checklist();

        if items.len() != checklist.item_count() {
            return Err(DomainError::shape_mismatch(
                "item scores",
                checklist.item_count(),
                items.len(),
            ));
        }

        let columns = checklist.group(group).ok_or_else(|| {
            DomainError::reference_data(format!("unknown checklist group '{}'", group))
        })?;

        columns.iter().try_fold(0u32, |sum, &column| {
            items
                .get(column - 1)
                .map(|value| sum + value)
                .ok_or_else(|| DomainError::index_out_of_bounds(column, items.len()))
        })
    }

    /// The primary total followed by the two named sub-scale totals.
    pub fn results(&self, items: &[u32]) -> Result<ChecklistReport, DomainError> {
        let total = self.scale_total(items, PRIMARY_SCALE)?;
        let subscales = [DETACHMENT_SCALE, ANTISOCIAL_SCALE]
            .into_iter()
            .map(|scale| {
                self.scale_total(items, scale).map(|total| SubscaleScore {
                    scale: scale.to_string(),
                    total,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ChecklistReport { total, subscales })
    }
}
