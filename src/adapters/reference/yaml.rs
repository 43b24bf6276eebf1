//! YAML reference dataset loader.
//!
//! Deserializes the dataset file into raw records, then builds the
//! validated reference tables. On top of the tables' own consistency
//! checks, this adapter pins the standard instrument shape: 20 satisfaction
//! factors with guidance for each, a 40-question bank with the 10/20/20/20
//! axis column split, and a 20-item checklist.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::DomainError;
use crate::domain::personality::DichotomyAxis;
use crate::domain::reference::{
    ChecklistTables, PersonalityTables, Question, ReferenceTables, SatisfactionTables,
    ShortInterpretation,
};
use crate::ports::ReferenceSource;

/// Factors in the standard satisfaction survey.
pub const STANDARD_FACTOR_COUNT: usize = 20;

/// Questions in the standard personality inventory.
pub const STANDARD_QUESTION_COUNT: usize = 40;

/// Items in the standard checklist.
pub const STANDARD_ITEM_COUNT: usize = 20;

/// Columns counted for the EI axis; the remaining axes count twice as many.
const EI_COLUMN_COUNT: usize = 10;
const LONG_AXIS_COLUMN_COUNT: usize = 20;

/// Loads the reference dataset from a YAML file.
pub struct YamlReferenceSource {
    path: PathBuf,
}

impl YamlReferenceSource {
    /// Creates a source reading from the given dataset path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ReferenceSource for YamlReferenceSource {
    fn load(&self) -> Result<ReferenceTables, DomainError> {
        let text = fs::read_to_string(&self.path).map_err(|e| {
            DomainError::reference_data(format!(
                "cannot read dataset '{}': {}",
                self.path.display(),
                e
            ))
        })?;

        let raw: RawDataset = serde_yaml::from_str(&text)
            .map_err(|e| DomainError::reference_data(format!("malformed dataset: {}", e)))?;

        build_tables(raw)
    }
}

// ---------------------------------------------------------------------------
// Raw file records
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize)]
struct RawDataset {
    satisfaction: RawSatisfaction,
    personality: RawPersonality,
    checklist: RawChecklist,
}

#[derive(Debug, Serialize, Deserialize)]
struct RawSatisfaction {
    factors: Vec<RawFactor>,
}

/// A factor couples its name with its improvement guidance, so coverage of
/// the guidance table is guaranteed by the file format itself.
#[derive(Debug, Serialize, Deserialize)]
struct RawFactor {
    name: String,
    guidance: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct RawPersonality {
    questions: Vec<RawQuestion>,
    axes: HashMap<DichotomyAxis, Vec<usize>>,
    #[serde(default)]
    short_interpretations: Vec<RawShortInterpretation>,
    #[serde(default)]
    detailed_interpretations: HashMap<String, String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct RawQuestion {
    prompt: String,
    option_a: String,
    option_b: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct RawShortInterpretation {
    code: String,
    title: String,
    summary: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct RawChecklist {
    items: usize,
    groups: HashMap<String, Vec<usize>>,
}

// ---------------------------------------------------------------------------
// Validation and assembly
// ---------------------------------------------------------------------------

fn build_tables(raw: RawDataset) -> Result<ReferenceTables, DomainError> {
    Ok(ReferenceTables::new(
        build_satisfaction(raw.satisfaction)?,
        build_personality(raw.personality)?,
        build_checklist(raw.checklist)?,
    ))
}

fn build_satisfaction(raw: RawSatisfaction) -> Result<SatisfactionTables, DomainError> {
    if raw.factors.len() != STANDARD_FACTOR_COUNT {
        return Err(DomainError::reference_data(format!(
            "expected {} satisfaction factors, found {}",
            STANDARD_FACTOR_COUNT,
            raw.factors.len()
        )));
    }

    let mut names = Vec::with_capacity(raw.factors.len());
    let mut guidance = HashMap::new();
    for factor in raw.factors {
        if factor.guidance.trim().is_empty() {
            return Err(DomainError::reference_data(format!(
                "factor '{}' is missing improvement guidance",
                factor.name
            )));
        }
        guidance.insert(factor.name.clone(), factor.guidance);
        names.push(factor.name);
    }

    SatisfactionTables::new(names, guidance)
}

fn build_personality(raw: RawPersonality) -> Result<PersonalityTables, DomainError> {
    if raw.questions.len() != STANDARD_QUESTION_COUNT {
        return Err(DomainError::reference_data(format!(
            "expected {} personality questions, found {}",
            STANDARD_QUESTION_COUNT,
            raw.questions.len()
        )));
    }

    for axis in DichotomyAxis::ALL {
        let expected = match axis {
            DichotomyAxis::EI => EI_COLUMN_COUNT,
            _ => LONG_AXIS_COLUMN_COUNT,
        };
        let actual = raw.axes.get(&axis).map(Vec::len).unwrap_or(0);
        if actual != expected {
            return Err(DomainError::reference_data(format!(
                "axis {} must list {} columns, found {}",
                axis, expected, actual
            )));
        }
    }

    let questions = raw
        .questions
        .into_iter()
        .map(|q| Question {
            prompt: q.prompt,
            option_a: q.option_a,
            option_b: q.option_b,
        })
        .collect();

    let short = raw
        .short_interpretations
        .into_iter()
        .map(|s| {
            (
                s.code.clone(),
                ShortInterpretation {
                    code: s.code,
                    title: s.title,
                    summary: s.summary,
                },
            )
        })
        .collect();

    PersonalityTables::new(
        questions,
        STANDARD_QUESTION_COUNT,
        raw.axes,
        short,
        raw.detailed_interpretations,
    )
}

fn build_checklist(raw: RawChecklist) -> Result<ChecklistTables, DomainError> {
    if raw.items != STANDARD_ITEM_COUNT {
        return Err(DomainError::reference_data(format!(
            "expected {} checklist items, found {}",
            STANDARD_ITEM_COUNT, raw.items
        )));
    }

    ChecklistTables::new(raw.items, raw.groups)
}
