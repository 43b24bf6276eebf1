//! HTTP DTOs for assessment endpoints.
//!
//! These types define the JSON request/response structure and form the
//! boundary between HTTP and the application layer. Scoring reports
//! (`SatisfactionReport`, `ProfileReading`, `ChecklistReport`) serialize
//! directly and need no mirror types here.

use serde::{Deserialize, Serialize};

use crate::domain::personality::Answer;
use crate::domain::reference::Question;
use crate::domain::results::AssessmentRecord;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// One respondent of a satisfaction survey submission.
#[derive(Debug, Clone, Deserialize)]
pub struct RespondentDto {
    /// One score per factor, aligned with the dataset's factor order.
    pub factor_scores: Vec<f64>,
    /// Free-text improvement suggestion.
    #[serde(default)]
    pub suggestion: String,
}

/// Request to score a satisfaction survey.
#[derive(Debug, Clone, Deserialize)]
pub struct SatisfactionSubmission {
    #[serde(default)]
    pub examinee_name: Option<String>,
    pub respondents: Vec<RespondentDto>,
}

/// Request to score a personality answer vector.
#[derive(Debug, Clone, Deserialize)]
pub struct PersonalitySubmission {
    #[serde(default)]
    pub examinee_name: Option<String>,
    pub answers: Vec<Answer>,
}

/// Request to score a checklist item vector.
#[derive(Debug, Clone, Deserialize)]
pub struct ChecklistSubmission {
    #[serde(default)]
    pub examinee_name: Option<String>,
    pub items: Vec<u32>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// One stored assessment record.
#[derive(Debug, Clone, Serialize)]
pub struct StoredResultResponse {
    pub id: String,
    pub instrument: String,
    pub examinee_name: Option<String>,
    pub payload: serde_json::Value,
    /// When the record was stored (ISO 8601).
    pub recorded_at: String,
}

impl From<AssessmentRecord> for StoredResultResponse {
    fn from(record: AssessmentRecord) -> Self {
        Self {
            id: record.id().to_string(),
            instrument: record.instrument().as_str().to_string(),
            examinee_name: record.examinee_name().map(str::to_string),
            payload: record.payload().clone(),
            recorded_at: record.recorded_at().to_string(),
        }
    }
}

/// Stored results for one instrument.
#[derive(Debug, Clone, Serialize)]
pub struct ResultsResponse {
    pub results: Vec<StoredResultResponse>,
}

/// Outcome of a results reset.
#[derive(Debug, Clone, Serialize)]
pub struct ResetResponse {
    pub deleted: u64,
}

/// One question card of the personality questionnaire.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionResponse {
    pub prompt: String,
    pub option_a: String,
    pub option_b: String,
}

impl From<&Question> for QuestionResponse {
    fn from(question: &Question) -> Self {
        Self {
            prompt: question.prompt.clone(),
            option_a: question.option_a.clone(),
            option_b: question.option_b.clone(),
        }
    }
}
