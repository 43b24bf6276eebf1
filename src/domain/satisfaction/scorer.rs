//! Satisfaction scorer - factor averaging, ranking, and improvement guidance.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::reference::ReferenceTables;

/// How many factors appear in each of the strongest/weakest rankings.
pub const RANKED_FACTOR_COUNT: usize = 3;

/// One respondent's survey submission: a score per factor plus a free-text
/// improvement suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyResponse {
    pub factor_scores: Vec<f64>,
    pub suggestion: String,
}

/// A factor paired with its rounded average score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorScore {
    pub factor: String,
    pub average: f64,
}

/// Improvement guidance attached to one of the weakest factors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImprovementAdvice {
    pub factor: String,
    pub guidance: String,
}

/// Ranking summary: respondent count plus the strongest and weakest factors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SatisfactionInterpretation {
    pub respondent_count: usize,
    pub strongest: Vec<FactorScore>,
    pub weakest: Vec<FactorScore>,
}

/// Full survey report: ranking, guidance for the weakest factors, and the
/// respondents' own suggestions in submission order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SatisfactionReport {
    pub respondent_count: usize,
    pub strongest: Vec<FactorScore>,
    pub weakest: Vec<FactorScore>,
    pub improvements: Vec<ImprovementAdvice>,
    pub suggestions: Vec<String>,
}

/// Scorer for the job-satisfaction survey.
#[derive(Clone)]
pub struct SatisfactionScorer {
    tables: Arc<ReferenceTables>,
}

impl SatisfactionScorer {
    /// Creates a scorer over the injected reference tables.
    pub fn new(tables: Arc<ReferenceTables>) -> Self {
        Self { tables }
    }

    /// Per-factor arithmetic means across all respondents, rounded to two
    /// decimal places.
    ///
    /// # Errors
    ///
    /// - `NoRespondents` for an empty respondent list
    /// - `ShapeMismatch` if any score vector differs from the factor count
    pub fn average_scores(&self, responses: &[SurveyResponse]) -> Result<Vec<f64>, DomainError> {
        let factor_count = self.tables.satisfaction().factor_count();

        if responses.is_empty() {
            return Err(DomainError::new(
                ErrorCode::NoRespondents,
                "cannot average an empty respondent list",
            ));
        }

        for response in responses {
            if response.factor_scores.len() != factor_count {
                return Err(DomainError::shape_mismatch(
                    "factor scores",
                    factor_count,
                    response.factor_scores.len(),
                ));
            }
        }

        let mut sums = vec![0.0_f64; factor_count];
        for response in responses {
            for (sum, score) in sums.iter_mut().zip(&response.factor_scores) {
                *sum += score;
            }
        }

        let count = responses.len() as f64;
        Ok(sums.into_iter().map(|sum| round2(sum / count)).collect())
    }

    /// The respondents' free-text suggestions, in submission order.
    pub fn suggestions(&self, responses: &[SurveyResponse]) -> Vec<String> {
        responses.iter().map(|r| r.suggestion.clone()).collect()
    }

    /// Respondent count plus the three strongest and three weakest factors.
    ///
    /// Selection orders by value only; among equal averages the factor with
    /// the lower index wins, for both ends of the ranking. Fewer than three
    /// factors yield as many entries as exist.
    pub fn interpretation(
        &self,
        responses: &[SurveyResponse],
    ) -> Result<SatisfactionInterpretation, DomainError> {
        let averages = self.average_scores(responses)?;
        let names = self.tables.satisfaction().factor_names();

        Ok(SatisfactionInterpretation {
            respondent_count: responses.len(),
            strongest: rank(&averages, names, Direction::Descending),
            weakest: rank(&averages, names, Direction::Ascending),
        })
    }

    /// Improvement guidance for each of the weakest factors, weakest first.
    ///
    /// A weakest factor without a guidance entry is a dataset integrity
    /// fault and fails the call.
    pub fn improvement_plan(
        &self,
        responses: &[SurveyResponse],
    ) -> Result<Vec<ImprovementAdvice>, DomainError> {
        let interpretation = self.interpretation(responses)?;
        self.advice_for(&interpretation.weakest)
    }

    /// The full survey report: ranking, improvement guidance, suggestions.
    pub fn report(&self, responses: &[SurveyResponse]) -> Result<SatisfactionReport, DomainError> {
        let interpretation = self.interpretation(responses)?;
        let improvements = self.advice_for(&interpretation.weakest)?;

        Ok(SatisfactionReport {
            respondent_count: interpretation.respondent_count,
            strongest: interpretation.strongest,
            weakest: interpretation.weakest,
            improvements,
            suggestions: self.suggestions(responses),
        })
    }

    fn advice_for(&self, weakest: &[FactorScore]) -> Result<Vec<ImprovementAdvice>, DomainError> {
        weakest
            .iter()
            .map(|entry| {
                self.tables
                    .satisfaction()
                    .guidance_for(&entry.factor)
                    .map(|guidance| ImprovementAdvice {
                        factor: entry.factor.clone(),
                        guidance: guidance.to_string(),
                    })
                    .ok_or_else(|| {
                        DomainError::reference_data(format!(
                            "no improvement guidance for factor '{}'",
                            entry.factor
                        ))
                    })
            })
            .collect()
    }
}

enum Direction {
    Ascending,
    Descending,
}

/// Stable top-k/bottom-k over enumerated averages.
///
/// A stable sort on value alone leaves equal averages in index order, which
/// is exactly the first-index-wins tie rule the ranking contract requires.
fn rank(averages: &[f64], names: &[String], direction: Direction) -> Vec<FactorScore> {
    let mut ranked: Vec<(usize, f64)> = averages.iter().copied().enumerate().collect();
    match direction {
        Direction::Ascending => ranked.sort_by(|a, b| a.1.total_cmp(&b.1)),
        Direction::Descending => ranked.sort_by(|a, b| b.1.total_cmp(&a.1)),
    }
    ranked.truncate(RANKED_FACTOR_COUNT);

    ranked
        .into_iter()
        .map(|(index, average)| FactorScore {
            factor: names[index].clone(),
            average,
        })
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
