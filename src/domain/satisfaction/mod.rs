//! Job-satisfaction survey scoring.
//!
//! Averages per-factor scores across respondents, ranks the strongest and
//! weakest factors, and attaches improvement guidance for the weakest.

mod scorer;

pub use scorer::{
    FactorScore, ImprovementAdvice, SatisfactionInterpretation, SatisfactionReport,
    SatisfactionScorer, SurveyResponse, RANKED_FACTOR_COUNT,
};
