//! ScoreSatisfactionHandler - scores a survey submission and persists it.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, InstrumentCode, UserId};
use crate::domain::reference::ReferenceTables;
use crate::domain::results::AssessmentRecord;
use crate::domain::satisfaction::{SatisfactionReport, SatisfactionScorer, SurveyResponse};
use crate::ports::ResultsRepository;

/// Command to score a satisfaction survey for a user's account.
#[derive(Debug, Clone)]
pub struct ScoreSatisfactionCommand {
    pub user_id: UserId,
    pub examinee_name: Option<String>,
    pub responses: Vec<SurveyResponse>,
}

/// Handler for satisfaction survey scoring.
pub struct ScoreSatisfactionHandler {
    repository: Arc<dyn ResultsRepository>,
    tables: Arc<ReferenceTables>,
}

impl ScoreSatisfactionHandler {
    pub fn new(repository: Arc<dyn ResultsRepository>, tables: Arc<ReferenceTables>) -> Self {
        Self { repository, tables }
    }

    pub async fn handle(
        &self,
        cmd: ScoreSatisfactionCommand,
    ) -> Result<SatisfactionReport, DomainError> {
        let scorer = SatisfactionScorer::new(self.tables.clone());
        let report = scorer.report(&cmd.responses)?;

        let payload = serde_json::to_value(&report).map_err(|e| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("failed to serialize satisfaction report: {}", e),
            )
        })?;

        let record = AssessmentRecord::new(
            cmd.user_id,
            InstrumentCode::Satisfaction,
            cmd.examinee_name,
            payload,
        );
        self.repository.save(&record).await?;

        tracing::info!(
            user_id = %record.user_id(),
            respondents = report.respondent_count,
            "scored satisfaction survey"
        );

        Ok(report)
    }
}
