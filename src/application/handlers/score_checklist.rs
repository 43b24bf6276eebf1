//! ScoreChecklistHandler - sums checklist scales and persists the report.

use std::sync::Arc;

use crate::domain::checklist::{ChecklistReport, ChecklistScorer};
use crate::domain::foundation::{DomainError, ErrorCode, InstrumentCode, UserId};
use crate::domain::reference::ReferenceTables;
use crate::domain::results::AssessmentRecord;
use crate::ports::ResultsRepository;

/// Command to score a checklist item vector for a user's account.
#[derive(Debug, Clone)]
pub struct ScoreChecklistCommand {
    pub user_id: UserId,
    pub examinee_name: Option<String>,
    pub items: Vec<u32>,
}

/// Handler for checklist scoring.
pub struct ScoreChecklistHandler {
    repository: Arc<dyn ResultsRepository>,
    tables: Arc<ReferenceTables>,
}

impl ScoreChecklistHandler {
    pub fn new(repository: Arc<dyn ResultsRepository>, tables: Arc<ReferenceTables>) -> Self {
        Self { repository, tables }
    }

    pub async fn handle(&self, cmd: ScoreChecklistCommand) -> Result<ChecklistReport, DomainError> {
        let scorer = ChecklistScorer::new(self.tables.clone());
        let report = scorer.results(&cmd.items)?;

        let payload = serde_json::to_value(&report).map_err(|e| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("failed to serialize checklist report: {}", e),
            )
        })?;

        let record = AssessmentRecord::new(
            cmd.user_id,
            InstrumentCode::Checklist,
            cmd.examinee_name,
            payload,
        );
        self.repository.save(&record).await?;

        tracing::info!(
            user_id = %record.user_id(),
            total = report.total,
            "scored checklist"
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::fixtures::{tables, MockResultsRepository};

    fn command(items: Vec<u32>) -> ScoreChecklistCommand {
        ScoreChecklistCommand {
            user_id: UserId::new("clinic-1").unwrap(),
            examinee_name: Some("J. Doe".to_string()),
            items,
        }
    }

    #[tokio::test]
    async fn sums_scales_and_persists_the_report() {
        let repository = Arc::new(MockResultsRepository::new());
        let handler = ScoreChecklistHandler::new(repository.clone(), tables());

        let report = handler.handle(command(vec![1, 2, 3, 4, 5])).await.unwrap();

        assert_eq!(report.total, 15);
        assert_eq!(report.subscales[0].total, 4);
        assert_eq!(report.subscales[1].total, 10);

        let saved = repository.saved();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].instrument(), InstrumentCode::Checklist);
        assert_eq!(saved[0].payload()["total"], 15);
    }

    #[tokio::test]
    async fn wrong_length_vector_fails_without_persisting() {
        let repository = Arc::new(MockResultsRepository::new());
        let handler = ScoreChecklistHandler::new(repository.clone(), tables());

        let err = handler.handle(command(vec![1, 2])).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ShapeMismatch);
        assert!(repository.saved().is_empty());
    }
}
