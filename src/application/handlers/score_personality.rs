//! ScorePersonalityHandler - resolves a profile and persists its reading.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, InstrumentCode, UserId};
use crate::domain::personality::{Answer, ProfileInterpreter, ProfileReading, TypeScorer};
use crate::domain::reference::ReferenceTables;
use crate::domain::results::AssessmentRecord;
use crate::ports::ResultsRepository;

/// Command to score a personality answer vector for a user's account.
#[derive(Debug, Clone)]
pub struct ScorePersonalityCommand {
    pub user_id: UserId,
    pub examinee_name: Option<String>,
    pub answers: Vec<Answer>,
}

/// Handler for personality inventory scoring.
pub struct ScorePersonalityHandler {
    repository: Arc<dyn ResultsRepository>,
    tables: Arc<ReferenceTables>,
}

impl ScorePersonalityHandler {
    pub fn new(repository: Arc<dyn ResultsRepository>, tables: Arc<ReferenceTables>) -> Self {
        Self { repository, tables }
    }

    pub async fn handle(
        &self,
        cmd: ScorePersonalityCommand,
    ) -> Result<ProfileReading, DomainError> {
        let scorer = TypeScorer::new(self.tables.clone());
        let profile = scorer.profile(&cmd.answers)?;

        let interpreter = ProfileInterpreter::new(self.tables.clone());
        let reading = interpreter.reading(&profile);

        let payload = serde_json::to_value(&reading).map_err(|e| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("failed to serialize profile reading: {}", e),
            )
        })?;

        let record = AssessmentRecord::new(
            cmd.user_id,
            InstrumentCode::Personality,
            cmd.examinee_name,
            payload,
        );
        self.repository.save(&record).await?;

        tracing::info!(
            user_id = %record.user_id(),
            profile = %reading.profile,
            "scored personality inventory"
        );

        Ok(reading)
    }
}
