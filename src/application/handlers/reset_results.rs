//! ResetResultsHandler - removes a user's stored results for one instrument.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, InstrumentCode, UserId};
use crate::ports::ResultsRepository;

/// Command to reset stored results of one instrument.
#[derive(Debug, Clone)]
pub struct ResetResultsCommand {
    pub user_id: UserId,
    pub instrument: InstrumentCode,
}

/// Handler deleting stored records; returns how many were removed.
pub struct ResetResultsHandler {
    repository: Arc<dyn ResultsRepository>,
}

impl ResetResultsHandler {
    pub fn new(repository: Arc<dyn ResultsRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: ResetResultsCommand) -> Result<u64, DomainError> {
        let deleted = self
            .repository
            .delete_by_user_and_instrument(&cmd.user_id, cmd.instrument)
            .await?;

        tracing::info!(
            user_id = %cmd.user_id,
            instrument = %cmd.instrument,
            deleted,
            "reset assessment results"
        );

        Ok(deleted)
    }
}
