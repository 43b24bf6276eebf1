//! GetResultsHandler - query for a user's stored assessment records.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, InstrumentCode, UserId};
use crate::domain::results::AssessmentRecord;
use crate::ports::ResultsRepository;

/// Query for stored results of one instrument.
#[derive(Debug, Clone)]
pub struct GetResultsQuery {
    pub user_id: UserId,
    pub instrument: InstrumentCode,
}

/// Handler returning stored records, newest first.
pub struct GetResultsHandler {
    repository: Arc<dyn ResultsRepository>,
}

impl GetResultsHandler {
    pub fn new(repository: Arc<dyn ResultsRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetResultsQuery) -> Result<Vec<AssessmentRecord>, DomainError> {
        self.repository
            .find_by_user_and_instrument(&query.user_id, query.instrument)
            .await
    }
}
