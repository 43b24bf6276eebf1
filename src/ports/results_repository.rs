//! Results repository port.
//!
//! Defines the contract for persisting and retrieving assessment records.
//! Implementations handle the actual database operations.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, InstrumentCode, UserId};
use crate::domain::results::AssessmentRecord;

/// Repository port for assessment record persistence.
///
/// Records are append-only; the only mutation is the per-instrument reset,
/// which removes every record a user holds for that instrument.
#[async_trait]
pub trait ResultsRepository: Send + Sync {
    /// Save a new assessment record.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, record: &AssessmentRecord) -> Result<(), DomainError>;

    /// Find all records for a user and instrument, newest first.
    async fn find_by_user_and_instrument(
        &self,
        user_id: &UserId,
        instrument: InstrumentCode,
    ) -> Result<Vec<AssessmentRecord>, DomainError>;

    /// Delete all records for a user and instrument.
    ///
    /// Returns the number of records removed; zero is not an error.
    async fn delete_by_user_and_instrument(
        &self,
        user_id: &UserId,
        instrument: InstrumentCode,
    ) -> Result<u64, DomainError>;
}
