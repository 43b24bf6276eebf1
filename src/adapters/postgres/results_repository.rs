//! PostgreSQL implementation of ResultsRepository.
//!
//! Persists assessment records to the `assessment_results` table. The
//! report payload is stored as serialized JSON text; the engine never
//! queries inside it.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use std::str::FromStr;

use crate::domain::foundation::{
    DomainError, ErrorCode, InstrumentCode, ResultId, Timestamp, UserId,
};
use crate::domain::results::AssessmentRecord;
use crate::ports::ResultsRepository;

/// PostgreSQL implementation of ResultsRepository.
#[derive(Clone)]
pub struct PostgresResultsRepository {
    pool: PgPool,
}

impl PostgresResultsRepository {
    /// Creates a new PostgresResultsRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResultsRepository for PostgresResultsRepository {
    async fn save(&self, record: &AssessmentRecord) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO assessment_results (
                id, user_identifier, instrument, examinee_name, payload, recorded_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(record.id().as_uuid())
        .bind(record.user_id().as_str())
        .bind(record.instrument().as_str())
        .bind(record.examinee_name())
        .bind(record.payload().to_string())
        .bind(record.recorded_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to insert assessment record: {}", e)))?;

        Ok(())
    }

    async fn find_by_user_and_instrument(
        &self,
        user_id: &UserId,
        instrument: InstrumentCode,
    ) -> Result<Vec<AssessmentRecord>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_identifier, instrument, examinee_name, payload, recorded_at
            FROM assessment_results
            WHERE user_identifier = $1 AND instrument = $2
            ORDER BY recorded_at DESC
            "#,
        )
        .bind(user_id.as_str())
        .bind(instrument.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch assessment records: {}", e)))?;

        rows.into_iter().map(row_to_record).collect()
    }

    async fn delete_by_user_and_instrument(
        &self,
        user_id: &UserId,
        instrument: InstrumentCode,
    ) -> Result<u64, DomainError> {
        let result = sqlx::query(
            "DELETE FROM assessment_results WHERE user_identifier = $1 AND instrument = $2",
        )
        .bind(user_id.as_str())
        .bind(instrument.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to delete assessment records: {}", e)))?;

        Ok(result.rows_affected())
    }
}

fn row_to_record(row: PgRow) -> Result<AssessmentRecord, DomainError> {
    let id: uuid::Uuid = get_column(&row, "id")?;
    let user: String = get_column(&row, "user_identifier")?;
    let instrument: String = get_column(&row, "instrument")?;
    let examinee_name: Option<String> = get_column(&row, "examinee_name")?;
    let payload: String = get_column(&row, "payload")?;
    let recorded_at: chrono::DateTime<chrono::Utc> = get_column(&row, "recorded_at")?;

    let user_id = UserId::new(user)
        .map_err(|e| DomainError::new(ErrorCode::InternalError, format!("corrupt row: {}", e)))?;
    let instrument = InstrumentCode::from_str(&instrument)
        .map_err(|e| DomainError::new(ErrorCode::InternalError, format!("corrupt row: {}", e)))?;
    let payload = serde_json::from_str(&payload).map_err(|e| {
        DomainError::new(ErrorCode::InternalError, format!("corrupt payload: {}", e))
    })?;

    Ok(AssessmentRecord::from_parts(
        ResultId::from_uuid(id),
        user_id,
        instrument,
        examinee_name,
        payload,
        Timestamp::from_datetime(recorded_at),
    ))
}

fn get_column<'r, T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>>(
    row: &'r PgRow,
    column: &str,
) -> Result<T, DomainError> {
    row.try_get(column)
        .map_err(|e| DomainError::database(format!("Failed to read column '{}': {}", column, e)))
}
