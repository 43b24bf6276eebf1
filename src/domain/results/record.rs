//! Assessment record - one persisted scoring outcome.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{InstrumentCode, ResultId, Timestamp, UserId};

/// A scored assessment persisted for a practitioner's account.
///
/// The payload is the serialized instrument report; the engine never reads
/// it back for scoring, so it is stored as opaque JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    id: ResultId,
    user_id: UserId,
    instrument: InstrumentCode,
    examinee_name: Option<String>,
    payload: serde_json::Value,
    recorded_at: Timestamp,
}

impl AssessmentRecord {
    /// Creates a fresh record with a new id and the current timestamp.
    pub fn new(
        user_id: UserId,
        instrument: InstrumentCode,
        examinee_name: Option<String>,
        payload: serde_json::Value,
    ) -> Self {
        Self {
            id: ResultId::new(),
            user_id,
            instrument,
            examinee_name,
            payload,
            recorded_at: Timestamp::now(),
        }
    }

    /// Rehydrates a record from stored parts.
    pub fn from_parts(
        id: ResultId,
        user_id: UserId,
        instrument: InstrumentCode,
        examinee_name: Option<String>,
        payload: serde_json::Value,
        recorded_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            instrument,
            examinee_name,
            payload,
            recorded_at,
        }
    }

    pub fn id(&self) -> &ResultId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn instrument(&self) -> InstrumentCode {
        self.instrument
    }

    pub fn examinee_name(&self) -> Option<&str> {
        self.examinee_name.as_deref()
    }

    pub fn payload(&self) -> &serde_json::Value {
        &self.payload
    }

    pub fn recorded_at(&self) -> &Timestamp {
        &self.recorded_at
    }
}
