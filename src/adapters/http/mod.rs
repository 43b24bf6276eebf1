//! HTTP adapters - REST API implementations.

pub mod assessment;
mod error;

pub use assessment::{assessment_router, AssessmentAppState};
pub use error::{ApiError, ErrorResponse};

/// GET /health - liveness probe.
pub async fn health() -> &'static str {
    "ok"
}
