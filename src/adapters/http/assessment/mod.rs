//! Assessment HTTP adapter: scoring, stored results, and question lookup.

mod dto;
mod handlers;
mod routes;

pub use handlers::{AssessmentAppState, AuthenticatedUser};
pub use routes::{assessment_router, assessment_routes};
