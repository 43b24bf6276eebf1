//! Axum router configuration for assessment endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    get_question, get_results, reset_results, score_checklist, score_personality,
    score_satisfaction, AssessmentAppState,
};

/// Create the assessment API router.
///
/// # Routes
///
/// ## Scoring (require the user header)
/// - `POST /assessments/satisfaction` - Score and store a survey submission
/// - `POST /assessments/personality` - Score and store an answer vector
/// - `POST /assessments/checklist` - Score and store an item vector
///
/// ## Stored results (require the user header)
/// - `GET /results/{instrument}` - Stored results for the caller
/// - `DELETE /results/{instrument}` - Reset stored results
///
/// ## Questionnaire (open)
/// - `GET /questionnaire/personality/{index}` - Question card lookup
pub fn assessment_routes() -> Router<AssessmentAppState> {
    Router::new()
        .route("/assessments/satisfaction", post(score_satisfaction))
        .route("/assessments/personality", post(score_personality))
        .route("/assessments/checklist", post(score_checklist))
        .route(
            "/results/:instrument",
            get(get_results).delete(reset_results),
        )
        .route("/questionnaire/personality/:index", get(get_question))
}

/// The complete assessment module router, mounted under `/api`.
pub fn assessment_router() -> Router<AssessmentAppState> {
    Router::new().nest("/api", assessment_routes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::fixtures::{tables, MockResultsRepository};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        let state = AssessmentAppState {
            repository: Arc::new(MockResultsRepository::new()),
            tables: tables(),
        };
        assessment_router().with_state(state)
    }

    #[tokio::test]
    async fn question_lookup_is_open() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/questionnaire/personality/0")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn missing_question_is_not_found() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/questionnaire/personality/99")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn scoring_requires_the_user_header() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/assessments/checklist")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"items":[1,2,3,4,5]}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn checklist_scoring_round_trips() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/assessments/checklist")
                    .header("content-type", "application/json")
                    .header("x-user-id", "clinic-1")
                    .body(Body::from(r#"{"items":[1,2,3,4,5]}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["total"], 15);
    }

    #[tokio::test]
    async fn wrong_shape_submission_is_unprocessable() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/assessments/checklist")
                    .header("content-type", "application/json")
                    .header("x-user-id", "clinic-1")
                    .body(Body::from(r#"{"items":[1,2]}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn unknown_instrument_code_is_bad_request() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/results/aptitude")
                    .header("x-user-id", "clinic-1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
