//! HTTP handlers for assessment endpoints.
//!
//! These handlers connect Axum routes to application layer command/query
//! handlers.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::{
    GetResultsHandler, GetResultsQuery, ResetResultsCommand, ResetResultsHandler,
    ScoreChecklistCommand, ScoreChecklistHandler, ScorePersonalityCommand,
    ScorePersonalityHandler, ScoreSatisfactionCommand, ScoreSatisfactionHandler,
};
use crate::domain::foundation::{DomainError, ErrorCode, InstrumentCode, UserId};
use crate::domain::personality::Questionnaire;
use crate::domain::reference::ReferenceTables;
use crate::domain::satisfaction::SurveyResponse;
use crate::ports::ResultsRepository;

use super::super::error::{ApiError, ErrorResponse};
use super::dto::{
    ChecklistSubmission, PersonalitySubmission, QuestionResponse, ResetResponse, ResultsResponse,
    SatisfactionSubmission, StoredResultResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
///
/// Cloned per request; both members are Arc-wrapped and cheap to share.
#[derive(Clone)]
pub struct AssessmentAppState {
    pub repository: Arc<dyn ResultsRepository>,
    pub tables: Arc<ReferenceTables>,
}

impl AssessmentAppState {
    /// Create handlers on demand from the shared state.
    pub fn score_satisfaction_handler(&self) -> ScoreSatisfactionHandler {
        ScoreSatisfactionHandler::new(self.repository.clone(), self.tables.clone())
    }

    pub fn score_personality_handler(&self) -> ScorePersonalityHandler {
        ScorePersonalityHandler::new(self.repository.clone(), self.tables.clone())
    }

    pub fn score_checklist_handler(&self) -> ScoreChecklistHandler {
        ScoreChecklistHandler::new(self.repository.clone(), self.tables.clone())
    }

    pub fn get_results_handler(&self) -> GetResultsHandler {
        GetResultsHandler::new(self.repository.clone())
    }

    pub fn reset_results_handler(&self) -> ResetResultsHandler {
        ResetResultsHandler::new(self.repository.clone())
    }

    pub fn questionnaire(&self) -> Questionnaire {
        Questionnaire::new(self.tables.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// User Context (would come from auth middleware in production)
// ════════════════════════════════════════════════════════════════════════════

/// Authenticated user context extracted from the request.
///
/// Real authentication is out of scope; an `X-User-Id` header identifies
/// the practitioner account during development and testing.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Rejection type for AuthenticatedUser extraction.
pub struct AuthenticationRequired;

impl IntoResponse for AuthenticationRequired {
    fn into_response(self) -> axum::response::Response {
        let error = ErrorResponse::new("AUTHENTICATION_REQUIRED", "Authentication is required");
        (StatusCode::UNAUTHORIZED, Json(error)).into_response()
    }
}

impl<S> axum::extract::FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AuthenticationRequired;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            let user_id = parts
                .headers
                .get("X-User-Id")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| UserId::new(s).ok())
                .ok_or(AuthenticationRequired)?;

            Ok(AuthenticatedUser { user_id })
        })
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Scoring Handlers (POST endpoints)
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/assessments/satisfaction - Score and store a survey submission
pub async fn score_satisfaction(
    State(state): State<AssessmentAppState>,
    user: AuthenticatedUser,
    Json(body): Json<SatisfactionSubmission>,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.score_satisfaction_handler();
    let cmd = ScoreSatisfactionCommand {
        user_id: user.user_id,
        examinee_name: body.examinee_name,
        responses: body
            .respondents
            .into_iter()
            .map(|r| SurveyResponse {
                factor_scores: r.factor_scores,
                suggestion: r.suggestion,
            })
            .collect(),
    };

    let report = handler.handle(cmd).await?;
    Ok(Json(report))
}

/// POST /api/assessments/personality - Score and store an answer vector
pub async fn score_personality(
    State(state): State<AssessmentAppState>,
    user: AuthenticatedUser,
    Json(body): Json<PersonalitySubmission>,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.score_personality_handler();
    let cmd = ScorePersonalityCommand {
        user_id: user.user_id,
        examinee_name: body.examinee_name,
        answers: body.answers,
    };

    let reading = handler.handle(cmd).await?;
    Ok(Json(reading))
}

/// POST /api/assessments/checklist - Score and store an item vector
pub async fn score_checklist(
    State(state): State<AssessmentAppState>,
    user: AuthenticatedUser,
    Json(body): Json<ChecklistSubmission>,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.score_checklist_handler();
    let cmd = ScoreChecklistCommand {
        user_id: user.user_id,
        examinee_name: body.examinee_name,
        items: body.items,
    };

    let report = handler.handle(cmd).await?;
    Ok(Json(report))
}

// ════════════════════════════════════════════════════════════════════════════
// Results Handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/results/{instrument} - Stored results for the caller
pub async fn get_results(
    State(state): State<AssessmentAppState>,
    user: AuthenticatedUser,
    Path(instrument): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let instrument: InstrumentCode = instrument.parse().map_err(ApiError::from)?;

    let handler = state.get_results_handler();
    let records = handler
        .handle(GetResultsQuery {
            user_id: user.user_id,
            instrument,
        })
        .await?;

    let response = ResultsResponse {
        results: records.into_iter().map(StoredResultResponse::from).collect(),
    };
    Ok(Json(response))
}

/// DELETE /api/results/{instrument} - Reset stored results for the caller
pub async fn reset_results(
    State(state): State<AssessmentAppState>,
    user: AuthenticatedUser,
    Path(instrument): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let instrument: InstrumentCode = instrument.parse().map_err(ApiError::from)?;

    let handler = state.reset_results_handler();
    let deleted = handler
        .handle(ResetResultsCommand {
            user_id: user.user_id,
            instrument,
        })
        .await?;

    Ok(Json(ResetResponse { deleted }))
}

// ════════════════════════════════════════════════════════════════════════════
// Questionnaire Handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/questionnaire/personality/{index} - Question card lookup
///
/// Unauthenticated: examinees browse questions without a practitioner
/// account.
pub async fn get_question(
    State(state): State<AssessmentAppState>,
    Path(index): Path<usize>,
) -> Result<impl IntoResponse, ApiError> {
    let questionnaire = state.questionnaire();
    let question = questionnaire.question(index).ok_or_else(|| {
        DomainError::new(
            ErrorCode::ResultNotFound,
            format!("no question at position {}", index),
        )
    })?;

    Ok(Json(QuestionResponse::from(question)))
}
