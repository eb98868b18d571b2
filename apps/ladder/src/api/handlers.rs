//! # API Endpoint Handlers
//!
//! This module implements the actual HTTP endpoint handlers.
//!
//! Every mutation takes the session write lock once and applies a single
//! synchronous core call, so readers never observe a half-applied update.

use super::{
    AppState,
    types::{
        AssessmentJson, AssessmentResponse, HealthResponse, IntakeResponse, NameJson,
        NameResponse, NotesRequest, RolesResponse, ScoreRequest, ScoreResponse, StepJson,
        StepResponse, SummaryJson, SummaryQuery, SummaryResponse,
    },
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use ladder_core::{
    AssessmentSession, FinalScorePolicy, Intake, LadderError, RoleLevel, Score, Step,
};

/// Map a core error to the HTTP status it is reported with.
pub fn status_for(error: &LadderError) -> StatusCode {
    match error {
        LadderError::InvalidStep(_)
        | LadderError::UnknownRole(_)
        | LadderError::UnknownCriterion { .. } => StatusCode::NOT_FOUND,
        LadderError::ScoreOutOfRange(_)
        | LadderError::ScoreOffStep(_)
        | LadderError::InvalidScore(_)
        | LadderError::NotesTooLong(_, _)
        | LadderError::FieldTooLong { .. }
        | LadderError::Configuration(_) => StatusCode::BAD_REQUEST,
        LadderError::SerializationError(_) | LadderError::IoError(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn assessment_json(
    session: &AssessmentSession,
    level: RoleLevel,
) -> Result<AssessmentJson, LadderError> {
    AssessmentJson::try_from(session.assessment(level)?)
}

// =============================================================================
// HEALTH HANDLER
// =============================================================================

/// Health check endpoint.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse::default())
}

// =============================================================================
// CATALOG & STEP HANDLERS
// =============================================================================

/// List every role table and the slider scale.
pub async fn roles_handler(State(state): State<AppState>) -> impl IntoResponse {
    let session = state.session.read().await;
    (
        StatusCode::OK,
        Json(RolesResponse::from_catalog(session.catalog())),
    )
}

/// Describe one wizard page.
pub async fn step_handler(
    State(state): State<AppState>,
    Path(step): Path<String>,
) -> impl IntoResponse {
    let step = match Step::parse(&step) {
        Ok(s) => s,
        Err(e) => {
            return (
                status_for(&e),
                Json(StepResponse::error(e.to_string())),
            );
        }
    };

    let session = state.session.read().await;
    (
        StatusCode::OK,
        Json(StepResponse::success(StepJson::new(step, session.catalog()))),
    )
}

// =============================================================================
// ASSESSMENT HANDLERS
// =============================================================================

/// Current scores, averages and notes for a role.
pub async fn assessment_handler(
    State(state): State<AppState>,
    Path(level): Path<String>,
) -> impl IntoResponse {
    let session = state.session.read().await;
    match level
        .parse::<RoleLevel>()
        .and_then(|level| assessment_json(&session, level))
    {
        Ok(json) => (StatusCode::OK, Json(AssessmentResponse::success(json))),
        Err(e) => (status_for(&e), Json(AssessmentResponse::error(e.to_string()))),
    }
}

/// Set one criterion score.
pub async fn score_handler(
    State(state): State<AppState>,
    Path(level): Path<String>,
    Json(request): Json<ScoreRequest>,
) -> impl IntoResponse {
    let level = match level.parse::<RoleLevel>() {
        Ok(l) => l,
        Err(e) => return (status_for(&e), Json(ScoreResponse::error(e.to_string()))),
    };
    let score = match Score::try_from(request.score) {
        Ok(s) => s,
        Err(e) => {
            return (
                status_for(&e),
                Json(ScoreResponse::error(format!("Invalid score: {}", e))),
            );
        }
    };

    let mut session = state.session.write().await;
    let result = session
        .set_score(level, &request.criterion_id, score)
        .and_then(|previous| Ok((previous, assessment_json(&session, level)?)));

    match result {
        Ok((previous, json)) => {
            tracing::debug!(
                role = level.slug(),
                criterion = %request.criterion_id,
                score = %score,
                "Score updated"
            );
            (
                StatusCode::OK,
                Json(ScoreResponse::success(previous.as_f64(), json)),
            )
        }
        Err(e) => (status_for(&e), Json(ScoreResponse::error(e.to_string()))),
    }
}

/// Replace a role's qualitative notes.
pub async fn notes_handler(
    State(state): State<AppState>,
    Path(level): Path<String>,
    Json(request): Json<NotesRequest>,
) -> impl IntoResponse {
    let mut session = state.session.write().await;
    let result = level.parse::<RoleLevel>().and_then(|level| {
        session.set_notes(level, request.notes)?;
        assessment_json(&session, level)
    });

    match result {
        Ok(json) => (StatusCode::OK, Json(AssessmentResponse::success(json))),
        Err(e) => (status_for(&e), Json(AssessmentResponse::error(e.to_string()))),
    }
}

// =============================================================================
// SUMMARY HANDLER
// =============================================================================

/// The review page.
pub async fn summary_handler(
    State(state): State<AppState>,
    Query(query): Query<SummaryQuery>,
) -> impl IntoResponse {
    let policy = match query.final_score.as_deref().map(str::parse::<FinalScorePolicy>) {
        None => FinalScorePolicy::default(),
        Some(Ok(p)) => p,
        Some(Err(e)) => return (status_for(&e), Json(SummaryResponse::error(e.to_string()))),
    };

    let session = state.session.read().await;
    match session.summary(policy) {
        Ok(summary) => (
            StatusCode::OK,
            Json(SummaryResponse::success(SummaryJson::from(&summary))),
        ),
        Err(e) => (status_for(&e), Json(SummaryResponse::error(e.to_string()))),
    }
}

// =============================================================================
// NAME & INTAKE HANDLERS
// =============================================================================

/// The cached participant name.
pub async fn get_name_handler(State(state): State<AppState>) -> impl IntoResponse {
    let session = state.session.read().await;
    Json(NameJson {
        name: session.name(),
    })
}

/// Replace the cached participant name. An empty name clears it.
pub async fn put_name_handler(
    State(state): State<AppState>,
    Json(request): Json<NameJson>,
) -> impl IntoResponse {
    let mut session = state.session.write().await;
    match session.set_name(&request.name) {
        Ok(()) => (StatusCode::OK, Json(NameResponse::success(session.name()))),
        Err(e) => (status_for(&e), Json(NameResponse::error(e.to_string()))),
    }
}

/// The intake form.
pub async fn get_intake_handler(State(state): State<AppState>) -> impl IntoResponse {
    let session = state.session.read().await;
    (
        StatusCode::OK,
        Json(IntakeResponse::success(session.intake().clone())),
    )
}

/// Replace the intake form.
pub async fn put_intake_handler(
    State(state): State<AppState>,
    Json(intake): Json<Intake>,
) -> impl IntoResponse {
    let mut session = state.session.write().await;
    match session.set_intake(intake) {
        Ok(()) => (
            StatusCode::OK,
            Json(IntakeResponse::success(session.intake().clone())),
        ),
        Err(e) => (status_for(&e), Json(IntakeResponse::error(e.to_string()))),
    }
}
