//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint, owns boundary validation,
//! and delegates to the pure service layer for the actual planning logic.

use axum::{extract::State, Json};
use tracing::info;

use super::dto::{
    HealthResponse, RecommendationsRequest, RecommendationsResponse, StudyPlanRequest,
    TimetableRequest, TimetableResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::StudyPlan;
use crate::services::{
    days_until_deadline, fallback_study_plan, generate_smart_timetable, session_recommendations,
    urgency_level,
};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
    }))
}

// =============================================================================
// Timetable Generation
// =============================================================================

/// POST /v1/timetable
///
/// Generate a deterministic study timetable from subjects, exam date, and
/// days until the exam. Rejects empty or blank subjects and non-positive
/// day counts with a 400 before touching the generator.
pub async fn generate_timetable(
    State(_state): State<AppState>,
    Json(request): Json<TimetableRequest>,
) -> HandlerResult<TimetableResponse> {
    if request.subjects.is_empty() {
        return Err(AppError::BadRequest(
            "Missing required fields: subjects (non-empty array) and examDate".to_string(),
        ));
    }
    if request.subjects.iter().any(|s| s.trim().is_empty()) {
        return Err(AppError::BadRequest(
            "Subjects must be non-empty strings".to_string(),
        ));
    }
    if request.days_until_exam <= 0 {
        return Err(AppError::BadRequest(
            "Exam date must be in the future".to_string(),
        ));
    }

    let timetable =
        generate_smart_timetable(&request.subjects, request.exam_date, request.days_until_exam)?;

    info!(
        days = timetable.len(),
        subjects = request.subjects.len(),
        "generated study timetable"
    );

    Ok(Json(TimetableResponse { timetable }))
}

// =============================================================================
// Study Plans
// =============================================================================

/// POST /v1/study-plan
///
/// Return the deterministic study plan for a subject/topic/deadline.
pub async fn generate_study_plan(
    State(_state): State<AppState>,
    Json(request): Json<StudyPlanRequest>,
) -> HandlerResult<StudyPlan> {
    if request.subject.trim().is_empty()
        || request.topic.trim().is_empty()
        || request.deadline.trim().is_empty()
    {
        return Err(AppError::BadRequest(
            "Missing required fields".to_string(),
        ));
    }

    Ok(Json(fallback_study_plan()))
}

// =============================================================================
// Session Recommendations
// =============================================================================

/// POST /v1/recommendations
///
/// Spread a study budget over the days before a deadline. `today` defaults
/// to the server's current date; the underlying service is pure.
pub async fn get_recommendations(
    State(_state): State<AppState>,
    Json(request): Json<RecommendationsRequest>,
) -> HandlerResult<RecommendationsResponse> {
    let today = request
        .today
        .unwrap_or_else(|| chrono::Utc::now().date_naive());

    let days_remaining = days_until_deadline(request.deadline, today);
    if days_remaining <= 0 {
        return Err(AppError::BadRequest(
            "Deadline must be in the future".to_string(),
        ));
    }

    Ok(Json(RecommendationsResponse {
        days_remaining,
        urgency: urgency_level(days_remaining),
        sessions: session_recommendations(request.deadline, today, request.duration_minutes),
    }))
}
