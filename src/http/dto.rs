//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! Field names are camelCase on the wire, matching the LearnAI frontend.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use crate::api::{DaySchedule, SessionRecommendation, StudyPlan, StudySession, UrgencyLevel};

/// Request body for timetable generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableRequest {
    /// Subjects to schedule, in priority order
    pub subjects: Vec<String>,
    /// Exam date (ISO 8601, "YYYY-MM-DD")
    pub exam_date: NaiveDate,
    /// Days from today until the exam; must be positive
    pub days_until_exam: i64,
}

/// Response wrapper for the generated timetable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimetableResponse {
    pub timetable: Vec<DaySchedule>,
}

/// Request body for study-plan generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyPlanRequest {
    pub subject: String,
    pub topic: String,
    /// Free-form deadline description
    pub deadline: String,
    /// Optional study level ("beginner", "intermediate", "advanced")
    #[serde(default)]
    pub study_level: Option<String>,
}

/// Request body for session recommendations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationsRequest {
    /// Deadline date (ISO 8601, "YYYY-MM-DD")
    pub deadline: NaiveDate,
    /// Total study budget to spread, in minutes
    pub duration_minutes: u32,
    /// Reference date; defaults to the server's current date
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

/// Response for session recommendations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationsResponse {
    pub days_remaining: i64,
    pub urgency: UrgencyLevel,
    pub sessions: Vec<SessionRecommendation>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Seconds since server start
    pub uptime_seconds: u64,
}
