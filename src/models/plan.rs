//! Plan data types shared by the planning services and the HTTP API.
//!
//! All wire-facing types serialize with camelCase field names to match the
//! JSON contract of the LearnAI frontend.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Period of the day a study slot falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayPeriod {
    Morning,
    Afternoon,
    Evening,
}

/// One of the fixed daily study slots.
///
/// The start/end labels are fixed presentation strings; they are never
/// re-derived from clock arithmetic, so output is locale-independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    /// Displayed start label, e.g. "9:00 AM"
    pub start: &'static str,
    /// Displayed end label, e.g. "11:00 AM"
    pub end: &'static str,
    /// Period tag for the slot
    pub period: DayPeriod,
}

impl TimeSlot {
    /// Render the slot as the "{start} - {end}" label used on sessions.
    pub fn label(&self) -> String {
        format!("{} - {}", self.start, self.end)
    }
}

/// One study block within a day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudySession {
    /// Subject drawn from the input subject list
    pub subject: String,
    /// Duration in hours, rounded to one decimal
    pub duration: f64,
    /// Rotating focus topic, or the rest-day consolidation message
    pub focus: String,
    /// Formatted "{start} - {end}" slot label
    pub time_slot: String,
}

/// One calendar day of the generated plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySchedule {
    /// 1-based day index, sequential with no gaps
    pub day: u32,
    /// Calendar date (serialized as "YYYY-MM-DD")
    pub date: NaiveDate,
    /// Sessions in chronological order within the day
    pub sessions: Vec<StudySession>,
    /// Sum of session durations for the day
    pub total_hours: f64,
}

/// One line of a study plan's day-by-day schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanEntry {
    pub day: u32,
    pub hours: f64,
    pub focus: String,
}

/// A study plan with recommendations beyond the raw schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyPlan {
    pub schedule: Vec<PlanEntry>,
    pub subtopics: Vec<String>,
    pub resources: Vec<String>,
    pub practice_strategies: Vec<String>,
    pub review_schedule: Vec<String>,
}

/// Recommended study session for a single day before a deadline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecommendation {
    /// Calendar date of the session (serialized as "YYYY-MM-DD")
    pub date: NaiveDate,
    /// Minutes to study on that date
    pub duration: u32,
}

/// Urgency classification derived from days remaining until a deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyLevel {
    Critical,
    High,
    Medium,
    Low,
}
