//! Service layer with the planning logic.
//!
//! All services here are pure functions: they take their inputs by value
//! or reference and return owned results, with no clock reads, no I/O,
//! and no shared state. The HTTP layer validates inputs and handles any
//! current-date defaulting before calling in.

pub mod focus;

pub mod recommendations;

pub mod study_plan;

pub mod timetable;

pub use focus::{focus_areas, subject_focus};
pub use recommendations::{
    days_until_deadline, format_duration, overall_progress, session_recommendations,
    urgency_level,
};
pub use study_plan::fallback_study_plan;
pub use timetable::{generate_smart_timetable, TimetableError, MAX_SCHEDULE_DAYS};
