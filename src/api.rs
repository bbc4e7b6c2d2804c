//! Public API surface for the Rust backend.
//!
//! This file consolidates the data types exposed over the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::models::plan::DayPeriod;
pub use crate::models::plan::DaySchedule;
pub use crate::models::plan::PlanEntry;
pub use crate::models::plan::SessionRecommendation;
pub use crate::models::plan::StudyPlan;
pub use crate::models::plan::StudySession;
pub use crate::models::plan::TimeSlot;
pub use crate::models::plan::UrgencyLevel;

pub use crate::services::timetable::TimetableError;
pub use crate::services::timetable::MAX_SCHEDULE_DAYS;
pub use crate::services::timetable::REST_DAY_SLOT;
pub use crate::services::timetable::TIME_SLOTS;
