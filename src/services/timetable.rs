//! Smart timetable generator.
//!
//! Given a subject list, an exam date, and the number of days until the
//! exam, synthesizes a day-by-day study schedule with per-day session
//! counts, durations, rotating topic foci, rest days, and escalating
//! intensity as the exam approaches.
//!
//! The generator is a pure function of its three inputs: the plan start
//! date is derived by walking back from the exam date rather than reading
//! the system clock, so identical inputs always produce identical output.
//!
//! Four sequential stages:
//!
//! 1. Parameter derivation (study window, hour budget, base hours/day)
//! 2. Intensity curve (light / normal / intense phases)
//! 3. Day classification (rest day vs. study day)
//! 4. Session layout (subject rotation, slot assignment, durations)

use chrono::{Duration, NaiveDate};

use crate::models::{DayPeriod, DaySchedule, StudySession, TimeSlot};
use crate::services::focus::subject_focus;

/// A plan never exceeds this many days regardless of how far out the exam is.
pub const MAX_SCHEDULE_DAYS: i64 = 30;

/// Fixed daily slots for cognitive load management.
pub const TIME_SLOTS: [TimeSlot; 3] = [
    TimeSlot {
        start: "9:00 AM",
        end: "11:00 AM",
        period: DayPeriod::Morning,
    },
    TimeSlot {
        start: "2:00 PM",
        end: "4:00 PM",
        period: DayPeriod::Afternoon,
    },
    TimeSlot {
        start: "6:00 PM",
        end: "8:00 PM",
        period: DayPeriod::Evening,
    },
];

/// Rest-day slot literal; not derived from the slot table.
pub const REST_DAY_SLOT: &str = "10:00 AM - 11:30 AM";

/// Precondition failures for timetable generation.
///
/// The HTTP boundary rejects these before calling the generator, but the
/// generator checks them itself rather than producing a degenerate plan.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimetableError {
    #[error("subjects must be a non-empty list")]
    EmptySubjects,

    #[error("days until exam must be positive, got {0}")]
    NonPositiveDays(i64),

    #[error("days until exam out of supported range: {0}")]
    DaysOutOfRange(i64),
}

/// Round to one decimal place, half away from zero.
///
/// Scale-and-round idiom; for the positive values that occur here this
/// matches `Math.round(x * 10) / 10`.
fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Intensity multiplier for a 0-based day index.
///
/// Step function over fractional progress through the schedule, with
/// half-open breakpoints at 30% and 70%. No smoothing between phases.
fn intensity_factor(day_index: i64, days_to_schedule: i64) -> f64 {
    let percent_through_study = day_index as f64 / days_to_schedule as f64;
    if percent_through_study < 0.3 {
        return 0.8; // Light phase
    }
    if percent_through_study < 0.7 {
        return 1.0; // Normal phase
    }
    1.3 // Intense phase (closer to exam)
}

/// Rest days recur every 6th day, but the last two days of the schedule
/// are always study days so the plan ends on final review.
///
/// The two rules can interact to suppress a rest day without rescheduling
/// it earlier; that cadence gap is intentional.
fn is_rest_day(day_index: i64, days_to_schedule: i64) -> bool {
    (day_index + 1) % 6 == 0 && day_index < days_to_schedule - 2
}

/// Generate a deterministic study timetable.
///
/// # Arguments
///
/// * `subjects` - Non-empty ordered list of subject names
/// * `exam_date` - Calendar date of the exam
/// * `days_until_exam` - Positive number of days from "today" to the exam;
///   the plan starts at `exam_date - days_until_exam`
///
/// # Returns
///
/// An ordered list of [`DaySchedule`] entries, one per scheduled day
/// (capped at [`MAX_SCHEDULE_DAYS`]), with 1-based sequential day numbers
/// and strictly consecutive calendar dates.
pub fn generate_smart_timetable(
    subjects: &[String],
    exam_date: NaiveDate,
    days_until_exam: i64,
) -> Result<Vec<DaySchedule>, TimetableError> {
    if subjects.is_empty() {
        return Err(TimetableError::EmptySubjects);
    }
    if days_until_exam <= 0 {
        return Err(TimetableError::NonPositiveDays(days_until_exam));
    }

    // Walking back from the exam can leave chrono's representable date
    // range for extreme day counts; surface that as a typed error instead
    // of panicking.
    let start_date = Duration::try_days(days_until_exam)
        .and_then(|delta| exam_date.checked_sub_signed(delta))
        .ok_or(TimetableError::DaysOutOfRange(days_until_exam))?;

    let days_to_schedule = days_until_exam.min(MAX_SCHEDULE_DAYS);
    let subject_count = subjects.len();

    // Nominal budget: a 2-hour study cycle per subject per scheduled day.
    // Ceiling division on positive operands.
    let total_study_hours = subject_count as i64 * days_to_schedule * 2;
    let base_hours_per_day =
        ((total_study_hours + days_to_schedule - 1) / days_to_schedule).clamp(3, 8);

    let mut timetable = Vec::with_capacity(days_to_schedule as usize);

    for day in 0..days_to_schedule {
        let date = start_date + Duration::days(day);
        let day_number = (day + 1) as u32;

        if is_rest_day(day, days_to_schedule) {
            // Light review session only
            let subject = &subjects[day as usize % subject_count];
            let session = StudySession {
                subject: subject.clone(),
                duration: 1.5,
                focus: format!("Light review and consolidation of {} concepts", subject),
                time_slot: REST_DAY_SLOT.to_string(),
            };
            timetable.push(DaySchedule {
                day: day_number,
                date,
                sessions: vec![session],
                total_hours: 1.5,
            });
            continue;
        }

        // Regular study day with multiple sessions
        let day_hours = round1(base_hours_per_day as f64 * intensity_factor(day, days_to_schedule));
        let sessions_count = (((day_hours / 1.5).ceil()) as usize).min(3);

        // Advance the starting subject by one full cycle every
        // `subject_count` days so the same subject is not always first.
        let rotation = day as usize / subject_count;
        let subject_order: Vec<usize> = (0..subject_count)
            .map(|index| (index + rotation) % subject_count)
            .collect();

        // Equal share of the day's hour budget per session.
        let session_duration = round1(day_hours / sessions_count as f64);

        let mut sessions = Vec::with_capacity(sessions_count);
        let mut total_hours = 0.0;

        for session_index in 0..sessions_count {
            let subject = &subjects[subject_order[session_index % subject_count]];
            let slot = &TIME_SLOTS[session_index % TIME_SLOTS.len()];

            sessions.push(StudySession {
                subject: subject.clone(),
                duration: session_duration,
                focus: subject_focus(subject, day_number).to_string(),
                time_slot: slot.label(),
            });

            total_hours += session_duration;
        }

        timetable.push(DaySchedule {
            day: day_number,
            date,
            sessions,
            total_hours,
        });
    }

    Ok(timetable)
}
