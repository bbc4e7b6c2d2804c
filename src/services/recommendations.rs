//! Deadline-driven study helpers.
//!
//! Pure counterparts of the frontend's planning helpers: days remaining
//! until a deadline, urgency classification, duration formatting, and
//! spreading a study budget over the days before a deadline. "Today" is
//! always a parameter; these functions never read the clock.

use chrono::{Duration, NaiveDate};

use crate::models::{SessionRecommendation, UrgencyLevel};

/// Whole days from `today` to `deadline`. Negative when the deadline has
/// passed.
pub fn days_until_deadline(deadline: NaiveDate, today: NaiveDate) -> i64 {
    (deadline - today).num_days()
}

/// Format a minute count as "2h 15m" / "2h" / "45m".
pub fn format_duration(minutes: u32) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;
    if hours == 0 {
        return format!("{}m", mins);
    }
    if mins == 0 {
        return format!("{}h", hours);
    }
    format!("{}h {}m", hours, mins)
}

/// Urgency bucket for a number of days remaining.
pub fn urgency_level(days_remaining: i64) -> UrgencyLevel {
    if days_remaining <= 1 {
        return UrgencyLevel::Critical;
    }
    if days_remaining <= 3 {
        return UrgencyLevel::High;
    }
    if days_remaining <= 7 {
        return UrgencyLevel::Medium;
    }
    UrgencyLevel::Low
}

/// Rounded mean of per-subject progress percentages; 0 when empty.
pub fn overall_progress(progress: &[f64]) -> i64 {
    if progress.is_empty() {
        return 0;
    }
    (progress.iter().sum::<f64>() / progress.len() as f64).round() as i64
}

/// Spread `total_minutes` of study over the days before `deadline`.
///
/// Each day gets `ceil(total / days_left)` minutes, with the final days
/// truncated to whatever remains of the budget (never negative). An empty
/// list is returned when the deadline is today or in the past.
///
/// One entry is allocated per remaining day, so the result length is
/// bounded only by chrono's representable date range; callers with
/// untrusted deadlines should bound them first.
pub fn session_recommendations(
    deadline: NaiveDate,
    today: NaiveDate,
    total_minutes: u32,
) -> Vec<SessionRecommendation> {
    let days_left = days_until_deadline(deadline, today);
    if days_left <= 0 {
        return Vec::new();
    }

    let minutes_per_day = total_minutes.div_ceil(days_left.max(1) as u32);

    (0..days_left)
        .map(|i| {
            // Spent-so-far can exceed u32 near the end of a large budget
            // spread over many days; keep the bookkeeping in u64.
            let spent = minutes_per_day as u64 * i as u64;
            let remaining = (total_minutes as u64).saturating_sub(spent) as u32;
            SessionRecommendation {
                date: today + Duration::days(i),
                duration: minutes_per_day.min(remaining),
            }
        })
        .collect()
}
