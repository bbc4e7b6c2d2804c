//! Deterministic study-plan generation.
//!
//! The LearnAI frontend asks for a study plan given a subject, topic, and
//! deadline. With model-backed generation out of scope for this backend,
//! the response is the deterministic consolidation plan that the original
//! service used as its fallback. It is a fixed four-day arc: foundation,
//! core concepts, practice, review.

use crate::models::{PlanEntry, StudyPlan};

/// Build the canned four-day study plan.
///
/// Pure and allocation-only: identical calls return identical plans.
pub fn fallback_study_plan() -> StudyPlan {
    StudyPlan {
        schedule: vec![
            PlanEntry {
                day: 1,
                hours: 2.0,
                focus: "Overview and foundation".to_string(),
            },
            PlanEntry {
                day: 2,
                hours: 2.5,
                focus: "Core concepts".to_string(),
            },
            PlanEntry {
                day: 3,
                hours: 2.0,
                focus: "Practice problems".to_string(),
            },
            PlanEntry {
                day: 4,
                hours: 1.5,
                focus: "Review and reinforcement".to_string(),
            },
        ],
        subtopics: vec![
            "Basic concepts".to_string(),
            "Intermediate applications".to_string(),
            "Advanced problem solving".to_string(),
        ],
        resources: vec![
            "Textbooks".to_string(),
            "Online tutorials".to_string(),
            "Practice tests".to_string(),
        ],
        practice_strategies: vec![
            "Active recall".to_string(),
            "Spaced repetition".to_string(),
            "Practice problems".to_string(),
        ],
        review_schedule: vec![
            "Daily review".to_string(),
            "Weekly comprehensive review".to_string(),
            "Final review day".to_string(),
        ],
    }
}
