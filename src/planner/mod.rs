//! Rule-based study plan generation.
//!
//! The planner is pure and synchronous: given a request it walks the date
//! range day by day and allocates hours greedily by urgency and importance.
//! Splitting follows the pipeline shape — availability and demand are
//! computed up front, the engine runs the day loop, and this module folds
//! the output into the response aggregates.

pub mod availability;
pub mod demand;
pub mod engine;
pub mod progress;
pub mod revision;
pub mod session;

pub use availability::Availability;
pub use engine::EngineOutput;

use std::collections::HashMap;

use crate::api::{StudyPlanRequest, StudyPlanResponse};

/// Generate a study plan for the request.
///
/// Always returns a plan; when demand exceeds the available hours the
/// response carries the `insufficient_time` advisory alongside whatever
/// schedule fit, rather than failing.
pub fn generate_study_plan(request: &StudyPlanRequest) -> StudyPlanResponse {
    let availability = Availability::compute(
        request.start_date,
        request.end_date,
        &request.preferences,
    );
    let available_hours = availability.total_hours();
    let total_hours_needed = demand::total_hours_needed(&request.subjects);

    let output = engine::run_day_loop(&request.subjects, &availability, &request.preferences);

    let mut total_study_hours = 0.0;
    let mut subjects_distribution: HashMap<String, f64> = HashMap::new();
    for session in output.days.iter().flat_map(|d| &d.sessions) {
        total_study_hours += session.duration_hours;
        *subjects_distribution
            .entry(session.subject.clone())
            .or_insert(0.0) += session.duration_hours;
    }

    StudyPlanResponse {
        days: output.days,
        total_study_hours,
        subjects_distribution,
        insufficient_time: available_hours < total_hours_needed,
        total_hours_needed,
        available_hours,
        unallocated_topics: output.unallocated_topics,
    }
}
