//! Demand side of the planner: how many study hours the subjects ask for.
//!
//! The revision surcharge here is a heuristic estimate feeding the
//! insufficient-time advisory only; it is deliberately not reconciled with
//! the hours the revision allocator actually places.

use crate::api::Subject;

/// Surcharge applied to subjects with an exam date, as a fraction of their
/// topic hours.
const REVISION_SURCHARGE: f64 = 0.5;

/// Estimated hours needed for one subject, including the revision surcharge
/// when an exam date is set.
pub fn subject_hours_needed(subject: &Subject) -> f64 {
    let base: f64 = subject.topics.iter().map(|t| t.estimated_hours).sum();
    if subject.exam_date.is_some() {
        base + base * REVISION_SURCHARGE
    } else {
        base
    }
}

/// Estimated total demand across all subjects.
pub fn total_hours_needed(subjects: &[Subject]) -> f64 {
    subjects.iter().map(subject_hours_needed).sum()
}
