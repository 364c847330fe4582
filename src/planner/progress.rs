//! Call-scoped allocation progress.
//!
//! The request DTOs stay immutable; all mutable bookkeeping (topic cursors,
//! remaining hours, completion flags) lives in these records, built fresh
//! for each planning call and discarded with it.

use chrono::{Duration, NaiveDate};

use crate::api::{Importance, Subject};

/// Remaining hours at or below this threshold count as complete.
pub const COMPLETION_EPSILON: f64 = 0.01;

/// Mutable per-topic state for one planning call.
#[derive(Debug, Clone)]
pub struct TopicProgress {
    pub name: String,
    pub hours_needed: f64,
    pub remaining_hours: f64,
    pub completed: bool,
}

/// Mutable per-subject state for one planning call.
///
/// `revision_attempted` guards the once-per-plan revision invariant;
/// `revision_completed` is only set by the revision allocator when the
/// completion floor is met, so an under-resourced revision leaves the
/// subject unable to complete through topic coverage alone.
#[derive(Debug, Clone)]
pub struct SubjectProgress {
    pub name: String,
    pub exam_date: Option<NaiveDate>,
    pub importance: Importance,
    pub topics: Vec<TopicProgress>,
    pub cursor: usize,
    pub needs_revision: bool,
    pub revision_attempted: bool,
    pub revision_completed: bool,
    pub subject_completed: bool,
}

impl SubjectProgress {
    /// Fresh progress record for a subject. Topic `completed` flags in the
    /// request are derived output fields and are ignored here; every topic
    /// starts with its full estimate remaining.
    pub fn from_subject(subject: &Subject) -> Self {
        let topics = subject
            .topics
            .iter()
            .map(|t| TopicProgress {
                name: t.name.clone(),
                hours_needed: t.estimated_hours,
                remaining_hours: t.estimated_hours,
                completed: false,
            })
            .collect();

        Self {
            name: subject.name.clone(),
            exam_date: subject.exam_date,
            importance: subject.importance,
            topics,
            cursor: 0,
            needs_revision: subject.exam_date.is_some(),
            revision_attempted: false,
            revision_completed: false,
            subject_completed: false,
        }
    }

    /// True when every topic is either completed or within epsilon of done.
    pub fn all_topics_done(&self) -> bool {
        self.topics
            .iter()
            .all(|t| t.remaining_hours <= COMPLETION_EPSILON || t.completed)
    }

    /// Topics not yet fully covered; sizes the revision batch.
    pub fn uncompleted_topic_count(&self) -> usize {
        self.topics.iter().filter(|t| !t.completed).count()
    }

    /// The single date on which this subject's revision batch is attempted.
    pub fn revision_day(&self, days_before: i64) -> Option<NaiveDate> {
        self.exam_date.map(|exam| exam - Duration::days(days_before))
    }

    /// Urgent rule: exam within five days and not yet past.
    pub fn is_urgent(&self, today: NaiveDate) -> bool {
        match self.exam_date {
            Some(exam) if !self.subject_completed => {
                exam >= today && (exam - today).num_days() < 5
            }
            _ => false,
        }
    }

    /// Whether today is this subject's revision day and the batch is still
    /// pending. The attempted flag keeps revision to a single delegation
    /// even when several passes visit the subject on the same day.
    pub fn revision_due(&self, today: NaiveDate, days_before: i64) -> bool {
        self.needs_revision
            && !self.revision_attempted
            && !self.revision_completed
            && self.revision_day(days_before) == Some(today)
    }
}
