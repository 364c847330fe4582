//! Revision-day allocation: a batch of short multi-topic review sessions
//! in place of fresh topic coverage.

use chrono::NaiveDate;

use crate::api::{SessionType, StudyPreferences, StudySession};
use crate::models::DayClock;
use crate::planner::progress::SubjectProgress;
use crate::planner::session::AllocationOutcome;

/// Upper bound on topics revisited in one revision batch.
const MAX_REVISION_TOPICS: usize = 5;
/// Cap on the slice given to each topic, in hours.
const MAX_TIME_PER_TOPIC: f64 = 0.5;
/// Slices under six minutes are not worth emitting.
const MIN_SLICE_HOURS: f64 = 0.1;
/// Revision counts as complete once this many topics were revised (or all
/// eligible topics, when fewer).
const COMPLETION_FLOOR: usize = 3;

/// Emit a batch of revision sessions for the subject.
///
/// The batch is sized from topics not yet completed, capped at five, but
/// iteration revisits topics in list order regardless of completion state.
/// Breaks are inserted between topics while budget remains, clamped to the
/// unused budget. `revision_completed` is set only when the completion
/// floor is met, so a batch starved of budget leaves the flag false; the
/// engine never schedules a second attempt, and the shortfall surfaces
/// later through exam-date completion.
pub fn add_revision_sessions(
    subject: &mut SubjectProgress,
    date: NaiveDate,
    clock: DayClock,
    available_hours: f64,
    preferences: &StudyPreferences,
    sessions: &mut Vec<StudySession>,
) -> AllocationOutcome {
    if subject.revision_completed || subject.subject_completed {
        return AllocationOutcome::unchanged(clock);
    }

    let eligible_topics = subject.uncompleted_topic_count();
    let topics_to_revise = eligible_topics.min(MAX_REVISION_TOPICS);
    if topics_to_revise == 0 {
        return AllocationOutcome::unchanged(clock);
    }

    let time_per_topic = MAX_TIME_PER_TOPIC.min(available_hours / topics_to_revise as f64);

    let mut hours_used = 0.0;
    let mut remaining_time = available_hours;
    let mut current_clock = clock;
    let mut topic_index = 0;
    let mut topics_revised = 0;

    while topic_index < subject.topics.len()
        && topics_revised < topics_to_revise
        && remaining_time > MIN_SLICE_HOURS
    {
        let duration = preferences
            .session_duration
            .min(remaining_time)
            .min(time_per_topic);

        if duration < MIN_SLICE_HOURS {
            topic_index += 1;
            continue;
        }

        let topic = &subject.topics[topic_index];
        let end_clock = current_clock.advanced_by(duration);
        sessions.push(StudySession {
            subject: subject.name.clone(),
            topic: format!("Revision: {}", topic.name),
            date,
            start_time: current_clock.time(),
            end_time: end_clock.time(),
            duration_hours: duration,
            session_type: SessionType::Revision,
        });

        hours_used += duration;
        remaining_time -= duration;
        topics_revised += 1;
        topic_index += 1;

        if remaining_time > MIN_SLICE_HOURS {
            let gap = preferences.break_duration.min(remaining_time);
            hours_used += gap;
            remaining_time -= gap;
            current_clock = end_clock.advanced_by(gap);
        } else {
            current_clock = end_clock;
        }
    }

    if topics_revised >= COMPLETION_FLOOR.min(eligible_topics) {
        subject.revision_completed = true;
    }

    AllocationOutcome {
        hours_used,
        clock: current_clock,
    }
}
