//! Regular session allocation.
//!
//! One call places at most one topic's worth of work; continuation within
//! the same budget happens through subsequent passes or days, driven by the
//! engine.

use chrono::NaiveDate;

use crate::api::{SessionType, StudyPreferences, StudySession};
use crate::models::DayClock;
use crate::planner::progress::{SubjectProgress, COMPLETION_EPSILON};

/// Outcome of one allocator call: budget consumed (session plus any
/// inserted break) and the advanced clock.
#[derive(Debug, Clone, Copy)]
pub struct AllocationOutcome {
    pub hours_used: f64,
    pub clock: DayClock,
}

impl AllocationOutcome {
    pub fn unchanged(clock: DayClock) -> Self {
        Self {
            hours_used: 0.0,
            clock,
        }
    }
}

/// Allocate a regular session for the subject's current topic.
///
/// Advances the cursor past completed topics, then places
/// `min(session_duration, budget, topic remaining)` hours on the first
/// topic with work left. When budget remains after the session a break gap
/// is inserted, clamped to the unused budget so a day can never be charged
/// past its hour budget. Running the cursor past the last topic marks the
/// subject completed with zero hours consumed.
pub fn add_regular_session(
    subject: &mut SubjectProgress,
    date: NaiveDate,
    clock: DayClock,
    available_hours: f64,
    preferences: &StudyPreferences,
    sessions: &mut Vec<StudySession>,
) -> AllocationOutcome {
    if subject.subject_completed {
        return AllocationOutcome::unchanged(clock);
    }

    while subject.cursor < subject.topics.len() {
        let topic = &mut subject.topics[subject.cursor];

        if topic.remaining_hours <= COMPLETION_EPSILON || topic.completed {
            subject.cursor += 1;
            continue;
        }

        let duration = preferences
            .session_duration
            .min(available_hours)
            .min(topic.remaining_hours);

        if duration <= 0.0 {
            return AllocationOutcome::unchanged(clock);
        }

        let end_clock = clock.advanced_by(duration);
        sessions.push(StudySession {
            subject: subject.name.clone(),
            topic: topic.name.clone(),
            date,
            start_time: clock.time(),
            end_time: end_clock.time(),
            duration_hours: duration,
            session_type: SessionType::Regular,
        });

        topic.remaining_hours -= duration;
        if topic.remaining_hours <= COMPLETION_EPSILON {
            topic.completed = true;
            subject.cursor += 1;
        }

        let leftover = available_hours - duration;
        if leftover > COMPLETION_EPSILON {
            let gap = preferences.break_duration.min(leftover);
            return AllocationOutcome {
                hours_used: duration + gap,
                clock: end_clock.advanced_by(gap),
            };
        }
        return AllocationOutcome {
            hours_used: duration,
            clock: end_clock,
        };
    }

    // Cursor ran past the last topic: nothing left to study.
    subject.subject_completed = true;
    AllocationOutcome::unchanged(clock)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Subject, Topic};
    use chrono::{NaiveDate, NaiveTime};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn progress(topics: Vec<Topic>) -> SubjectProgress {
        SubjectProgress::from_subject(&Subject::new("Math", topics))
    }

    #[test]
    fn test_session_capped_by_max_duration() {
        let mut subject = progress(vec![Topic::new("A", 5.0)]);
        let prefs = StudyPreferences::default(); // session_duration 1.5
        let mut sessions = Vec::new();

        let outcome = add_regular_session(
            &mut subject,
            date(2026, 1, 5),
            DayClock::day_start(),
            3.0,
            &prefs,
            &mut sessions,
        );

        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].duration_hours, 1.5);
        assert_eq!(sessions[0].start_time, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        assert_eq!(sessions[0].end_time, NaiveTime::from_hms_opt(10, 30, 0).unwrap());
        // Break inserted: 1.5h session + 0.25h gap
        assert!((outcome.hours_used - 1.75).abs() < 1e-9);
        assert_eq!(outcome.clock.time(), NaiveTime::from_hms_opt(10, 45, 0).unwrap());
        assert!((subject.topics[0].remaining_hours - 3.5).abs() < 1e-9);
    }

    #[test]
    fn test_session_capped_by_topic_remaining() {
        let mut subject = progress(vec![Topic::new("A", 0.75)]);
        let prefs = StudyPreferences::default();
        let mut sessions = Vec::new();

        add_regular_session(
            &mut subject,
            date(2026, 1, 5),
            DayClock::day_start(),
            2.0,
            &prefs,
            &mut sessions,
        );

        assert_eq!(sessions[0].duration_hours, 0.75);
        assert!(subject.topics[0].completed);
        assert_eq!(subject.cursor, 1);
    }

    #[test]
    fn test_no_break_when_budget_fully_used() {
        let mut subject = progress(vec![Topic::new("A", 5.0)]);
        let prefs = StudyPreferences {
            session_duration: 2.0,
            ..Default::default()
        };
        let mut sessions = Vec::new();

        let outcome = add_regular_session(
            &mut subject,
            date(2026, 1, 5),
            DayClock::day_start(),
            2.0,
            &prefs,
            &mut sessions,
        );

        assert!((outcome.hours_used - 2.0).abs() < 1e-9);
        assert_eq!(outcome.clock.time(), NaiveTime::from_hms_opt(11, 0, 0).unwrap());
    }

    #[test]
    fn test_break_gap_clamped_to_leftover_budget() {
        let mut subject = progress(vec![Topic::new("A", 0.55)]);
        let prefs = StudyPreferences::default(); // break_duration 0.25
        let mut sessions = Vec::new();

        let outcome = add_regular_session(
            &mut subject,
            date(2026, 1, 5),
            DayClock::day_start(),
            0.6,
            &prefs,
            &mut sessions,
        );

        // 0.55h session, leftover 0.05 < break_duration, gap clamps to 0.05
        assert!((outcome.hours_used - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_cursor_skips_completed_topics() {
        let mut subject = progress(vec![Topic::new("A", 1.0), Topic::new("B", 1.0)]);
        subject.topics[0].remaining_hours = 0.0;
        subject.topics[0].completed = true;
        let prefs = StudyPreferences::default();
        let mut sessions = Vec::new();

        add_regular_session(
            &mut subject,
            date(2026, 1, 5),
            DayClock::day_start(),
            1.0,
            &prefs,
            &mut sessions,
        );

        assert_eq!(sessions[0].topic, "B");
    }

    #[test]
    fn test_cursor_past_end_completes_subject() {
        let mut subject = progress(vec![Topic::new("A", 1.0)]);
        subject.topics[0].remaining_hours = 0.0;
        subject.topics[0].completed = true;
        let prefs = StudyPreferences::default();
        let mut sessions = Vec::new();

        let outcome = add_regular_session(
            &mut subject,
            date(2026, 1, 5),
            DayClock::day_start(),
            2.0,
            &prefs,
            &mut sessions,
        );

        assert!(subject.subject_completed);
        assert_eq!(outcome.hours_used, 0.0);
        assert!(sessions.is_empty());
    }

    #[test]
    fn test_completed_subject_consumes_nothing() {
        let mut subject = progress(vec![Topic::new("A", 1.0)]);
        subject.subject_completed = true;
        let prefs = StudyPreferences::default();
        let mut sessions = Vec::new();

        let outcome = add_regular_session(
            &mut subject,
            date(2026, 1, 5),
            DayClock::day_start(),
            2.0,
            &prefs,
            &mut sessions,
        );

        assert_eq!(outcome.hours_used, 0.0);
        assert!(sessions.is_empty());
    }

    #[test]
    fn test_single_call_never_spans_topics() {
        let mut subject = progress(vec![Topic::new("A", 0.5), Topic::new("B", 2.0)]);
        let prefs = StudyPreferences::default();
        let mut sessions = Vec::new();

        add_regular_session(
            &mut subject,
            date(2026, 1, 5),
            DayClock::day_start(),
            3.0,
            &prefs,
            &mut sessions,
        );

        // Topic A completes, but B is not touched in the same call.
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].topic, "A");
        assert_eq!(subject.topics[1].remaining_hours, 2.0);
    }
}
