//! The day loop: a greedy forward pass over the schedulable days.
//!
//! Each day runs four ordered passes against a shrinking hour budget:
//!
//! 1. urgent subjects (exam less than five days away), 2.0 h target each
//! 2. high-importance subjects not already covered today, 1.0 h target
//! 3. medium-importance subjects, whatever budget remains
//! 4. low-importance subjects, after every medium subject
//!
//! The cascade is a one-way waterfall, not a fair scheduler: pass order and
//! input-order tie-breaks decide which subjects starve under tight budgets,
//! and both must stay exactly as they are.

use std::collections::HashSet;

use chrono::{Duration, NaiveDate};

use crate::api::{Importance, StudyDay, StudyPreferences, StudySession, Subject, UnallocatedTopic};
use crate::models::DayClock;
use crate::planner::availability::Availability;
use crate::planner::progress::{SubjectProgress, COMPLETION_EPSILON};
use crate::planner::{revision, session};

/// Passes stop once less than this remains of the day's budget.
const MIN_ALLOCATION_HOURS: f64 = 0.5;
/// Per-subject target in the urgent pass.
const URGENT_TARGET_HOURS: f64 = 2.0;
/// Per-subject target in the high-importance pass.
const HIGH_TARGET_HOURS: f64 = 1.0;

/// Raw engine output before aggregate accounting.
#[derive(Debug, Default)]
pub struct EngineOutput {
    pub days: Vec<StudyDay>,
    pub unallocated_topics: Vec<UnallocatedTopic>,
}

/// Run the day loop over every schedulable day.
pub fn run_day_loop(
    subjects: &[Subject],
    availability: &Availability,
    preferences: &StudyPreferences,
) -> EngineOutput {
    let mut progress: Vec<SubjectProgress> =
        subjects.iter().map(SubjectProgress::from_subject).collect();
    let mut output = EngineOutput::default();

    for day in availability.days() {
        let date = day.date;
        let mut hours_left = day.hours;
        let mut clock = DayClock::day_start();
        let mut sessions: Vec<StudySession> = Vec::new();
        let mut covered_today: HashSet<String> = HashSet::new();

        // Rule 1: subjects with an exam in less than five days.
        let urgent: Vec<usize> = (0..progress.len())
            .filter(|&i| progress[i].is_urgent(date))
            .collect();
        for idx in urgent {
            if hours_left < MIN_ALLOCATION_HOURS {
                break;
            }
            let target = URGENT_TARGET_HOURS.min(hours_left);
            hours_left -= allocate(
                &mut progress[idx],
                date,
                &mut clock,
                target,
                preferences,
                &mut sessions,
            );
            if progress[idx].importance == Importance::High {
                covered_today.insert(progress[idx].name.clone());
            }
        }

        // Rule 2: high-importance subjects are studied daily.
        let high: Vec<usize> = (0..progress.len())
            .filter(|&i| {
                let s = &progress[i];
                s.importance == Importance::High
                    && !s.subject_completed
                    && !covered_today.contains(&s.name)
            })
            .collect();
        for idx in high {
            if hours_left < MIN_ALLOCATION_HOURS {
                break;
            }
            let target = HIGH_TARGET_HOURS.min(hours_left);
            hours_left -= allocate(
                &mut progress[idx],
                date,
                &mut clock,
                target,
                preferences,
                &mut sessions,
            );
            covered_today.insert(progress[idx].name.clone());
        }

        // Rules 3a and 3b: medium then low. Earlier subjects in list order
        // may exhaust the budget for later ones.
        for tier in [Importance::Medium, Importance::Low] {
            let members: Vec<usize> = (0..progress.len())
                .filter(|&i| progress[i].importance == tier && !progress[i].subject_completed)
                .collect();
            for idx in members {
                if hours_left < MIN_ALLOCATION_HOURS {
                    break;
                }
                hours_left -= allocate(
                    &mut progress[idx],
                    date,
                    &mut clock,
                    hours_left,
                    preferences,
                    &mut sessions,
                );
            }
        }

        // Sessions were appended in allocation order, which is start-time
        // order since the clock only advances.
        if !sessions.is_empty() {
            output.days.push(StudyDay { date, sessions });
        }

        evaluate_completions(&mut progress, date + Duration::days(1), &mut output);
    }

    output
}

/// Route one subject's allocation for the day: the revision batch on its
/// revision day, a regular session otherwise. Returns the hours consumed
/// from the day's budget.
fn allocate(
    subject: &mut SubjectProgress,
    date: NaiveDate,
    clock: &mut DayClock,
    target_hours: f64,
    preferences: &StudyPreferences,
    sessions: &mut Vec<StudySession>,
) -> f64 {
    let outcome = if subject.revision_due(date, preferences.revision_days_before) {
        subject.revision_attempted = true;
        revision::add_revision_sessions(subject, date, *clock, target_hours, preferences, sessions)
    } else {
        session::add_regular_session(subject, date, *clock, target_hours, preferences, sessions)
    };
    *clock = outcome.clock;
    outcome.hours_used
}

/// Completion transitions, evaluated once at day-advance time.
///
/// A subject completes when its exam date has passed, or when every topic
/// is done and revision is either completed or was never needed. Leftover
/// topic hours are recorded at the moment of transition and never again.
fn evaluate_completions(
    progress: &mut [SubjectProgress],
    next_date: NaiveDate,
    output: &mut EngineOutput,
) {
    for subject in progress.iter_mut() {
        if subject.subject_completed {
            continue;
        }

        let exam_passed = subject.exam_date.is_some_and(|exam| exam < next_date);
        let coverage_done = subject.all_topics_done()
            && (subject.revision_completed || !subject.needs_revision);

        if exam_passed || coverage_done {
            subject.subject_completed = true;
            for topic in &subject.topics {
                if topic.remaining_hours > COMPLETION_EPSILON && !topic.completed {
                    output.unallocated_topics.push(UnallocatedTopic {
                        subject: subject.name.clone(),
                        topic: topic.name.clone(),
                        hours_remaining: (topic.remaining_hours * 10.0).round() / 10.0,
                    });
                }
            }
        }
    }
}


#[cfg(test)]
mod invariant_tests {
    use super::*;
    use crate::api::{SessionType, StudyPlanRequest, Topic};
    use crate::planner::generate_study_plan;
    use chrono::Datelike;
    use proptest::prelude::*;

    fn base_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 5).unwrap()
    }

    fn importance_strategy() -> impl Strategy<Value = Importance> {
        prop_oneof![
            Just(Importance::High),
            Just(Importance::Medium),
            Just(Importance::Low),
        ]
    }

    fn subject_strategy(index: usize) -> impl Strategy<Value = Subject> {
        (
            prop::collection::vec(0.5f64..6.0, 1..4),
            importance_strategy(),
            prop::option::of(0i64..20),
        )
            .prop_map(move |(topic_hours, importance, exam_offset)| {
                let topics = topic_hours
                    .into_iter()
                    .enumerate()
                    .map(|(t, hours)| Topic::new(format!("S{index}-T{t}"), hours))
                    .collect();
                let mut subject = Subject::new(format!("S{index}"), topics);
                subject.importance = importance;
                subject.exam_date = exam_offset.map(|d| base_date() + Duration::days(d));
                subject
            })
    }

    fn request_strategy() -> impl Strategy<Value = StudyPlanRequest> {
        (
            prop::collection::vec(any::<bool>(), 1..5),
            1i64..21,
            0.0f64..8.0,
            0.0f64..8.0,
            0.25f64..3.0,
            0.0f64..0.5,
            0i64..5,
        )
            .prop_flat_map(
                |(picks, horizon, weekday, weekend, session, brk, revision_offset)| {
                    let subjects: Vec<_> = picks
                        .iter()
                        .enumerate()
                        .map(|(i, _)| subject_strategy(i))
                        .collect();
                    (subjects,).prop_map(move |(subjects,)| StudyPlanRequest {
                        user_profile: None,
                        subjects,
                        start_date: base_date(),
                        end_date: base_date() + Duration::days(horizon - 1),
                        preferences: StudyPreferences {
                            weekday_hours: weekday,
                            weekend_hours: weekend,
                            break_days: vec![base_date() + Duration::days(2)],
                            session_duration: session,
                            break_duration: brk,
                            revision_days_before: revision_offset,
                            weekly_revision: false,
                        },
                    })
                },
            )
    }

    proptest! {
        #[test]
        fn prop_session_durations_bounded(request in request_strategy()) {
            let response = generate_study_plan(&request);
            for session in response.days.iter().flat_map(|d| &d.sessions) {
                prop_assert!(session.duration_hours > 0.0);
                prop_assert!(
                    session.duration_hours <= request.preferences.session_duration + 1e-9
                );
            }
        }

        #[test]
        fn prop_day_consumption_within_budget(request in request_strategy()) {
            let response = generate_study_plan(&request);
            for day in &response.days {
                let budget = if matches!(day.date.weekday(), chrono::Weekday::Sat | chrono::Weekday::Sun) {
                    request.preferences.weekend_hours
                } else {
                    request.preferences.weekday_hours
                };
                // Sessions plus inserted breaks span first start to last end.
                let first = day.sessions.first().unwrap();
                let last = day.sessions.last().unwrap();
                let consumed = (last.end_time - first.start_time).num_seconds() as f64 / 3600.0;
                prop_assert!(consumed <= budget + 0.01, "consumed {consumed} of {budget}");
            }
        }

        #[test]
        fn prop_topic_hours_never_overdrawn(request in request_strategy()) {
            let response = generate_study_plan(&request);
            for subject in &request.subjects {
                for topic in &subject.topics {
                    let allocated: f64 = response
                        .days
                        .iter()
                        .flat_map(|d| &d.sessions)
                        .filter(|s| {
                            s.subject == subject.name
                                && s.topic == topic.name
                                && s.session_type == SessionType::Regular
                        })
                        .map(|s| s.duration_hours)
                        .sum();
                    prop_assert!(allocated <= topic.estimated_hours + 0.01);
                }
            }
        }

        #[test]
        fn prop_break_days_have_no_sessions(request in request_strategy()) {
            let response = generate_study_plan(&request);
            for day in &response.days {
                prop_assert!(!request.preferences.break_days.contains(&day.date));
                prop_assert!(!day.sessions.is_empty());
            }
        }

        #[test]
        fn prop_revision_at_most_one_day_per_subject(request in request_strategy()) {
            let response = generate_study_plan(&request);
            for subject in &request.subjects {
                let revision_dates: std::collections::HashSet<NaiveDate> = response
                    .days
                    .iter()
                    .flat_map(|d| d.sessions.iter().map(move |s| (d.date, s)))
                    .filter(|(_, s)| {
                        s.subject == subject.name && s.session_type == SessionType::Revision
                    })
                    .map(|(date, _)| date)
                    .collect();
                prop_assert!(revision_dates.len() <= 1);
            }
        }
    }
}
