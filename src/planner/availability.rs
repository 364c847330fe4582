//! Supply side of the planner: which calendar days can hold sessions and
//! how many hours each of them offers.

use std::collections::HashSet;

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::api::StudyPreferences;

/// One schedulable calendar day plus its hour budget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AvailableDay {
    pub date: NaiveDate,
    pub hours: f64,
}

/// The set of schedulable days in a planning horizon.
///
/// Break days are excluded entirely; all other dates carry the weekday or
/// weekend budget from the preferences. An inverted or empty date range
/// yields an empty set.
#[derive(Debug, Clone, Default)]
pub struct Availability {
    days: Vec<AvailableDay>,
}

impl Availability {
    /// Walk every date in `[start, end]` and classify it.
    pub fn compute(start: NaiveDate, end: NaiveDate, preferences: &StudyPreferences) -> Self {
        let break_days: HashSet<NaiveDate> = preferences.break_days.iter().copied().collect();

        let mut days = Vec::new();
        let mut current = start;
        while current <= end {
            if !break_days.contains(&current) {
                let hours = if is_weekend(current) {
                    preferences.weekend_hours
                } else {
                    preferences.weekday_hours
                };
                days.push(AvailableDay {
                    date: current,
                    hours,
                });
            }
            current += Duration::days(1);
        }

        Self { days }
    }

    /// Schedulable days in calendar order.
    pub fn days(&self) -> &[AvailableDay] {
        &self.days
    }

    /// Total available study hours across the horizon.
    pub fn total_hours(&self) -> f64 {
        self.days.iter().map(|d| d.hours).sum()
    }
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
