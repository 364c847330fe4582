use chrono::{NaiveTime, Timelike};
use serde::*;

/// Position of the planning clock within a single study day.
///
/// The planner assumes a day's sessions never cross midnight, so this is
/// plain duration arithmetic anchored at a fixed daily start time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayClock(NaiveTime);

/// Fixed daily start time for the first session of every study day.
pub fn day_start_time() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 0, 0).unwrap()
}

impl DayClock {
    /// Clock positioned at the daily start time.
    pub fn day_start() -> Self {
        Self(day_start_time())
    }

    pub fn new(time: NaiveTime) -> Self {
        Self(time)
    }

    /// Current time of day.
    pub fn time(&self) -> NaiveTime {
        self.0
    }

    /// Clock advanced by a fractional number of hours.
    ///
    /// Sub-second remainders are rounded to whole seconds so that emitted
    /// start/end times stay stable across serialization.
    pub fn advanced_by(&self, hours: f64) -> Self {
        let seconds = (hours * 3600.0).round() as i64;
        Self(self.0 + chrono::Duration::seconds(seconds))
    }

    /// Hours elapsed since the daily start time.
    pub fn hours_since_day_start(&self) -> f64 {
        let elapsed = self.0.num_seconds_from_midnight() as i64
            - day_start_time().num_seconds_from_midnight() as i64;
        elapsed as f64 / 3600.0
    }
}

impl Default for DayClock {
    fn default() -> Self {
        Self::day_start()
    }
}
