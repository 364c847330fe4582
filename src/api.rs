//! Public API surface for the Rust backend.
//!
//! This file consolidates the DTO types for the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization, with
//! serde defaults matching the documented request schema so that omitted
//! optional fields coerce to their documented values before the planning
//! engine ever sees them.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// User identifier (user directory primary key).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UserId(pub i64);

impl UserId {
    pub fn new(value: i64) -> Self {
        UserId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<UserId> for i64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

/// Importance tier of a subject. Drives the priority cascade in the planner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Importance {
    High,
    #[default]
    Medium,
    Low,
}

/// Kind of study session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SessionType {
    #[default]
    Regular,
    Revision,
}

/// A subdivision of a subject with its own hour estimate.
///
/// Topics are allocated strictly in the order they appear in the subject;
/// `difficulty` is advisory metadata and does not influence allocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topic {
    pub name: String,
    /// Total work required, in hours.
    pub estimated_hours: f64,
    /// 1-5 scale, advisory only.
    #[serde(default = "default_difficulty")]
    pub difficulty: u8,
    #[serde(default)]
    pub completed: bool,
}

impl Topic {
    pub fn new(name: impl Into<String>, estimated_hours: f64) -> Self {
        Self {
            name: name.into(),
            estimated_hours,
            difficulty: default_difficulty(),
            completed: false,
        }
    }
}

/// A top-level study area with an importance tier and optional exam date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    /// Ordered topic list; order defines allocation order.
    pub topics: Vec<Topic>,
    #[serde(default)]
    pub exam_date: Option<NaiveDate>,
    #[serde(default)]
    pub importance: Importance,
    /// 1-5 scale, advisory only.
    #[serde(default = "default_difficulty")]
    pub difficulty: u8,
}

impl Subject {
    pub fn new(name: impl Into<String>, topics: Vec<Topic>) -> Self {
        Self {
            id: None,
            name: name.into(),
            topics,
            exam_date: None,
            importance: Importance::default(),
            difficulty: default_difficulty(),
        }
    }
}

/// One contiguous block of study time for a single topic.
///
/// Immutable once created; the atomic unit of planner output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudySession {
    pub subject: String,
    /// Topic name, or `Revision: <name>` for revision sessions.
    pub topic: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub duration_hours: f64,
    #[serde(default)]
    pub session_type: SessionType,
}

/// A date plus its sessions in chronological order.
///
/// Only dates with at least one session appear in the response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyDay {
    pub date: NaiveDate,
    pub sessions: Vec<StudySession>,
}

/// Learner preferences that shape the daily hour budgets and session sizing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyPreferences {
    /// Daily budget on Mon-Fri, in hours.
    #[serde(default = "default_weekday_hours")]
    pub weekday_hours: f64,
    /// Daily budget on Sat-Sun, in hours.
    #[serde(default = "default_weekend_hours")]
    pub weekend_hours: f64,
    /// Dates fully skipped: no budget, no sessions.
    #[serde(default)]
    pub break_days: Vec<NaiveDate>,
    /// Maximum single-session length, in hours.
    #[serde(default = "default_session_duration")]
    pub session_duration: f64,
    /// Gap inserted between consecutive sessions when time remains, in hours.
    #[serde(default = "default_break_duration")]
    pub break_duration: f64,
    /// Offset from the exam date defining the revision day.
    #[serde(default = "default_revision_days_before")]
    pub revision_days_before: i64,
    /// Declared in the schema, not consumed by the core rules.
    #[serde(default)]
    pub weekly_revision: bool,
}

impl Default for StudyPreferences {
    fn default() -> Self {
        Self {
            weekday_hours: default_weekday_hours(),
            weekend_hours: default_weekend_hours(),
            break_days: Vec::new(),
            session_duration: default_session_duration(),
            break_duration: default_break_duration(),
            revision_days_before: default_revision_days_before(),
            weekly_revision: false,
        }
    }
}

fn default_difficulty() -> u8 {
    3
}

fn default_weekday_hours() -> f64 {
    3.0
}

fn default_weekend_hours() -> f64 {
    5.0
}

fn default_session_duration() -> f64 {
    1.5
}

fn default_break_duration() -> f64 {
    0.25
}

fn default_revision_days_before() -> i64 {
    2
}

/// Optional profile metadata forwarded with a plan request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
}

/// A full planning request: subjects, date range, and preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyPlanRequest {
    #[serde(default)]
    pub user_profile: Option<UserProfile>,
    pub subjects: Vec<Subject>,
    pub start_date: NaiveDate,
    /// Inclusive end of the planning horizon.
    pub end_date: NaiveDate,
    #[serde(default)]
    pub preferences: StudyPreferences,
}

/// A topic with leftover estimated hours at the time its subject was
/// marked completed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnallocatedTopic {
    pub subject: String,
    pub topic: String,
    /// Rounded to one decimal place.
    pub hours_remaining: f64,
}

/// The generated plan plus aggregate accounting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyPlanResponse {
    pub days: Vec<StudyDay>,
    /// Hours actually placed, including neither breaks nor surcharges.
    pub total_study_hours: f64,
    /// Subject name -> hours placed.
    pub subjects_distribution: HashMap<String, f64>,
    /// Advisory flag: available hours fell short of estimated demand.
    pub insufficient_time: bool,
    pub total_hours_needed: f64,
    pub available_hours: f64,
    pub unallocated_topics: Vec<UnallocatedTopic>,
}
