//! # Study Plan Rust Backend
//!
//! Rule-based study plan generation engine.
//!
//! This crate provides a Rust backend that allocates a learner's available
//! study time, day by day, across subjects and their topics, honoring exam
//! deadlines, importance tiers, and mandatory pre-exam revision. The backend
//! exposes a REST API via Axum.
//!
//! ## Features
//!
//! - **Planning Engine**: greedy day-by-day allocation with a four-rule
//!   priority cascade, partial topic completion tracking, and revision-day
//!   batches
//! - **Demand/Supply Accounting**: available-hours and needed-hours totals
//!   with an insufficient-time advisory
//! - **User Directory**: simple user lookup service backed by the repository
//!   pattern
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Data Transfer Objects (DTOs) for requests and responses
//! - [`models`]: time-of-day arithmetic shared by the planner
//! - [`planner`]: the scheduling engine (availability, demand, allocation)
//! - [`db`]: user directory repository pattern and in-memory store
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod api;
pub mod db;
pub mod models;
pub mod planner;

#[cfg(feature = "http-server")]
pub mod http;

pub use planner::generate_study_plan;
