//! HTTP server module for the study planner.
//!
//! This module provides an axum-based HTTP server that exposes plan
//! generation and the user directory as a REST API. It reuses the pure
//! planner and the repository pattern from the core library.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Request parsing and validation                         │
//! │  - JSON serialization/deserialization                     │
//! │  - CORS, compression, request logging                     │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Planner (planner/)                                       │
//! │  - Pure, synchronous plan generation                      │
//! │  - Run on the blocking thread pool                        │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Repository Layer (db/)                                   │
//! │  - User directory persistence                             │
//! │  - LocalRepository                                        │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
