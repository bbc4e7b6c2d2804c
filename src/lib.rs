//! # LearnAI Rust Backend
//!
//! Deterministic study-planning engine.
//!
//! This crate provides a Rust-based backend for the LearnAI study-planning
//! application, offering synthesis of day-by-day study timetables, canned
//! study-plan generation, and session recommendations. The backend exposes
//! a REST API via Axum for the React frontend.
//!
//! ## Features
//!
//! - **Timetable Generation**: Deterministic multi-day schedules with
//!   rotating topic foci, rest days, and escalating intensity
//! - **Study Plans**: Deterministic fallback study plans with subtopics,
//!   resources, and review schedules
//! - **Session Recommendations**: Deadline-driven session spreading and
//!   urgency classification
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Data Transfer Objects (DTOs) for API responses
//! - [`models`]: Plan data types (days, sessions, time slots)
//! - [`services`]: Planning logic (timetable generator, focus areas,
//!   study plans, recommendations)
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ## Determinism
//!
//! All planning services are pure functions of their inputs: no clock
//! reads, no I/O, no shared mutable state. The HTTP layer owns input
//! validation and any defaulting that involves the current date.

pub mod api;

pub mod models;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
