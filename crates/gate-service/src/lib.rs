//! Gatehouse Gate Service Library
//!
//! This library answers one security question for a meeting system: does a
//! presented credential match the authoritative moderator credential recorded
//! for a meeting? The answer is always a definite boolean - missing input,
//! unknown meetings, and registry failures all deny (fail-closed).
//!
//! # Modules
//!
//! - `config` - Service configuration
//! - `errors` - Error types
//! - `models` - Data models
//! - `observability` - Tracing setup and metrics
//! - `registry` - Meeting registry contract and in-memory store
//! - `services` - Business logic layer

#![warn(clippy::pedantic)]

pub mod config;
pub mod errors;
pub mod models;
pub mod observability;
pub mod registry;
pub mod services;
