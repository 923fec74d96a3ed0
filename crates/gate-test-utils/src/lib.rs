//! # Gate Test Utilities
//!
//! Shared test utilities for the gate service.
//!
//! This crate provides:
//! - Fixed test IDs and credentials (`test_ids`)
//! - Meeting fixture builders (`MeetingBuilder`)
//! - Pre-seeded registry fixtures (`seeded_registry`, `registry_with`)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use gate_test_utils::*;
//!
//! #[tokio::test]
//! async fn test_example() {
//!     let registry = seeded_registry().await;
//!     let validator = ModeratorCredentialValidator::new(registry);
//!
//!     let meeting = MeetingBuilder::new()
//!         .with_id("room-7")
//!         .with_moderator_credential("s3cret")
//!         .build();
//! }
//! ```

pub mod meeting_builders;
pub mod registry_fixtures;
pub mod test_ids;

// Re-export commonly used items
pub use meeting_builders::*;
pub use registry_fixtures::*;
pub use test_ids::*;
