//! Feedback Test Utils
//!
//! Provides shared testing utilities for building unit and integration tests for the feedback
//! API. This crate offers a builder pattern for creating test contexts with in-memory SQLite
//! databases and factories for inserting entities with sensible defaults.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and session
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders that insert feedback and user rows
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Feedback;
//!
//! #[tokio::test]
//! async fn test_feedback_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Feedback)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
