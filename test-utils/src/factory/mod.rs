//! Factory methods for creating test data.
//!
//! This module provides factory methods for inserting test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Create with defaults
//! let feedback = factory::create_feedback(&db).await?;
//!
//! // Customize with the builder
//! let feedback = factory::feedback::FeedbackFactory::new(&db)
//!     .rating(5)
//!     .text("Great service")
//!     .build()
//!     .await?;
//! ```

pub mod feedback;
pub mod helpers;
pub mod user;

pub use feedback::create_feedback;
pub use user::create_user;
