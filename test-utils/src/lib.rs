//! Modlog Test Utils
//!
//! Shared testing utilities for the modlog bot. Provides a builder pattern for
//! creating test contexts backed by in-memory SQLite databases, factories for
//! seeding log settings, and fixtures for constructing Serenity API objects.
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::LogSetting;
//!
//! #[tokio::test]
//! async fn test_settings() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(LogSetting)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod serenity;
