//! Factory methods for creating test data.
//!
//! Factories create entities with sensible defaults, reducing boilerplate in
//! tests. Each entity has a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//! use entity::prelude::LogCategory;
//!
//! // Create with defaults
//! let setting = factory::log_setting::create_log_setting(&db).await?;
//!
//! // Customize through the builder
//! let setting = factory::log_setting::LogSettingFactory::new(&db)
//!     .guild_id(42)
//!     .category(LogCategory::Voice)
//!     .enabled(false)
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod log_setting;

// Re-export commonly used factory functions for concise usage
pub use log_setting::create_log_setting;
