//! Campaign Bot Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the
//! campaign bot. This crate offers a builder pattern for creating test contexts with
//! in-memory SQLite databases and factories for seeding campaign records.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders for players, units, upgrades, medals and tracking rows
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_player_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_campaign_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     let player = factory::create_player(&db).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
