//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` builder for customization
//! and a `create_*` convenience function for quick default creation. Factories only
//! insert rows; callers pass the IDs of the rows they depend on.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let player = factory::create_player(&db).await?;
//! let unit = factory::create_unit(&db, player.id).await?;
//! let upgrade = factory::create_player_upgrade(&db, unit.id).await?;
//!
//! let (player, unit, upgrade) = factory::helpers::create_upgrade_with_dependencies(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let unit = factory::unit::UnitFactory::new(&db, player.id)
//!     .name("Hammer")
//!     .callsign(Some("Anvil"))
//!     .status(UnitStatus::Kia)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `player` - Create player entities
//! - `unit` - Create unit entities
//! - `player_upgrade` - Create upgrade entities
//! - `medal` - Create medal award entities
//! - `tracked_message` - Create dossier and statistic tracking rows
//! - `helpers` - ID generation and dependency chains

pub mod helpers;
pub mod medal;
pub mod player;
pub mod player_upgrade;
pub mod tracked_message;
pub mod unit;

pub use medal::create_medal;
pub use player::create_player;
pub use player_upgrade::create_player_upgrade;
pub use tracked_message::{create_dossier, create_statistic};
pub use unit::create_unit;
