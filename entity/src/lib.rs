//! SeaORM entity models for the campaign database.

pub mod prelude;

pub mod bot_config;
pub mod dossier;
pub mod medal;
pub mod player;
pub mod player_upgrade;
pub mod statistic;
pub mod unit;
