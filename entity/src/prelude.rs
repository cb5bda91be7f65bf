pub use super::bot_config::Entity as BotConfig;
pub use super::dossier::Entity as Dossier;
pub use super::medal::Entity as Medal;
pub use super::player::Entity as Player;
pub use super::player_upgrade::Entity as PlayerUpgrade;
pub use super::statistic::Entity as Statistic;
pub use super::unit::Entity as Unit;
