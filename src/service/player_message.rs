//! Content for the Discord messages that mirror a player.
//!
//! Loads everything a dossier or statistics message shows and hands it to the
//! [`render`](super::render) helpers.

use sea_orm::ConnectionTrait;

use crate::{
    bot::gateway::DiscordGateway,
    data::{medal::MedalRepository, player_upgrade::PlayerUpgradeRepository, unit::UnitRepository},
    error::AppError,
    model::{player::Player, settings::MedalEmotes, unit::UnitWithUpgrades},
    service::render,
};

pub struct PlayerMessageService<'a, C: ConnectionTrait> {
    db: &'a C,
    gateway: &'a dyn DiscordGateway,
}

impl<'a, C: ConnectionTrait> PlayerMessageService<'a, C> {
    pub fn new(db: &'a C, gateway: &'a dyn DiscordGateway) -> Self {
        Self { db, gateway }
    }

    /// Renders the current dossier for a player.
    ///
    /// # Arguments
    /// - `player` - Freshly loaded player
    /// - `emotes` - Medal emote table from the current settings
    ///
    /// # Returns
    /// - `Ok(String)` - Message content
    /// - `Err(AppError)` - Database or Discord error while loading medals or the mention
    pub async fn dossier_content(
        &self,
        player: &Player,
        emotes: &MedalEmotes,
    ) -> Result<String, AppError> {
        let medals = MedalRepository::new(self.db)
            .get_names_by_player_id(player.id)
            .await?;
        let mention = self.mention(player).await?;

        Ok(render::dossier_content(
            &mention,
            player,
            &render::medal_block(&medals, emotes),
        ))
    }

    /// Renders the current statistics message for a player.
    ///
    /// # Returns
    /// - `Ok(String)` - Message content listing every unit and its upgrades
    /// - `Err(AppError)` - Database or Discord error while loading the roster or mention
    pub async fn statistics_content(&self, player: &Player) -> Result<String, AppError> {
        let roster = self.roster(player.id).await?;
        let mention = self.mention(player).await?;

        Ok(render::statistics_content(&mention, player, &roster))
    }

    async fn roster(&self, player_id: i32) -> Result<Vec<UnitWithUpgrades>, AppError> {
        let upgrade_repo = PlayerUpgradeRepository::new(self.db);
        let units = UnitRepository::new(self.db)
            .get_by_player_id(player_id)
            .await?;

        let mut roster = Vec::with_capacity(units.len());
        for unit in units {
            let upgrades = upgrade_repo
                .get_by_unit_id(unit.id)
                .await?
                .into_iter()
                .map(|upgrade| upgrade.name)
                .collect();
            roster.push(UnitWithUpgrades { unit, upgrades });
        }

        Ok(roster)
    }

    // Unresolvable users render with an empty mention
    async fn mention(&self, player: &Player) -> Result<String, AppError> {
        Ok(self
            .gateway
            .user_mention(player.discord_id)
            .await?
            .unwrap_or_default())
    }
}
