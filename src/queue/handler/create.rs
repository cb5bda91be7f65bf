//! Create handler.
//!
//! Posts a player's dossier and statistics messages when they do not exist yet. A
//! tracking row whose message was deleted out-of-band is repointed at the new message.

use dioxus_logger::tracing;
use sea_orm::DatabaseTransaction;

use crate::{
    error::AppError,
    model::{
        player::Player,
        settings::BotSettings,
        task::{Subject, TaskKind},
        tracked_message::TrackedMessageKind,
    },
};

use super::{Cascade, TaskHandler};

impl TaskHandler {
    pub(super) async fn handle_create(
        &self,
        txn: &DatabaseTransaction,
        subject: Subject,
        cascade: &mut Cascade<'_>,
    ) -> Result<(), AppError> {
        match subject {
            Subject::Player(player_id) => {
                let Some(player) = self.find_player(txn, player_id).await? else {
                    return Ok(());
                };
                let settings = self.settings_snapshot().await;

                for kind in [TrackedMessageKind::Dossier, TrackedMessageKind::Statistic] {
                    self.create_player_message(txn, kind, &player, &settings)
                        .await?;
                }

                Ok(())
            }
            Subject::Unit(unit_id) => self.refresh_unit_owner(txn, unit_id, cascade).await,
            Subject::PlayerUpgrade(upgrade_id) => {
                self.refresh_upgrade_owner(txn, upgrade_id, cascade).await
            }
            Subject::Dossier(_) | Subject::Statistic(_) => {
                tracing::debug!("Ignoring {} task for {}", TaskKind::Create, subject);
                Ok(())
            }
        }
    }

    /// Posts one of a player's messages unless a live one already exists.
    ///
    /// # Returns
    /// - `Ok(())` - Message posted, already present, or channel not configured/resolvable
    /// - `Err(AppError)` - Database or Discord failure
    async fn create_player_message(
        &self,
        txn: &DatabaseTransaction,
        kind: TrackedMessageKind,
        player: &Player,
        settings: &BotSettings,
    ) -> Result<(), AppError> {
        let Some(channel_id) = Self::channel_for(kind, settings) else {
            return Ok(());
        };

        if !self.gateway.channel_exists(channel_id).await? {
            tracing::error!(
                "The {} channel {} cannot be resolved, skipping {} creation for player {}",
                kind,
                channel_id,
                kind,
                player.id
            );
            return Ok(());
        }

        if let Some(existing) = self.find_tracked(txn, kind, player.id).await? {
            if self
                .gateway
                .message_exists(channel_id, existing.message_id)
                .await?
            {
                tracing::debug!(
                    "The {} message for player {} already exists, skipping creation",
                    kind,
                    player.id
                );
                return Ok(());
            }

            tracing::debug!(
                "The {} message {} for player {} is gone, posting a replacement",
                kind,
                existing.message_id,
                player.id
            );
        }

        let content = self.render(txn, kind, player, settings).await?;
        let message_id = self.gateway.send_message(channel_id, &content).await?;
        self.upsert_tracked(txn, kind, player.id, message_id).await?;

        tracing::debug!(
            "Created {} for player {} with message ID {}",
            kind,
            player.id,
            message_id
        );

        Ok(())
    }
}
