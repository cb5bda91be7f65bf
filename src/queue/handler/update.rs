//! Update handler.
//!
//! Re-renders a player's tracked messages in place. A player whose message or tracking
//! row is missing gets a create task instead of an edit.

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
    pub(super) async fn handle_update(
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
                    self.update_player_message(txn, kind, &player, &settings, cascade)
                        .await?;
                }

                Ok(())
            }
            Subject::Unit(unit_id) => self.refresh_unit_owner(txn, unit_id, cascade).await,
            Subject::PlayerUpgrade(upgrade_id) => {
                self.refresh_upgrade_owner(txn, upgrade_id, cascade).await
            }
            Subject::Dossier(_) | Subject::Statistic(_) => {
                tracing::debug!("Ignoring {} task for {}", TaskKind::Update, subject);
                Ok(())
            }
        }
    }

    async fn update_player_message(
        &self,
        txn: &DatabaseTransaction,
        kind: TrackedMessageKind,
        player: &Player,
        settings: &BotSettings,
        cascade: &mut Cascade<'_>,
    ) -> Result<(), AppError> {
        let player_subject = Subject::Player(player.id);

        let Some(tracked) = self.find_tracked(txn, kind, player.id).await? else {
            cascade.push(
                TaskKind::Create,
                player_subject,
                &format!("missing {} row", kind),
            );
            return Ok(());
        };

        let Some(channel_id) = Self::channel_for(kind, settings) else {
            tracing::debug!(
                "No {} channel configured, skipping {} update for player {}",
                kind,
                kind,
                player.id
            );
            return Ok(());
        };

        if !self.gateway.channel_exists(channel_id).await? {
            tracing::error!(
                "No channel found for {} message of player {}, skipping",
                kind,
                player.id
            );
            return Ok(());
        }

        if !self
            .gateway
            .message_exists(channel_id, tracked.message_id)
            .await?
        {
            cascade.push(
                TaskKind::Create,
                player_subject,
                &format!("deleted {} message", kind),
            );
            return Ok(());
        }

        let content = self.render(txn, kind, player, settings).await?;
        self.gateway
            .edit_message(channel_id, tracked.message_id, &content)
            .await?;

        tracing::debug!(
            "Updated {} for player {} with message ID {}",
            kind,
            player.id,
            tracked.message_id
        );

        Ok(())
    }
}
