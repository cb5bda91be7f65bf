//! Delete handler.
//!
//! Removes a tracked Discord message together with its tracking row. Producers enqueue
//! a delete task for the dossier or statistic row rather than removing the row themselves.

use dioxus_logger::tracing;
use sea_orm::DatabaseTransaction;

use crate::{
    data::{dossier::DossierRepository, statistic::StatisticRepository},
    error::AppError,
    model::{
        task::{Subject, TaskKind},
        tracked_message::{TrackedMessage, TrackedMessageKind},
    },
};

use super::{Cascade, TaskHandler};

impl TaskHandler {
    pub(super) async fn handle_delete(
        &self,
        txn: &DatabaseTransaction,
        subject: Subject,
        cascade: &mut Cascade<'_>,
    ) -> Result<(), AppError> {
        match subject {
            Subject::Dossier(id) => {
                self.delete_tracked(txn, TrackedMessageKind::Dossier, id)
                    .await
            }
            Subject::Statistic(id) => {
                self.delete_tracked(txn, TrackedMessageKind::Statistic, id)
                    .await
            }
            Subject::Unit(unit_id) => {
                // Unit deletions do not refresh the owning player's messages
                tracing::debug!("Unit {} deleted, skipping player refresh", unit_id);
                Ok(())
            }
            Subject::PlayerUpgrade(upgrade_id) => {
                self.refresh_upgrade_owner(txn, upgrade_id, cascade).await
            }
            Subject::Player(_) => {
                tracing::debug!("No {} action for {}", TaskKind::Delete, subject);
                Ok(())
            }
        }
    }

    async fn delete_tracked(
        &self,
        txn: &DatabaseTransaction,
        kind: TrackedMessageKind,
        id: i32,
    ) -> Result<(), AppError> {
        let Some(tracked) = self.find_tracked_by_id(txn, kind, id).await? else {
            tracing::debug!("The {} row {} was already removed", kind, id);
            return Ok(());
        };

        let settings = self.settings_snapshot().await;
        match Self::channel_for(kind, &settings) {
            Some(channel_id) if self.gateway.channel_exists(channel_id).await? => {
                if self
                    .gateway
                    .message_exists(channel_id, tracked.message_id)
                    .await?
                {
                    self.gateway
                        .delete_message(channel_id, tracked.message_id)
                        .await?;
                    tracing::debug!(
                        "Deleted {} message ID {} for player {}",
                        kind,
                        tracked.message_id,
                        tracked.player_id
                    );
                }
            }
            _ => {
                tracing::debug!(
                    "The {} channel cannot be resolved, removing row {} only",
                    kind,
                    id
                );
            }
        }

        match kind {
            TrackedMessageKind::Dossier => DossierRepository::new(txn).delete(id).await?,
            TrackedMessageKind::Statistic => StatisticRepository::new(txn).delete(id).await?,
        };

        Ok(())
    }

    async fn find_tracked_by_id(
        &self,
        txn: &DatabaseTransaction,
        kind: TrackedMessageKind,
        id: i32,
    ) -> Result<Option<TrackedMessage>, AppError> {
        match kind {
            TrackedMessageKind::Dossier => DossierRepository::new(txn).find_by_id(id).await,
            TrackedMessageKind::Statistic => {
                StatisticRepository::new(txn).find_by_id(id).await
            }
        }
    }
}
