//! Task handlers for the queue consumer.
//!
//! `TaskHandler` routes a dequeued task to the create, update, delete or terminate
//! handler. Handlers always re-load their subject by primary key, so a task enqueued
//! before a row changed still acts on current state. Changes to units and upgrades
//! funnel upward into a player-level task, which makes the player the single point
//! where both the dossier and the statistics message are reconciled.
//!
//! Each task runs on its own database transaction with the lock-wait bound applied to it.

mod create;
mod delete;
mod terminate;
mod update;

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use std::{collections::HashSet, sync::Arc};

use crate::{
    bot::gateway::DiscordGateway,
    data::{
        dossier::DossierRepository, player::PlayerRepository,
        player_upgrade::PlayerUpgradeRepository, set_lock_timeout,
        statistic::StatisticRepository, unit::UnitRepository,
    },
    error::AppError,
    model::{
        player::Player,
        settings::{BotSettings, SharedSettings},
        task::{Subject, Task, TaskKind},
        tracked_message::{TrackedMessage, TrackedMessageKind},
    },
    queue::TaskQueue,
    service::player_message::PlayerMessageService,
};

/// What the consumer should do after a task was handled successfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerOutcome {
    Continue,
    /// Only produced by the terminate handler.
    Terminate,
}

/// Tasks enqueued by one handler invocation.
///
/// A handler may reach the same owning player through several paths; each
/// `(kind, subject)` pair is enqueued at most once per invocation.
pub struct Cascade<'q> {
    queue: &'q TaskQueue,
    enqueued: HashSet<(TaskKind, Subject)>,
}

impl<'q> Cascade<'q> {
    pub fn new(queue: &'q TaskQueue) -> Self {
        Self {
            queue,
            enqueued: HashSet::new(),
        }
    }

    /// Enqueues a fresh task unless this invocation already enqueued the same one.
    ///
    /// # Returns
    /// - `true` - Task was enqueued
    /// - `false` - Already enqueued by this invocation
    pub fn push(&mut self, kind: TaskKind, subject: Subject, reason: &str) -> bool {
        if !self.enqueued.insert((kind, subject)) {
            tracing::debug!("Already queued {} task for {} due to {}", kind, subject, reason);
            return false;
        }

        self.queue.enqueue(kind, subject);
        tracing::debug!("Queued {} task for {} due to {}", kind, subject, reason);

        true
    }
}

/// Routes tasks to their handlers.
///
/// Holds the collaborators every handler needs. The consumer owns a single instance and
/// calls [`handle`](Self::handle) for one task at a time.
pub struct TaskHandler {
    db: DatabaseConnection,
    gateway: Arc<dyn DiscordGateway>,
    settings: SharedSettings,
    queue: TaskQueue,
    lock_timeout_seconds: u64,
}

impl TaskHandler {
    /// Creates a new TaskHandler.
    ///
    /// # Arguments
    /// - `db` - Database connection shared by every task
    /// - `gateway` - Discord operations for posting, editing and deleting messages
    /// - `settings` - Channel configuration and medal emotes, read fresh for each task
    /// - `queue` - Producer handle for cascade tasks
    /// - `lock_timeout_seconds` - Lock-wait bound applied to each task's transaction
    pub fn new(
        db: DatabaseConnection,
        gateway: Arc<dyn DiscordGateway>,
        settings: SharedSettings,
        queue: TaskQueue,
        lock_timeout_seconds: u64,
    ) -> Self {
        Self {
            db,
            gateway,
            settings,
            queue,
            lock_timeout_seconds,
        }
    }

    /// Handles one task.
    ///
    /// # Returns
    /// - `Ok(HandlerOutcome::Continue)` - Task done (including subjects that no longer exist)
    /// - `Ok(HandlerOutcome::Terminate)` - Terminate task reached
    /// - `Err(AppError)` - Transient failure; the consumer retries the task
    pub async fn handle(&self, task: &Task) -> Result<HandlerOutcome, AppError> {
        let subject = match (task.kind, task.subject) {
            (TaskKind::Terminate, _) => return Ok(self.handle_terminate()),
            (_, Some(subject)) => subject,
            (kind, None) => {
                tracing::error!("{} task has no subject, skipping", kind);
                return Ok(HandlerOutcome::Continue);
            }
        };

        let txn = self.db.begin().await?;
        set_lock_timeout(&txn, self.lock_timeout_seconds).await?;

        let mut cascade = Cascade::new(&self.queue);
        let result = match task.kind {
            TaskKind::Create => self.handle_create(&txn, subject, &mut cascade).await,
            TaskKind::Update => self.handle_update(&txn, subject, &mut cascade).await,
            TaskKind::Delete => self.handle_delete(&txn, subject, &mut cascade).await,
            // Returned before the transaction was opened
            TaskKind::Terminate => Ok(()),
        };

        // Rows written before a failure point at messages that were already posted
        txn.commit().await?;
        result?;

        Ok(HandlerOutcome::Continue)
    }

    async fn settings_snapshot(&self) -> BotSettings {
        self.settings.read().await.clone()
    }

    async fn find_player(
        &self,
        txn: &DatabaseTransaction,
        player_id: i32,
    ) -> Result<Option<Player>, AppError> {
        let player = PlayerRepository::new(txn).find_by_id(player_id).await?;
        if player.is_none() {
            tracing::debug!("Player {} no longer exists, skipping", player_id);
        }

        Ok(player)
    }

    /// Enqueues an update for the player owning a unit.
    async fn refresh_unit_owner(
        &self,
        txn: &DatabaseTransaction,
        unit_id: i32,
        cascade: &mut Cascade<'_>,
    ) -> Result<(), AppError> {
        let Some(unit) = UnitRepository::new(txn).find_by_id(unit_id).await? else {
            tracing::debug!("Unit {} no longer exists, skipping", unit_id);
            return Ok(());
        };

        self.refresh_owner(txn, unit.player_id, &format!("unit {}", unit.id), cascade)
            .await
    }

    /// Enqueues an update for the player owning the unit an upgrade was bought for.
    async fn refresh_upgrade_owner(
        &self,
        txn: &DatabaseTransaction,
        upgrade_id: i32,
        cascade: &mut Cascade<'_>,
    ) -> Result<(), AppError> {
        let Some(upgrade) = PlayerUpgradeRepository::new(txn)
            .find_by_id(upgrade_id)
            .await?
        else {
            tracing::debug!("Upgrade {} no longer exists, skipping", upgrade_id);
            return Ok(());
        };

        let Some(unit) = UnitRepository::new(txn)
            .find_by_id(upgrade.unit_id)
            .await?
        else {
            tracing::error!(
                "Unit {} not found for upgrade {}",
                upgrade.unit_id,
                upgrade.id
            );
            return Ok(());
        };

        self.refresh_owner(
            txn,
            unit.player_id,
            &format!("upgrade {}", upgrade.id),
            cascade,
        )
        .await
    }

    async fn refresh_owner(
        &self,
        txn: &DatabaseTransaction,
        player_id: i32,
        reason: &str,
        cascade: &mut Cascade<'_>,
    ) -> Result<(), AppError> {
        if PlayerRepository::new(txn)
            .find_by_id(player_id)
            .await?
            .is_none()
        {
            tracing::error!("Player {} not found for {}", player_id, reason);
            return Ok(());
        }

        cascade.push(TaskKind::Update, Subject::Player(player_id), reason);

        Ok(())
    }

    fn channel_for(kind: TrackedMessageKind, settings: &BotSettings) -> Option<u64> {
        match kind {
            TrackedMessageKind::Dossier => settings.dossier_channel_id(),
            TrackedMessageKind::Statistic => settings.statistics_channel_id(),
        }
    }

    async fn find_tracked(
        &self,
        txn: &DatabaseTransaction,
        kind: TrackedMessageKind,
        player_id: i32,
    ) -> Result<Option<TrackedMessage>, AppError> {
        match kind {
            TrackedMessageKind::Dossier => {
                DossierRepository::new(txn)
                    .find_by_player_id(player_id)
                    .await
            }
            TrackedMessageKind::Statistic => {
                StatisticRepository::new(txn)
                    .find_by_player_id(player_id)
                    .await
            }
        }
    }

    async fn upsert_tracked(
        &self,
        txn: &DatabaseTransaction,
        kind: TrackedMessageKind,
        player_id: i32,
        message_id: u64,
    ) -> Result<TrackedMessage, AppError> {
        match kind {
            TrackedMessageKind::Dossier => {
                DossierRepository::new(txn)
                    .upsert(player_id, message_id)
                    .await
            }
            TrackedMessageKind::Statistic => {
                StatisticRepository::new(txn)
                    .upsert(player_id, message_id)
                    .await
            }
        }
    }

    async fn render(
        &self,
        txn: &DatabaseTransaction,
        kind: TrackedMessageKind,
        player: &Player,
        settings: &BotSettings,
    ) -> Result<String, AppError> {
        let service = PlayerMessageService::new(txn, self.gateway.as_ref());
        match kind {
            TrackedMessageKind::Dossier => {
                service
                    .dossier_content(player, &settings.medal_emotes)
                    .await
            }
            TrackedMessageKind::Statistic => service.statistics_content(player).await,
        }
    }
}
