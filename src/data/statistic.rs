//! Statistic data repository for database operations.
//!
//! This module provides the `StatisticRepository` for managing statistic records. A statistic
//! row links a player to the Discord message in the statistics channel that lists their
//! unit roster. The `player_id` column is unique, so a player has at most one row.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
};

use crate::{error::AppError, model::tracked_message::TrackedMessage};

/// Repository providing database operations for statistic tracking rows.
pub struct StatisticRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StatisticRepository<'a, C> {
    /// Creates a new StatisticRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `StatisticRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a statistic row by its primary key.
    ///
    /// # Returns
    /// - `Ok(Some(TrackedMessage))` - Statistic row found
    /// - `Ok(None)` - No statistic row with that ID
    /// - `Err(AppError)` - Database error or invalid stored message ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<TrackedMessage>, AppError> {
        entity::prelude::Statistic::find_by_id(id)
            .one(self.db)
            .await?
            .map(TrackedMessage::from_statistic)
            .transpose()
    }

    /// Finds the statistic row for a player.
    ///
    /// # Arguments
    /// - `player_id` - ID of the player
    ///
    /// # Returns
    /// - `Ok(Some(TrackedMessage))` - The player's statistic row
    /// - `Ok(None)` - The player has no statistic row
    /// - `Err(AppError)` - Database error or invalid stored message ID
    pub async fn find_by_player_id(
        &self,
        player_id: i32,
    ) -> Result<Option<TrackedMessage>, AppError> {
        entity::prelude::Statistic::find()
            .filter(entity::statistic::Column::PlayerId.eq(player_id))
            .one(self.db)
            .await?
            .map(TrackedMessage::from_statistic)
            .transpose()
    }

    /// Creates or repoints the statistic row for a player.
    ///
    /// If the player already has a statistic row (for example one whose message was
    /// deleted out-of-band), that row is updated to the new message ID instead of a
    /// second row being inserted.
    ///
    /// # Arguments
    /// - `player_id` - ID of the player
    /// - `message_id` - Discord message ID of the posted statistic
    ///
    /// # Returns
    /// - `Ok(TrackedMessage)` - The created or updated statistic row
    /// - `Err(AppError)` - Database error during upsert
    pub async fn upsert(&self, player_id: i32, message_id: u64) -> Result<TrackedMessage, AppError> {
        let existing = entity::prelude::Statistic::find()
            .filter(entity::statistic::Column::PlayerId.eq(player_id))
            .one(self.db)
            .await?;

        let entity = if let Some(existing) = existing {
            let mut active: entity::statistic::ActiveModel = existing.into();
            active.message_id = ActiveValue::Set(message_id.to_string());
            active.update(self.db).await?
        } else {
            entity::statistic::ActiveModel {
                id: ActiveValue::NotSet,
                player_id: ActiveValue::Set(player_id),
                message_id: ActiveValue::Set(message_id.to_string()),
                created_at: ActiveValue::Set(Utc::now()),
            }
            .insert(self.db)
            .await?
        };

        TrackedMessage::from_statistic(entity)
    }

    /// Deletes a statistic row.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted (0 if it was already gone)
    /// - `Err(AppError)` - Database error
    pub async fn delete(&self, id: i32) -> Result<u64, AppError> {
        let result = entity::prelude::Statistic::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
