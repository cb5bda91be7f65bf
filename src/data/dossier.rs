//! Dossier data repository for database operations.
//!
//! This module provides the `DossierRepository` for managing dossier records. A dossier
//! row links a player to the Discord message in the dossier channel that presents their
//! profile and medals. The `player_id` column is unique, so a player has at most one row.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
};

use crate::{error::AppError, model::tracked_message::TrackedMessage};

/// Repository providing database operations for dossier tracking rows.
pub struct DossierRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DossierRepository<'a, C> {
    /// Creates a new DossierRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `DossierRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a dossier row by its primary key.
    ///
    /// # Returns
    /// - `Ok(Some(TrackedMessage))` - Dossier row found
    /// - `Ok(None)` - No dossier row with that ID
    /// - `Err(AppError)` - Database error or invalid stored message ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<TrackedMessage>, AppError> {
        entity::prelude::Dossier::find_by_id(id)
            .one(self.db)
            .await?
            .map(TrackedMessage::from_dossier)
            .transpose()
    }

    /// Finds the dossier row for a player.
    ///
    /// # Arguments
    /// - `player_id` - ID of the player
    ///
    /// # Returns
    /// - `Ok(Some(TrackedMessage))` - The player's dossier row
    /// - `Ok(None)` - The player has no dossier row
    /// - `Err(AppError)` - Database error or invalid stored message ID
    pub async fn find_by_player_id(
        &self,
        player_id: i32,
    ) -> Result<Option<TrackedMessage>, AppError> {
        entity::prelude::Dossier::find()
            .filter(entity::dossier::Column::PlayerId.eq(player_id))
            .one(self.db)
            .await?
            .map(TrackedMessage::from_dossier)
            .transpose()
    }

    /// Creates or repoints the dossier row for a player.
    ///
    /// If the player already has a dossier row (for example one whose message was
    /// deleted out-of-band), that row is updated to the new message ID instead of a
    /// second row being inserted.
    ///
    /// # Arguments
    /// - `player_id` - ID of the player
    /// - `message_id` - Discord message ID of the posted dossier
    ///
    /// # Returns
    /// - `Ok(TrackedMessage)` - The created or updated dossier row
    /// - `Err(AppError)` - Database error during upsert
    pub async fn upsert(&self, player_id: i32, message_id: u64) -> Result<TrackedMessage, AppError> {
        let existing = entity::prelude::Dossier::find()
            .filter(entity::dossier::Column::PlayerId.eq(player_id))
            .one(self.db)
            .await?;

        let entity = if let Some(existing) = existing {
            let mut active: entity::dossier::ActiveModel = existing.into();
            active.message_id = ActiveValue::Set(message_id.to_string());
            active.update(self.db).await?
        } else {
            entity::dossier::ActiveModel {
                id: ActiveValue::NotSet,
                player_id: ActiveValue::Set(player_id),
                message_id: ActiveValue::Set(message_id.to_string()),
                created_at: ActiveValue::Set(Utc::now()),
            }
            .insert(self.db)
            .await?
        };

        TrackedMessage::from_dossier(entity)
    }

    /// Deletes a dossier row.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted (0 if it was already gone)
    /// - `Err(AppError)` - Database error
    pub async fn delete(&self, id: i32) -> Result<u64, AppError> {
        let result = entity::prelude::Dossier::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
