//! Domain model for Discord messages that mirror a player record.
//!
//! Dossier and statistic rows share the same shape: a player ID and the ID of the
//! Discord message the bot keeps in sync with that player.

use chrono::{DateTime, Utc};

use crate::{error::AppError, util::parse::parse_u64_from_string};

/// Which projection of a player a tracked message presents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackedMessageKind {
    /// Profile and medals, posted in the dossier channel.
    Dossier,
    /// Unit roster, posted in the statistics channel.
    Statistic,
}

impl std::fmt::Display for TrackedMessageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dossier => f.write_str("dossier"),
            Self::Statistic => f.write_str("statistics"),
        }
    }
}

/// A dossier or statistic row linking a player to a Discord message.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackedMessage {
    /// Unique identifier for the tracking row.
    pub id: i32,
    /// ID of the player this message presents.
    pub player_id: i32,
    /// Discord message ID.
    pub message_id: u64,
    /// Timestamp when the tracking row was created.
    pub created_at: DateTime<Utc>,
}

impl TrackedMessage {
    /// Converts a dossier entity model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(TrackedMessage)` - The converted tracked message
    /// - `Err(AppError::InternalError)` - Stored message ID is not a valid u64
    pub fn from_dossier(entity: entity::dossier::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            player_id: entity.player_id,
            message_id: parse_u64_from_string(entity.message_id)?,
            created_at: entity.created_at,
        })
    }

    /// Converts a statistic entity model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(TrackedMessage)` - The converted tracked message
    /// - `Err(AppError::InternalError)` - Stored message ID is not a valid u64
    pub fn from_statistic(entity: entity::statistic::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            player_id: entity.player_id,
            message_id: parse_u64_from_string(entity.message_id)?,
            created_at: entity.created_at,
        })
    }
}
