//! Domain models for players.

use crate::{error::AppError, util::parse::parse_u64_from_string};

/// A Meta Campaign player, keyed by their Discord account.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: i32,
    /// Discord user ID of the account that owns this player record.
    pub discord_id: u64,
    pub name: String,
    pub lore: Option<String>,
    /// Requisition points available to spend.
    pub rec_points: i32,
    pub bonus_pay: i32,
}

impl Player {
    /// Converts an entity model to a player domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Player)` - The converted player
    /// - `Err(AppError::InternalError)` - Stored Discord ID is not a valid u64
    pub fn from_entity(entity: entity::player::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            discord_id: parse_u64_from_string(entity.discord_id)?,
            name: entity.name,
            lore: entity.lore,
            rec_points: entity.rec_points,
            bonus_pay: entity.bonus_pay,
        })
    }
}
