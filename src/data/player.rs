use sea_orm::{ConnectionTrait, EntityTrait};

use crate::{error::AppError, model::player::Player};

pub struct PlayerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlayerRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a player by primary key
    ///
    /// # Returns
    /// - `Ok(Some(Player))`: The player if found
    /// - `Ok(None)`: No player with that ID
    /// - `Err(AppError)`: Database error or invalid stored Discord ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Player>, AppError> {
        entity::prelude::Player::find_by_id(id)
            .one(self.db)
            .await?
            .map(Player::from_entity)
            .transpose()
    }
}
