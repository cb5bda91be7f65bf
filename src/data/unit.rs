use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::model::unit::Unit;

pub struct UnitRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UnitRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a unit by primary key
    ///
    /// # Returns
    /// - `Ok(Some(Unit))`: The unit if found
    /// - `Ok(None)`: No unit with that ID
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Unit>, DbErr> {
        let entity = entity::prelude::Unit::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Unit::from_entity))
    }

    /// Gets all units owned by a player, oldest first
    ///
    /// # Returns
    /// - `Ok(Vec<Unit>)`: The player's units, ordered by ID
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_player_id(&self, player_id: i32) -> Result<Vec<Unit>, DbErr> {
        let entities = entity::prelude::Unit::find()
            .filter(entity::unit::Column::PlayerId.eq(player_id))
            .order_by_asc(entity::unit::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Unit::from_entity).collect())
    }
}
