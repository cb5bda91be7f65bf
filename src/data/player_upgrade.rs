use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::model::unit::PlayerUpgrade;

pub struct PlayerUpgradeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlayerUpgradeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds an upgrade by primary key
    ///
    /// # Returns
    /// - `Ok(Some(PlayerUpgrade))`: The upgrade if found
    /// - `Ok(None)`: No upgrade with that ID
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_id(&self, id: i32) -> Result<Option<PlayerUpgrade>, DbErr> {
        let entity = entity::prelude::PlayerUpgrade::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(PlayerUpgrade::from_entity))
    }

    /// Gets all upgrades installed on a unit, in purchase order
    ///
    /// # Returns
    /// - `Ok(Vec<PlayerUpgrade>)`: The unit's upgrades, ordered by ID
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_unit_id(&self, unit_id: i32) -> Result<Vec<PlayerUpgrade>, DbErr> {
        let entities = entity::prelude::PlayerUpgrade::find()
            .filter(entity::player_upgrade::Column::UnitId.eq(unit_id))
            .order_by_asc(entity::player_upgrade::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(PlayerUpgrade::from_entity)
            .collect())
    }
}
