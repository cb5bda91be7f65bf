use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

pub struct MedalRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MedalRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the names of all medals awarded to a player, in award order
    ///
    /// # Returns
    /// - `Ok(Vec<String>)`: Medal names, possibly with repeats
    /// - `Err(DbErr)`: Database error
    pub async fn get_names_by_player_id(&self, player_id: i32) -> Result<Vec<String>, DbErr> {
        let medals = entity::prelude::Medal::find()
            .filter(entity::medal::Column::PlayerId.eq(player_id))
            .order_by_asc(entity::medal::Column::Id)
            .all(self.db)
            .await?;

        Ok(medals.into_iter().map(|medal| medal.name).collect())
    }
}
