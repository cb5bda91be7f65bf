//! Player factory for creating test player entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test players with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let player = PlayerFactory::new(&db)
///     .discord_id("123456789")
///     .name("Kestrel")
///     .rec_points(12)
///     .build()
///     .await?;
/// ```
pub struct PlayerFactory<'a> {
    db: &'a DatabaseConnection,
    discord_id: String,
    name: String,
    lore: Option<String>,
    rec_points: i32,
    bonus_pay: i32,
}

impl<'a> PlayerFactory<'a> {
    /// Creates a new PlayerFactory with default values.
    ///
    /// Defaults:
    /// - discord_id: `"{id}"` where id is auto-incremented
    /// - name: `"Player {id}"`
    /// - lore: `None`
    /// - rec_points: `0`
    /// - bonus_pay: `0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            discord_id: id.to_string(),
            name: format!("Player {}", id),
            lore: None,
            rec_points: 0,
            bonus_pay: 0,
        }
    }

    pub fn discord_id(mut self, discord_id: impl Into<String>) -> Self {
        self.discord_id = discord_id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn lore(mut self, lore: Option<&str>) -> Self {
        self.lore = lore.map(str::to_string);
        self
    }

    pub fn rec_points(mut self, rec_points: i32) -> Self {
        self.rec_points = rec_points;
        self
    }

    pub fn bonus_pay(mut self, bonus_pay: i32) -> Self {
        self.bonus_pay = bonus_pay;
        self
    }

    /// Builds and inserts the player entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::player::Model)` - Created player entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::player::Model, DbErr> {
        entity::player::ActiveModel {
            id: ActiveValue::NotSet,
            discord_id: ActiveValue::Set(self.discord_id),
            name: ActiveValue::Set(self.name),
            lore: ActiveValue::Set(self.lore),
            rec_points: ActiveValue::Set(self.rec_points),
            bonus_pay: ActiveValue::Set(self.bonus_pay),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a player with default values.
///
/// Shorthand for `PlayerFactory::new(db).build().await`.
pub async fn create_player(db: &DatabaseConnection) -> Result<entity::player::Model, DbErr> {
    PlayerFactory::new(db).build().await
}
