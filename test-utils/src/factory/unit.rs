//! Unit factory for creating test unit entities.

use crate::factory::helpers::next_id;
use entity::unit::UnitStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test units with customizable fields.
pub struct UnitFactory<'a> {
    db: &'a DatabaseConnection,
    player_id: i32,
    name: String,
    unit_type: String,
    status: UnitStatus,
    callsign: Option<String>,
}

impl<'a> UnitFactory<'a> {
    /// Creates a new UnitFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Unit {id}"` where id is auto-incremented
    /// - unit_type: `"INFANTRY"`
    /// - status: `UnitStatus::Active`
    /// - callsign: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `player_id` - ID of the owning player
    pub fn new(db: &'a DatabaseConnection, player_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            player_id,
            name: format!("Unit {}", id),
            unit_type: "INFANTRY".to_string(),
            status: UnitStatus::Active,
            callsign: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn unit_type(mut self, unit_type: impl Into<String>) -> Self {
        self.unit_type = unit_type.into();
        self
    }

    pub fn status(mut self, status: UnitStatus) -> Self {
        self.status = status;
        self
    }

    pub fn callsign(mut self, callsign: Option<&str>) -> Self {
        self.callsign = callsign.map(str::to_string);
        self
    }

    /// Builds and inserts the unit entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::unit::Model)` - Created unit entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::unit::Model, DbErr> {
        entity::unit::ActiveModel {
            id: ActiveValue::NotSet,
            player_id: ActiveValue::Set(self.player_id),
            name: ActiveValue::Set(self.name),
            unit_type: ActiveValue::Set(self.unit_type),
            status: ActiveValue::Set(self.status),
            callsign: ActiveValue::Set(self.callsign),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active unit with default values for a player.
pub async fn create_unit(
    db: &DatabaseConnection,
    player_id: i32,
) -> Result<entity::unit::Model, DbErr> {
    UnitFactory::new(db, player_id).build().await
}
