//! Upgrade factory for creating test player upgrade entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an upgrade named `"Upgrade {id}"` on a unit.
pub async fn create_player_upgrade(
    db: &DatabaseConnection,
    unit_id: i32,
) -> Result<entity::player_upgrade::Model, DbErr> {
    create_player_upgrade_named(db, unit_id, &format!("Upgrade {}", next_id())).await
}

/// Creates an upgrade with a specific name on a unit.
///
/// # Arguments
/// - `db` - Database connection
/// - `unit_id` - ID of the unit the upgrade was bought for
/// - `name` - Upgrade name as shown on the statistics message
///
/// # Returns
/// - `Ok(entity::player_upgrade::Model)` - Created upgrade entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_player_upgrade_named(
    db: &DatabaseConnection,
    unit_id: i32,
    name: &str,
) -> Result<entity::player_upgrade::Model, DbErr> {
    entity::player_upgrade::ActiveModel {
        id: ActiveValue::NotSet,
        unit_id: ActiveValue::Set(unit_id),
        name: ActiveValue::Set(name.to_string()),
    }
    .insert(db)
    .await
}
