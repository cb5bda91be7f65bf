//! Medal factory for awarding medals to test players.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Awards a medal to a player.
///
/// # Arguments
/// - `db` - Database connection
/// - `player_id` - ID of the decorated player
/// - `name` - Medal name, matched against the medal emote table when rendering
///
/// # Returns
/// - `Ok(entity::medal::Model)` - Created medal entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_medal(
    db: &DatabaseConnection,
    player_id: i32,
    name: &str,
) -> Result<entity::medal::Model, DbErr> {
    entity::medal::ActiveModel {
        id: ActiveValue::NotSet,
        player_id: ActiveValue::Set(player_id),
        name: ActiveValue::Set(name.to_string()),
    }
    .insert(db)
    .await
}
