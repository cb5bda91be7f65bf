//! Factories for dossier and statistic tracking rows.
//!
//! Both rows record which Discord message presents a player. Message IDs are passed as
//! numbers and stored as strings, matching how the repositories persist them.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a dossier row pointing a player at a Discord message.
///
/// # Returns
/// - `Ok(entity::dossier::Model)` - Created dossier entity
/// - `Err(DbErr)` - Database error during insert, including a duplicate player
pub async fn create_dossier(
    db: &DatabaseConnection,
    player_id: i32,
    message_id: u64,
) -> Result<entity::dossier::Model, DbErr> {
    entity::dossier::ActiveModel {
        id: ActiveValue::NotSet,
        player_id: ActiveValue::Set(player_id),
        message_id: ActiveValue::Set(message_id.to_string()),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}

/// Creates a statistic row pointing a player at a Discord message.
///
/// # Returns
/// - `Ok(entity::statistic::Model)` - Created statistic entity
/// - `Err(DbErr)` - Database error during insert, including a duplicate player
pub async fn create_statistic(
    db: &DatabaseConnection,
    player_id: i32,
    message_id: u64,
) -> Result<entity::statistic::Model, DbErr> {
    entity::statistic::ActiveModel {
        id: ActiveValue::NotSet,
        player_id: ActiveValue::Set(player_id),
        message_id: ActiveValue::Set(message_id.to_string()),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
