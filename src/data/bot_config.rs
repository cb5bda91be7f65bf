use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter,
};
use serde_json::Value;

/// Key/value store for persisted bot settings.
///
/// Each key holds a single JSON document.
pub struct BotConfigRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BotConfigRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the JSON document stored under a key
    ///
    /// # Returns
    /// - `Ok(Some(Value))`: The stored document
    /// - `Ok(None)`: Nothing stored under that key
    /// - `Err(DbErr)`: Database error
    pub async fn get(&self, key: &str) -> Result<Option<Value>, DbErr> {
        let row = entity::prelude::BotConfig::find()
            .filter(entity::bot_config::Column::Key.eq(key))
            .one(self.db)
            .await?;

        Ok(row.map(|row| row.value))
    }

    /// Stores a JSON document under a key, replacing any existing value
    pub async fn upsert(&self, key: &str, value: Value) -> Result<(), DbErr> {
        let existing = entity::prelude::BotConfig::find()
            .filter(entity::bot_config::Column::Key.eq(key))
            .one(self.db)
            .await?;

        if let Some(existing) = existing {
            let mut active: entity::bot_config::ActiveModel = existing.into();
            active.value = ActiveValue::Set(value);
            active.update(self.db).await?;
        } else {
            entity::bot_config::ActiveModel {
                id: ActiveValue::NotSet,
                key: ActiveValue::Set(key.to_string()),
                value: ActiveValue::Set(value),
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }
}
