//! Loading and saving persisted bot settings.
//!
//! Settings live in the `bot_config` table as one JSON document per key. The channel
//! configuration is stored under [`BOT_CONFIG_KEY`] and the medal emote table under
//! [`MEDAL_EMOTES_KEY`]. Missing documents are written with defaults the first time the
//! bot loads them, so an operator can edit them in place afterwards.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    data::bot_config::BotConfigRepository,
    error::AppError,
    model::settings::{BotSettings, ChannelConfig},
    service::medal_emotes::default_medal_emotes,
};

pub const BOT_CONFIG_KEY: &str = "BOT_CONFIG";
pub const MEDAL_EMOTES_KEY: &str = "MEDAL_EMOTES";

pub struct BotSettingsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BotSettingsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads bot settings, seeding any missing document with its default.
    ///
    /// # Returns
    /// - `Ok(BotSettings)` - Channel configuration and medal emote table
    /// - `Err(AppError::DbErr)` - Failed to read or seed a document
    /// - `Err(AppError::SerdeErr)` - A stored document has the wrong shape
    pub async fn load(&self) -> Result<BotSettings, AppError> {
        let channels = self
            .load_or_seed(BOT_CONFIG_KEY, ChannelConfig::default)
            .await?;
        let medal_emotes = self
            .load_or_seed(MEDAL_EMOTES_KEY, default_medal_emotes)
            .await?;

        tracing::info!(
            "Loaded bot settings: dossier channel {:?}, statistics channel {:?}, {} medal emotes",
            channels.dossier_channel_id,
            channels.statistics_channel_id,
            medal_emotes.len()
        );

        Ok(BotSettings::new(channels, medal_emotes))
    }

    /// Writes both settings documents back to the database.
    ///
    /// # Returns
    /// - `Ok(())` - Both documents saved
    /// - `Err(AppError)` - Serialization or database error
    pub async fn persist(&self, settings: &BotSettings) -> Result<(), AppError> {
        let repo = BotConfigRepository::new(self.db);

        repo.upsert(BOT_CONFIG_KEY, serde_json::to_value(&settings.channels)?)
            .await?;
        repo.upsert(MEDAL_EMOTES_KEY, serde_json::to_value(&settings.medal_emotes)?)
            .await?;

        tracing::debug!("Persisted bot settings");

        Ok(())
    }

    async fn load_or_seed<T, F>(&self, key: &str, default: F) -> Result<T, AppError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> T,
    {
        let repo = BotConfigRepository::new(self.db);

        if let Some(value) = repo.get(key).await? {
            return Ok(serde_json::from_value(value)?);
        }

        tracing::info!("No {} setting found, writing defaults", key);

        let value = default();
        repo.upsert(key, serde_json::to_value(&value)?).await?;

        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_utils::builder::TestBuilder;

    #[tokio::test]
    async fn seeds_defaults_on_first_load() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::BotConfig)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let settings = BotSettingsService::new(db).load().await?;

        assert_eq!(settings.dossier_channel_id(), None);
        assert_eq!(settings.statistics_channel_id(), None);
        assert_eq!(settings.medal_emotes, default_medal_emotes());

        let repo = BotConfigRepository::new(db);
        assert_eq!(repo.get(BOT_CONFIG_KEY).await?, Some(json!({})));
        assert!(repo.get(MEDAL_EMOTES_KEY).await?.is_some());

        Ok(())
    }

    #[tokio::test]
    async fn loads_stored_documents() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::BotConfig)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let repo = BotConfigRepository::new(db);
        repo.upsert(
            BOT_CONFIG_KEY,
            json!({ "dossier_channel_id": 11, "statistics_channel_id": 22 }),
        )
        .await?;
        repo.upsert(MEDAL_EMOTES_KEY, json!({ "FCM": ["<a>", "<b>", "<c>"] }))
            .await?;

        let settings = BotSettingsService::new(db).load().await?;

        assert_eq!(settings.dossier_channel_id(), Some(11));
        assert_eq!(settings.statistics_channel_id(), Some(22));
        assert_eq!(settings.medal_emotes.len(), 1);
        assert_eq!(settings.medal_emotes.token("FCM").as_deref(), Some("<a><b><c>"));

        Ok(())
    }

    /// Runtime changes survive a persist followed by a fresh load.
    #[tokio::test]
    async fn persist_round_trips_runtime_changes() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::BotConfig)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let service = BotSettingsService::new(db);

        let mut settings = service.load().await?;
        settings.set_dossier_channel(Some(5));
        settings.remove_medal_emote("FCM");
        service.persist(&settings).await?;

        let reloaded = service.load().await?;

        assert_eq!(reloaded, settings);
        assert!(!reloaded.medal_emotes.contains("FCM"));

        Ok(())
    }

    #[tokio::test]
    async fn rejects_malformed_document() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::BotConfig)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        BotConfigRepository::new(db)
            .upsert(MEDAL_EMOTES_KEY, json!({ "FCM": "not-a-triple" }))
            .await
            .unwrap();

        let result = BotSettingsService::new(db).load().await;

        assert!(matches!(result, Err(AppError::SerdeErr(_))));
    }
}
