use crate::data::bot_config::BotConfigRepository;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use serde_json::json;
use test_utils::builder::TestBuilder;

/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_key() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BotConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BotConfigRepository::new(db);

    assert_eq!(repo.get("BOT_CONFIG").await?, None);

    Ok(())
}

/// Tests storing a document and then replacing it under the same key.
///
/// Expected: Ok with one row holding the latest value
#[tokio::test]
async fn upsert_replaces_existing_value() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BotConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BotConfigRepository::new(db);
    repo.upsert("BOT_CONFIG", json!({ "dossier_channel_id": 1 }))
        .await?;
    repo.upsert("BOT_CONFIG", json!({ "dossier_channel_id": 2 }))
        .await?;

    assert_eq!(
        repo.get("BOT_CONFIG").await?,
        Some(json!({ "dossier_channel_id": 2 }))
    );
    assert_eq!(entity::prelude::BotConfig::find().count(db).await?, 1);

    Ok(())
}

/// Expected: Ok with each key holding its own document
#[tokio::test]
async fn keys_are_independent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BotConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BotConfigRepository::new(db);
    repo.upsert("BOT_CONFIG", json!({})).await?;
    repo.upsert("MEDAL_EMOTES", json!({ "FCM": ["a", "b", "c"] }))
        .await?;

    assert_eq!(repo.get("BOT_CONFIG").await?, Some(json!({})));
    assert_eq!(
        repo.get("MEDAL_EMOTES").await?,
        Some(json!({ "FCM": ["a", "b", "c"] }))
    );

    Ok(())
}
