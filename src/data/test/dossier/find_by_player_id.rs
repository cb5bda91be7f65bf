use super::*;

/// Expected: Ok(Some) with the parsed message ID
#[tokio::test]
async fn finds_existing_record() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let player = factory::create_player(db).await?;
    factory::create_dossier(db, player.id, 555).await?;

    let repo = DossierRepository::new(db);
    let dossier = repo.find_by_player_id(player.id).await?;

    assert_eq!(dossier.map(|d| d.message_id), Some(555));

    Ok(())
}

/// Expected: Ok(None) for a player that was never posted
#[tokio::test]
async fn returns_none_without_record() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let player = factory::create_player(db).await?;

    let repo = DossierRepository::new(db);

    assert!(repo.find_by_player_id(player.id).await?.is_none());

    Ok(())
}

/// Tests that a corrupted message ID surfaces as an error instead of a bogus ID.
///
/// Expected: Err(AppError::InternalError)
#[tokio::test]
async fn fails_on_invalid_stored_message_id() -> Result<(), AppError> {
    use sea_orm::{ActiveModelTrait, ActiveValue};

    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let player = factory::create_player(db).await?;
    entity::dossier::ActiveModel {
        id: ActiveValue::NotSet,
        player_id: ActiveValue::Set(player.id),
        message_id: ActiveValue::Set("not-a-snowflake".to_string()),
        created_at: ActiveValue::Set(chrono::Utc::now()),
    }
    .insert(db)
    .await?;

    let repo = DossierRepository::new(db);
    let result = repo.find_by_player_id(player.id).await;

    assert!(matches!(result, Err(AppError::InternalError(_))));

    Ok(())
}
