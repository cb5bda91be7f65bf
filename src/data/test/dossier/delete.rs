use super::*;

/// Expected: Ok(1) and the row is gone
#[tokio::test]
async fn deletes_existing_record() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let player = factory::create_player(db).await?;
    let dossier = factory::create_dossier(db, player.id, 42).await?;

    let repo = DossierRepository::new(db);
    let deleted = repo.delete(dossier.id).await?;

    assert_eq!(deleted, 1);
    assert!(repo.find_by_id(dossier.id).await?.is_none());

    Ok(())
}

/// Tests deleting a row that was already removed.
///
/// Expected: Ok(0)
#[tokio::test]
async fn deleting_missing_record_is_noop() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DossierRepository::new(db);

    assert_eq!(repo.delete(999).await?, 0);

    Ok(())
}
