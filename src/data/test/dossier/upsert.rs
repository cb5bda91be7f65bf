use super::*;

/// Tests creating a dossier row for a player without one.
///
/// Expected: Ok with a new row pointing at the message
#[tokio::test]
async fn creates_new_record() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let player = factory::create_player(db).await?;

    let repo = DossierRepository::new(db);
    let dossier = repo.upsert(player.id, 987654321).await?;

    assert_eq!(dossier.player_id, player.id);
    assert_eq!(dossier.message_id, 987654321);

    let stored = entity::prelude::Dossier::find_by_id(dossier.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.message_id, "987654321");

    Ok(())
}

/// Tests that upserting for a player with a stale row repoints that row.
///
/// A player keeps exactly one dossier row even after its message is replaced.
///
/// Expected: Ok with the same row ID and the new message ID
#[tokio::test]
async fn replaces_stale_record() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let player = factory::create_player(db).await?;
    let stale = factory::create_dossier(db, player.id, 111111111).await?;

    let repo = DossierRepository::new(db);
    let updated = repo.upsert(player.id, 222222222).await?;

    assert_eq!(updated.id, stale.id);
    assert_eq!(updated.message_id, 222222222);

    let count = entity::prelude::Dossier::find()
        .filter(entity::dossier::Column::PlayerId.eq(player.id))
        .count(db)
        .await?;
    assert_eq!(count, 1);

    Ok(())
}
