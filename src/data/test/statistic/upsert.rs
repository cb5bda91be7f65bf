use super::*;

/// Tests creating a statistic row for a player without one.
///
/// Expected: Ok with a new row that can be found by player
#[tokio::test]
async fn creates_new_record() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let player = factory::create_player(db).await?;

    let repo = StatisticRepository::new(db);
    let created = repo.upsert(player.id, 31337).await?;
    let found = repo.find_by_player_id(player.id).await?;

    assert_eq!(found, Some(created));

    Ok(())
}

/// Tests that a stale statistic row is repointed rather than duplicated.
///
/// Expected: Ok with the original row ID and the new message ID
#[tokio::test]
async fn replaces_stale_record() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let player = factory::create_player(db).await?;
    let stale = factory::create_statistic(db, player.id, 1).await?;

    let repo = StatisticRepository::new(db);
    let updated = repo.upsert(player.id, 2).await?;

    assert_eq!(updated.id, stale.id);
    assert_eq!(updated.message_id, 2);

    Ok(())
}

/// Tests that statistic and dossier rows for the same player are independent.
///
/// Expected: Ok with the dossier row untouched
#[tokio::test]
async fn does_not_touch_dossier_rows() -> Result<(), AppError> {
    use crate::data::dossier::DossierRepository;

    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let player = factory::create_player(db).await?;
    factory::create_dossier(db, player.id, 10).await?;

    StatisticRepository::new(db).upsert(player.id, 20).await?;

    let dossier = DossierRepository::new(db)
        .find_by_player_id(player.id)
        .await?
        .unwrap();
    assert_eq!(dossier.message_id, 10);

    Ok(())
}
