use chrono::Utc;
use relationships_dao::{RelationshipDao, RelationshipStore};
use relationships_errors::RelationshipError;
use relationships_models::RelationshipStatus;
use test_utils::{TestPostgresContainer, create_sql_connect};
use uuid::Uuid;

async fn setup_test_db()
-> anyhow::Result<(TestPostgresContainer, RelationshipDao)> {
    let container = TestPostgresContainer::new().await?;
    let dao = RelationshipDao::new(create_sql_connect(&container));
    Ok((container, dao))
}

async fn status(dao: &RelationshipDao, event_id: Uuid) -> RelationshipStatus {
    RelationshipStatus::of(dao.find(event_id).await.unwrap().as_ref())
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn test_save_upsert_is_idempotent() {
    let (_container, dao) = setup_test_db().await.unwrap();
    let event_id = Uuid::now_v7();

    let first = dao.save(event_id, Utc::now()).await.unwrap();
    let second = dao.save(event_id, Utc::now()).await.unwrap();

    assert!(first.is_new());
    assert!(!second.is_new());
    assert_eq!(first.saved().id, second.saved().id);
    assert_eq!(dao.list_saved().await.unwrap().len(), 1);
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn test_attend_replaces_saved_and_updates_rating() {
    let (_container, dao) = setup_test_db().await.unwrap();
    let event_id = Uuid::now_v7();

    dao.save(event_id, Utc::now()).await.unwrap();
    let created = dao
        .attend(event_id, Some("🎷".to_string()), Utc::now())
        .await
        .unwrap();
    assert!(created.is_new());
    assert!(dao.list_saved().await.unwrap().is_empty());

    let updated = dao
        .attend(event_id, Some("🔥".to_string()), Utc::now())
        .await
        .unwrap();
    assert!(!updated.is_new());
    assert_eq!(updated.attended().id, created.attended().id);
    assert_eq!(updated.attended().attended_at, created.attended().attended_at);
    assert_eq!(
        status(&dao, event_id).await,
        RelationshipStatus::Attended {
            emoji_rating: Some("🔥".to_string())
        }
    );
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn test_remove_checks_state() {
    let (_container, dao) = setup_test_db().await.unwrap();
    let event_id = Uuid::now_v7();

    assert!(matches!(
        dao.remove_saved(event_id).await,
        Err(RelationshipError::SavedNotFound { .. })
    ));

    dao.save(event_id, Utc::now()).await.unwrap();
    assert!(matches!(
        dao.remove_attended(event_id).await,
        Err(RelationshipError::AttendedNotFound { .. })
    ));
    assert!(status(&dao, event_id).await.is_saved());

    dao.remove_saved(event_id).await.unwrap();
    assert_eq!(status(&dao, event_id).await, RelationshipStatus::None);
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn test_save_after_attend_starts_a_new_record() {
    let (_container, dao) = setup_test_db().await.unwrap();
    let event_id = Uuid::now_v7();
    let attended = dao
        .attend(event_id, Some("🎷".to_string()), Utc::now())
        .await
        .unwrap()
        .into_attended();

    let outcome = dao.save(event_id, Utc::now()).await.unwrap();

    assert!(outcome.is_new());
    assert_ne!(outcome.saved().id, attended.id);
    assert_eq!(status(&dao, event_id).await, RelationshipStatus::Saved);
    assert!(dao.list_attended().await.unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn test_concurrent_saves_create_one_row() {
    let (_container, dao) = setup_test_db().await.unwrap();
    let event_id = Uuid::now_v7();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let dao = dao.clone();
            tokio::spawn(async move { dao.save(event_id, Utc::now()).await })
        })
        .collect();

    let mut created = 0;
    for handle in handles {
        if handle.await.unwrap().unwrap().is_new() {
            created += 1;
        }
    }

    assert_eq!(created, 1);
    assert_eq!(dao.clear().await.unwrap(), 1);
}
