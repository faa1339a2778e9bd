use crate::candidate;
use crate::db::connect;
use anyhow::Result;
use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, EntityTrait, Set};

/// Setup test database with migrations
async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = connect().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

fn sample() -> candidate::ActiveModel {
    candidate::ActiveModel {
        id: NotSet,
        full_name: Set("Jane Doe".into()),
        mobile: Set("12345".into()),
        email: Set("j@x.com".into()),
        age: Set(30),
        blood_group: Set("O+".into()),
        address: Set("1 Main St".into()),
    }
}

#[tokio::test]
async fn test_candidate_crud() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err() {
        return Ok(());
    }

    let db = setup_test_db().await?;

    // Create: the store assigns the id
    let created = sample().insert(&db).await?;
    assert!(created.id > 0);
    assert_eq!(created.full_name, "Jane Doe");

    // Read
    let found = candidate::Entity::find_by_id(created.id).one(&db).await?;
    assert!(found.is_some());
    let found = found.unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.blood_group, "O+");

    // Monotonic ids across inserts
    let second = sample().insert(&db).await?;
    assert!(second.id > created.id);

    // Full-row update
    let mut am: candidate::ActiveModel = found.into();
    am.full_name = Set("Janet Doe".into());
    am.age = Set(31);
    let updated = am.update(&db).await?;
    assert_eq!(updated.full_name, "Janet Doe");
    assert_eq!(updated.age, 31);

    // Delete
    candidate::Entity::delete_by_id(created.id).exec(&db).await?;
    let after = candidate::Entity::find_by_id(created.id).one(&db).await?;
    assert!(after.is_none());

    // Cleanup
    candidate::Entity::delete_by_id(second.id).exec(&db).await?;
    Ok(())
}
