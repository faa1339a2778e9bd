use models::candidate;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    Set, SqlErr,
};

use crate::candidate::CandidateInput;
use crate::errors::ServiceError;

fn map_db_err(e: DbErr) -> ServiceError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg))
        | Some(SqlErr::ForeignKeyConstraintViolation(msg)) => ServiceError::Constraint(msg),
        _ => ServiceError::Db(e.to_string()),
    }
}

fn active_model(id: Option<i32>, input: CandidateInput) -> candidate::ActiveModel {
    candidate::ActiveModel {
        id: id.map(Set).unwrap_or(NotSet),
        full_name: Set(input.full_name),
        mobile: Set(input.mobile),
        email: Set(input.email),
        age: Set(input.age),
        blood_group: Set(input.blood_group),
        address: Set(input.address),
    }
}

/// List every candidate, in whatever order the table yields.
pub async fn list_candidates(db: &DatabaseConnection) -> Result<Vec<candidate::Model>, ServiceError> {
    candidate::Entity::find().all(db).await.map_err(map_db_err)
}

/// Insert a candidate; the table assigns the id.
pub async fn insert_candidate(
    db: &DatabaseConnection,
    input: CandidateInput,
) -> Result<candidate::Model, ServiceError> {
    active_model(None, input).insert(db).await.map_err(map_db_err)
}

/// Get candidate by id.
pub async fn get_candidate(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<candidate::Model>, ServiceError> {
    candidate::Entity::find_by_id(id).one(db).await.map_err(map_db_err)
}

/// Overwrite every field of the row at `id`. A commit that touches no row
/// surfaces as an error; the service layer decides what that means.
pub async fn replace_candidate(
    db: &DatabaseConnection,
    id: i32,
    input: CandidateInput,
) -> Result<(), ServiceError> {
    active_model(Some(id), input).update(db).await.map(|_| ()).map_err(map_db_err)
}

/// Check whether a candidate row exists.
pub async fn candidate_exists(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    let count = candidate::Entity::find_by_id(id).count(db).await.map_err(map_db_err)?;
    Ok(count > 0)
}

/// Delete candidate by id.
pub async fn delete_candidate(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    candidate::Entity::delete_by_id(id).exec(db).await.map_err(map_db_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    fn input(name: &str) -> CandidateInput {
        CandidateInput {
            full_name: name.into(),
            mobile: "12345".into(),
            email: "j@x.com".into(),
            age: 30,
            blood_group: "O+".into(),
            address: "1 Main St".into(),
        }
    }

    #[tokio::test]
    async fn candidate_store_crud() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err() {
            return Ok(());
        }
        let db = get_db().await?;

        let created = insert_candidate(&db, input("Jane Doe")).await?;
        assert!(created.id > 0);
        assert_eq!(created.full_name, "Jane Doe");

        let found = get_candidate(&db, created.id).await?.expect("found");
        assert_eq!(found, created);
        assert!(candidate_exists(&db, created.id).await?);

        replace_candidate(&db, created.id, input("Janet Doe")).await?;
        let replaced = get_candidate(&db, created.id).await?.expect("found");
        assert_eq!(replaced.full_name, "Janet Doe");
        assert_eq!(replaced.id, created.id);

        delete_candidate(&db, created.id).await?;
        assert!(!candidate_exists(&db, created.id).await?);
        assert!(get_candidate(&db, created.id).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn replace_missing_row_is_an_error() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err() {
            return Ok(());
        }
        let db = get_db().await?;
        let res = replace_candidate(&db, i32::MAX, input("Nobody")).await;
        assert!(res.is_err());
        assert!(!candidate_exists(&db, i32::MAX).await?);
        Ok(())
    }
}
