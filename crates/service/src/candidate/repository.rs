use async_trait::async_trait;
use models::candidate;
use sea_orm::DatabaseConnection;

use crate::candidate::CandidateInput;
use crate::errors::ServiceError;

/// Record-store contract: durable single-row CRUD on candidate rows.
/// Implementations report commit failures as errors; not-found policy
/// lives in the service layer.
#[async_trait]
pub trait CandidateStore: Send + Sync {
    async fn list_all(&self) -> Result<Vec<candidate::Model>, ServiceError>;
    async fn insert(&self, input: CandidateInput) -> Result<candidate::Model, ServiceError>;
    async fn get_by_id(&self, id: i32) -> Result<Option<candidate::Model>, ServiceError>;
    async fn replace(&self, id: i32, input: CandidateInput) -> Result<(), ServiceError>;
    async fn exists(&self, id: i32) -> Result<bool, ServiceError>;
    async fn delete(&self, id: i32) -> Result<(), ServiceError>;
}

/// SeaORM-backed store implementation.
pub struct SeaOrmCandidateStore {
    db: DatabaseConnection,
}

impl SeaOrmCandidateStore {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl CandidateStore for SeaOrmCandidateStore {
    async fn list_all(&self) -> Result<Vec<candidate::Model>, ServiceError> {
        crate::db::candidate_store::list_candidates(&self.db).await
    }

    async fn insert(&self, input: CandidateInput) -> Result<candidate::Model, ServiceError> {
        crate::db::candidate_store::insert_candidate(&self.db, input).await
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<candidate::Model>, ServiceError> {
        crate::db::candidate_store::get_candidate(&self.db, id).await
    }

    async fn replace(&self, id: i32, input: CandidateInput) -> Result<(), ServiceError> {
        crate::db::candidate_store::replace_candidate(&self.db, id, input).await
    }

    async fn exists(&self, id: i32) -> Result<bool, ServiceError> {
        crate::db::candidate_store::candidate_exists(&self.db, id).await
    }

    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        crate::db::candidate_store::delete_candidate(&self.db, id).await
    }
}
