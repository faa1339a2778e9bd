use std::sync::Arc;

use models::candidate;
use tracing::instrument;

use crate::candidate::repository::CandidateStore;
use crate::candidate::CandidateInput;
use crate::errors::ServiceError;

/// Stateless translation layer between HTTP-shaped operations and the store.
/// Holds its store as an explicit constructor argument; no per-request state.
pub struct CandidateService {
    store: Arc<dyn CandidateStore>,
}

impl CandidateService {
    pub fn new(store: Arc<dyn CandidateStore>) -> Self { Self { store } }

    pub async fn list(&self) -> Result<Vec<candidate::Model>, ServiceError> {
        self.store.list_all().await
    }

    pub async fn get(&self, id: i32) -> Result<candidate::Model, ServiceError> {
        self.store
            .get_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("candidate"))
    }

    /// Insert a new candidate. Any caller-supplied id never reaches this
    /// layer; the store assigns one.
    #[instrument(skip(self, input))]
    pub async fn create(&self, input: CandidateInput) -> Result<candidate::Model, ServiceError> {
        self.store.insert(input).await
    }

    /// Full-record replace at the path id. The replace is attempted first;
    /// only a failed commit triggers the existence re-check, so a row deleted
    /// concurrently surfaces as NotFound instead of a phantom write. Any
    /// other commit failure propagates unchanged.
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i32, input: CandidateInput) -> Result<(), ServiceError> {
        match self.store.replace(id, input).await {
            Ok(()) => Ok(()),
            Err(err) => {
                if !self.store.exists(id).await? {
                    Err(ServiceError::not_found("candidate"))
                } else {
                    Err(err)
                }
            }
        }
    }

    /// Remove the candidate at `id`, returning its final state.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<candidate::Model, ServiceError> {
        let found = self
            .store
            .get_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("candidate"))?;
        self.store.delete(id).await?;
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::memory::MemoryCandidateStore;

    fn service() -> CandidateService {
        CandidateService::new(Arc::new(MemoryCandidateStore::new()))
    }

    fn jane() -> CandidateInput {
        CandidateInput {
            full_name: "Jane Doe".into(),
            mobile: "12345".into(),
            email: "j@x.com".into(),
            age: 30,
            blood_group: "O+".into(),
            address: "1 Main St".into(),
        }
    }

    #[tokio::test]
    async fn list_on_empty_store_is_empty() {
        let svc = service();
        assert!(svc.list().await.expect("list").is_empty());
    }

    #[tokio::test]
    async fn create_then_get_roundtrip() {
        let svc = service();
        let created = svc.create(jane()).await.expect("create");
        assert!(created.id > 0);
        let fetched = svc.get(created.id).await.expect("get");
        assert_eq!(fetched, created);
        assert_eq!(fetched, jane().into_model(created.id));
    }

    #[tokio::test]
    async fn create_assigns_monotonic_ids() {
        let svc = service();
        let a = svc.create(jane()).await.expect("create a");
        let b = svc.create(jane()).await.expect("create b");
        assert!(b.id > a.id);
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let svc = service();
        assert!(matches!(svc.get(42).await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_returns_final_state_and_removes_row() {
        let svc = service();
        let created = svc.create(jane()).await.expect("create");
        let removed = svc.delete(created.id).await.expect("delete");
        assert_eq!(removed, created);
        assert!(matches!(svc.get(created.id).await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_missing_is_not_found() {
        let svc = service();
        assert!(matches!(svc.delete(42).await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn update_replaces_every_field() {
        let svc = service();
        let created = svc.create(jane()).await.expect("create");
        let replacement = CandidateInput {
            full_name: "Janet Doe".into(),
            mobile: "67890".into(),
            email: "janet@x.com".into(),
            age: 31,
            blood_group: "AB-".into(),
            address: "2 Side St".into(),
        };
        svc.update(created.id, replacement.clone()).await.expect("update");
        let fetched = svc.get(created.id).await.expect("get");
        assert_eq!(fetched, replacement.into_model(created.id));
    }

    #[tokio::test]
    async fn update_missing_is_not_found_and_creates_nothing() {
        let svc = service();
        let res = svc.update(42, jane()).await;
        assert!(matches!(res, Err(ServiceError::NotFound(_))));
        assert!(svc.list().await.expect("list").is_empty());
    }
}
