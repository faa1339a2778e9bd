use std::collections::BTreeMap;

use async_trait::async_trait;
use models::candidate;
use tokio::sync::RwLock;

use crate::candidate::repository::CandidateStore;
use crate::candidate::CandidateInput;
use crate::errors::ServiceError;

/// In-process store: a locked map with a monotonic id counter. Backs tests
/// and local development where no database is running.
#[derive(Default)]
pub struct MemoryCandidateStore {
    inner: RwLock<MemoryInner>,
}

#[derive(Default)]
struct MemoryInner {
    rows: BTreeMap<i32, candidate::Model>,
    last_id: i32,
}

impl MemoryCandidateStore {
    pub fn new() -> Self { Self::default() }
}

#[async_trait]
impl CandidateStore for MemoryCandidateStore {
    async fn list_all(&self) -> Result<Vec<candidate::Model>, ServiceError> {
        let inner = self.inner.read().await;
        Ok(inner.rows.values().cloned().collect())
    }

    async fn insert(&self, input: CandidateInput) -> Result<candidate::Model, ServiceError> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let id = inner.last_id;
        let model = input.into_model(id);
        inner.rows.insert(id, model.clone());
        Ok(model)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<candidate::Model>, ServiceError> {
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn replace(&self, id: i32, input: CandidateInput) -> Result<(), ServiceError> {
        let mut inner = self.inner.write().await;
        if !inner.rows.contains_key(&id) {
            return Err(ServiceError::Db("replace affected no rows".into()));
        }
        inner.rows.insert(id, input.into_model(id));
        Ok(())
    }

    async fn exists(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(self.inner.read().await.rows.contains_key(&id))
    }

    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.inner.write().await.rows.remove(&id);
        Ok(())
    }
}
