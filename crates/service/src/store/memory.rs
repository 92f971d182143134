//! Process-local collections. Also serves as the test double for the HTTP layer.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::records::domain::{Document, Expense, Record, Restaurant};
use crate::store::{Collection, Stores};

pub struct MemoryCollection<D> {
    inner: RwLock<HashMap<Uuid, D>>,
    unavailable: Arc<AtomicBool>,
}

impl<D: Document> MemoryCollection<D> {
    fn with_switch(unavailable: Arc<AtomicBool>) -> Self {
        Self { inner: RwLock::new(HashMap::new()), unavailable }
    }

    fn check(&self) -> Result<(), ServiceError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(ServiceError::Db(format!("{} store unavailable", D::COLLECTION)));
        }
        Ok(())
    }
}

#[async_trait]
impl<D: Document> Collection<D> for MemoryCollection<D> {
    async fn find_all(&self) -> Result<Vec<Record<D>>, ServiceError> {
        self.check()?;
        let map = self.inner.read().await;
        Ok(map.iter().map(|(id, doc)| Record::new(*id, doc.clone())).collect())
    }

    async fn insert_one(&self, doc: D) -> Result<Record<D>, ServiceError> {
        self.check()?;
        let mut map = self.inner.write().await;
        let mut id = Uuid::new_v4();
        while map.contains_key(&id) {
            id = Uuid::new_v4();
        }
        map.insert(id, doc.clone());
        Ok(Record::new(id, doc))
    }

    async fn delete_one(&self, id: Uuid) -> Result<bool, ServiceError> {
        self.check()?;
        let mut map = self.inner.write().await;
        Ok(map.remove(&id).is_some())
    }
}

/// Both collections plus a shared switch that makes every call fail.
#[derive(Clone)]
pub struct MemoryStore {
    pub restaurants: Arc<MemoryCollection<Restaurant>>,
    pub expenses: Arc<MemoryCollection<Expense>>,
    unavailable: Arc<AtomicBool>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        let unavailable = Arc::new(AtomicBool::new(false));
        Self {
            restaurants: Arc::new(MemoryCollection::with_switch(Arc::clone(&unavailable))),
            expenses: Arc::new(MemoryCollection::with_switch(Arc::clone(&unavailable))),
            unavailable,
        }
    }
}

impl MemoryStore {
    /// Simulate the store being unreachable (or reachable again).
    pub fn set_unavailable(&self, down: bool) {
        self.unavailable.store(down, Ordering::SeqCst);
    }

    pub fn stores(&self) -> Stores {
        Stores {
            restaurants: self.restaurants.clone(),
            expenses: self.expenses.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_collection_crud() -> Result<(), anyhow::Error> {
        let store = MemoryStore::default();
        let r = store
            .restaurants
            .insert_one(Restaurant { name: "Taqueria".into(), location: "Oaxaca".into() })
            .await?;
        assert_eq!(store.restaurants.find_all().await?, vec![r.clone()]);
        assert!(store.restaurants.delete_one(r.id).await?);
        assert!(!store.restaurants.delete_one(r.id).await?);
        Ok(())
    }

    #[tokio::test]
    async fn outage_switch_affects_both_collections() {
        let store = MemoryStore::default();
        store.set_unavailable(true);
        assert!(store.restaurants.find_all().await.is_err());
        assert!(store.expenses.delete_one(Uuid::new_v4()).await.is_err());
        store.set_unavailable(false);
        assert!(store.expenses.find_all().await.is_ok());
    }
}
