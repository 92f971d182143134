//! `file://` backend: one JSON file per collection inside a directory.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::records::domain::{Document, Expense, Record, Restaurant};
use crate::storage::json_map_store::JsonMapStore;
use crate::store::{Collection, Stores};

pub struct FileCollection<D> {
    store: Arc<JsonMapStore<Uuid, D>>,
}

impl<D: Document> FileCollection<D> {
    /// Opens `<dir>/<collection>.json`, creating it when missing.
    pub async fn open(dir: &std::path::Path) -> Result<Self, ServiceError> {
        let store = JsonMapStore::new(dir.join(format!("{}.json", D::COLLECTION))).await?;
        Ok(Self { store })
    }
}

#[async_trait]
impl<D: Document> Collection<D> for FileCollection<D> {
    async fn find_all(&self) -> Result<Vec<Record<D>>, ServiceError> {
        Ok(self.store.list().await.into_iter().map(|(id, doc)| Record::new(id, doc)).collect())
    }

    async fn insert_one(&self, doc: D) -> Result<Record<D>, ServiceError> {
        let id = self.store.insert_new(Uuid::new_v4, doc.clone()).await?;
        Ok(Record::new(id, doc))
    }

    async fn delete_one(&self, id: Uuid) -> Result<bool, ServiceError> {
        self.store.remove(&id).await
    }
}

pub struct FileStore {
    restaurants: Arc<FileCollection<Restaurant>>,
    expenses: Arc<FileCollection<Expense>>,
}

impl FileStore {
    pub async fn open<P: Into<PathBuf>>(dir: P) -> Result<Self, ServiceError> {
        let dir = dir.into();
        Ok(Self {
            restaurants: Arc::new(FileCollection::open(&dir).await?),
            expenses: Arc::new(FileCollection::open(&dir).await?),
        })
    }

    pub fn stores(self) -> Stores {
        Stores { restaurants: self.restaurants, expenses: self.expenses }
    }
}
