use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::records::domain::{Document, Record};
use crate::store::Collection;

/// List/create/delete over one collection.
/// Validation happens here, before the store is touched.
pub struct RecordService<D: Document> {
    store: Arc<dyn Collection<D>>,
}

impl<D: Document> Clone for RecordService<D> {
    fn clone(&self) -> Self { Self { store: Arc::clone(&self.store) } }
}

impl<D: Document> RecordService<D> {
    pub fn new(store: Arc<dyn Collection<D>>) -> Self { Self { store } }

    pub async fn list(&self) -> Result<Vec<Record<D>>, ServiceError> {
        let records = self.store.find_all().await?;
        debug!(collection = D::COLLECTION, count = records.len(), "listed records");
        Ok(records)
    }

    pub async fn create(&self, input: D::Input) -> Result<Record<D>, ServiceError> {
        let doc = D::from_input(input)?;
        let created = self.store.insert_one(doc).await?;
        info!(collection = D::COLLECTION, id = %created.id, "created record");
        Ok(created)
    }

    /// Delete by the textual id from the request path.
    /// An id that is not a UUID cannot match anything and is reported as not found.
    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        let Ok(uuid) = Uuid::parse_str(id) else {
            return Err(ServiceError::not_found(D::LABEL));
        };
        if self.store.delete_one(uuid).await? {
            info!(collection = D::COLLECTION, id = %uuid, "deleted record");
            Ok(())
        } else {
            Err(ServiceError::not_found(D::LABEL))
        }
    }
}
