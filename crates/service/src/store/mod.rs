//! Document store seam.
//!
//! A `Collection<D>` assigns identifiers on insert, deletes by exact id and
//! scans without ordering. Backends are picked from the connection string.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use configs::DatabaseConfig;
use migration::MigratorTrait;
use tracing::info;
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::records::domain::{Document, Expense, Record, Restaurant};

pub mod file;
pub mod memory;
pub mod seaorm;

#[async_trait]
pub trait Collection<D: Document>: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Record<D>>, ServiceError>;
    async fn insert_one(&self, doc: D) -> Result<Record<D>, ServiceError>;
    /// Returns whether a record with `id` existed.
    async fn delete_one(&self, id: Uuid) -> Result<bool, ServiceError>;
}

/// Store handles injected into the HTTP layer.
#[derive(Clone)]
pub struct Stores {
    pub restaurants: Arc<dyn Collection<Restaurant>>,
    pub expenses: Arc<dyn Collection<Expense>>,
}

/// Parsed store connection string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreUrl {
    Postgres(String),
    File(PathBuf),
    Memory,
}

impl StoreUrl {
    pub fn parse(url: &str) -> Result<Self, ServiceError> {
        let url = url.trim();
        let lower = url.to_ascii_lowercase();
        if lower.starts_with("postgres://") || lower.starts_with("postgresql://") {
            return Ok(StoreUrl::Postgres(url.to_string()));
        }
        if lower.starts_with("file://") {
            let path = &url["file://".len()..];
            if path.is_empty() {
                return Err(ServiceError::Validation("file:// store url needs a directory".into()));
            }
            return Ok(StoreUrl::File(PathBuf::from(path)));
        }
        if lower.starts_with("memory://") {
            return Ok(StoreUrl::Memory);
        }
        Err(ServiceError::Validation(format!("unsupported store url scheme: {url}")))
    }

    /// Scheme only, safe to log (no credentials).
    pub fn kind(&self) -> &'static str {
        match self {
            StoreUrl::Postgres(_) => "postgres",
            StoreUrl::File(_) => "file",
            StoreUrl::Memory => "memory",
        }
    }
}

/// Open the backend named by `cfg.url`. PostgreSQL gets its migrations applied first.
pub async fn open(cfg: &DatabaseConfig) -> Result<Stores, ServiceError> {
    let url = StoreUrl::parse(&cfg.url)?;
    info!(kind = url.kind(), "opening record store");
    match url {
        StoreUrl::Postgres(url) => {
            let cfg = DatabaseConfig { url, ..cfg.clone() };
            let db = models::db::connect_with_config(&cfg)
                .await
                .map_err(|e| ServiceError::Db(e.to_string()))?;
            migration::Migrator::up(&db, None)
                .await
                .map_err(|e| ServiceError::Db(e.to_string()))?;
            Ok(seaorm::SeaOrmStore::new(db).stores())
        }
        StoreUrl::File(dir) => Ok(file::FileStore::open(dir).await?.stores()),
        StoreUrl::Memory => Ok(memory::MemoryStore::default().stores()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_supported_schemes() {
        assert_eq!(
            StoreUrl::parse("postgres://u:p@db:5432/restaurant_db").unwrap(),
            StoreUrl::Postgres("postgres://u:p@db:5432/restaurant_db".into())
        );
        assert!(matches!(StoreUrl::parse("PostgreSQL://db/x").unwrap(), StoreUrl::Postgres(_)));
        assert_eq!(StoreUrl::parse("file://data/records").unwrap(), StoreUrl::File(PathBuf::from("data/records")));
        assert_eq!(StoreUrl::parse("file:///var/lib/records").unwrap(), StoreUrl::File(PathBuf::from("/var/lib/records")));
        assert_eq!(StoreUrl::parse(" memory:// ").unwrap(), StoreUrl::Memory);
    }

    #[test]
    fn rejects_unknown_scheme_and_empty_path() {
        assert!(matches!(StoreUrl::parse("mongodb://localhost:27017"), Err(ServiceError::Validation(_))));
        assert!(matches!(StoreUrl::parse("file://"), Err(ServiceError::Validation(_))));
    }

    #[tokio::test]
    async fn open_rejects_unsupported_scheme() {
        let cfg = DatabaseConfig { url: "mongodb://localhost:27017".into(), ..DatabaseConfig::default() };
        assert!(matches!(open(&cfg).await, Err(ServiceError::Validation(_))));
    }

    #[tokio::test]
    async fn open_memory_store() -> Result<(), anyhow::Error> {
        let cfg = DatabaseConfig { url: "memory://".into(), ..DatabaseConfig::default() };
        let stores = open(&cfg).await?;
        assert!(stores.restaurants.find_all().await?.is_empty());
        assert!(stores.expenses.find_all().await?.is_empty());
        Ok(())
    }
}
