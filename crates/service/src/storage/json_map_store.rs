use std::{
    collections::HashMap,
    hash::Hash,
    path::{Path, PathBuf},
    sync::Arc,
};
use tokio::{fs, sync::RwLock};

use crate::errors::ServiceError;

/// Generic JSON file-backed key-value map store.
///
/// Persists a `HashMap<K, V>` to a JSON file and rewrites the whole file on every change.
/// Writes go to `<file>.tmp` and are renamed over the file, so it is never left half written.
/// A file that exists but does not parse is an error rather than an empty map.
pub struct JsonMapStore<K, V> {
    inner: RwLock<HashMap<K, V>>,
    file_path: PathBuf,
    tmp_path: PathBuf,
}

fn io_err(e: impl std::fmt::Display) -> ServiceError {
    ServiceError::Db(e.to_string())
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

impl<K, V> JsonMapStore<K, V>
where
    K: Eq + Hash + serde::Serialize + serde::de::DeserializeOwned + Clone,
    V: serde::Serialize + serde::de::DeserializeOwned + Clone,
{
    /// Initialize the store from a path. Creates the file with an empty map if missing.
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).await.map_err(io_err)?;
        }

        let tmp_path = tmp_path_for(&file_path);

        let map: HashMap<K, V> = match fs::read(&file_path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| ServiceError::Db(format!("corrupt store file {}: {e}", file_path.display())))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let empty: HashMap<K, V> = HashMap::new();
                fs::write(&tmp_path, serde_json::to_vec(&empty).map_err(io_err)?)
                    .await
                    .map_err(io_err)?;
                fs::rename(&tmp_path, &file_path).await.map_err(io_err)?;
                empty
            }
            Err(e) => return Err(io_err(e)),
        };

        Ok(Arc::new(Self { inner: RwLock::new(map), file_path, tmp_path }))
    }

    async fn save(&self, map: &HashMap<K, V>) -> Result<(), ServiceError> {
        let data = serde_json::to_vec(map).map_err(io_err)?;
        fs::write(&self.tmp_path, data).await.map_err(io_err)?;
        fs::rename(&self.tmp_path, &self.file_path).await.map_err(io_err)?;
        Ok(())
    }

    /// List all entries as `(key, value)` pairs.
    pub async fn list(&self) -> Vec<(K, V)> {
        let map = self.inner.read().await;
        map.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }

    /// Insert a value under a key not yet present and persist.
    /// `make_key` is called again until it yields an unused key.
    pub async fn insert_new<F>(&self, mut make_key: F, value: V) -> Result<K, ServiceError>
    where
        F: FnMut() -> K,
    {
        let mut map = self.inner.write().await;
        let mut key = make_key();
        while map.contains_key(&key) {
            key = make_key();
        }
        map.insert(key.clone(), value);
        if let Err(e) = self.save(&map).await {
            map.remove(&key);
            return Err(e);
        }
        Ok(key)
    }

    /// Remove a key and persist; returns whether it existed.
    pub async fn remove(&self, key: &K) -> Result<bool, ServiceError> {
        let mut map = self.inner.write().await;
        let Some(old) = map.remove(key) else {
            return Ok(false);
        };
        if let Err(e) = self.save(&map).await {
            map.insert(key.clone(), old);
            return Err(e);
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn json_map_store_crud_persists() -> Result<(), anyhow::Error> {
        let tmp = std::env::temp_dir().join(format!("json_map_store_{}.json", uuid::Uuid::new_v4()));
        let store = JsonMapStore::<String, String>::new(&tmp).await?;

        // initially empty
        assert_eq!(store.list().await.len(), 0);

        // insert with a colliding key generator
        let mut keys = vec!["b".to_string(), "a".to_string(), "a".to_string()];
        let a = store.insert_new(|| keys.pop().unwrap_or_default(), "1".into()).await?;
        let b = store.insert_new(|| keys.pop().unwrap_or_default(), "2".into()).await?;
        assert_eq!((a.as_str(), b.as_str()), ("a", "b"));

        // remove and reload persistence
        assert!(store.remove(&"b".into()).await?);
        assert!(!store.remove(&"b".into()).await?);
        let reloaded = JsonMapStore::<String, String>::new(&tmp).await?;
        assert_eq!(reloaded.list().await, vec![("a".to_string(), "1".to_string())]);

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn writes_replace_file_through_tmp() -> Result<(), anyhow::Error> {
        let tmp = std::env::temp_dir().join(format!("json_map_store_swap_{}.json", uuid::Uuid::new_v4()));
        let partial = tmp_path_for(&tmp);
        assert!(partial.to_string_lossy().ends_with(".json.tmp"));

        // a half-written leftover from an interrupted save is ignored on open
        tokio::fs::write(&partial, b"{\"a\": \"tru").await?;
        let store = JsonMapStore::<String, String>::new(&tmp).await?;
        assert!(store.list().await.is_empty());

        store.insert_new(|| "k".to_string(), "v".into()).await?;
        assert!(!partial.exists());
        let on_disk: HashMap<String, String> = serde_json::from_slice(&tokio::fs::read(&tmp).await?)?;
        assert_eq!(on_disk.get("k").map(String::as_str), Some("v"));

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn corrupt_file_is_rejected() -> Result<(), anyhow::Error> {
        let tmp = std::env::temp_dir().join(format!("json_map_store_bad_{}.json", uuid::Uuid::new_v4()));
        tokio::fs::write(&tmp, b"{not json").await?;
        assert!(matches!(JsonMapStore::<String, String>::new(&tmp).await, Err(ServiceError::Db(_))));
        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }
}
