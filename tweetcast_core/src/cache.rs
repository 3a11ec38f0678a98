use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::post::Snapshot;

pub const DEFAULT_CACHE_PATH: &str = "tweet_cache.json";

/// Owns the on-disk snapshot: one JSON document mapping account to its last posts.
/// A single process is expected to own a given file.
#[derive(Debug, Clone)]
pub struct CacheStore {
    path: PathBuf,
}

impl Default for CacheStore {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_PATH)
    }
}

impl CacheStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the snapshot. A missing file is the first run and yields an empty snapshot.
    pub async fn load(&self) -> Result<Snapshot> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("Cache file {} does not exist. It will be created.", self.path.display());
                return Ok(Snapshot::default());
            }
            Err(e) => return Err(e.into()),
        };
        let snapshot: Snapshot = serde_json::from_str(&content).map_err(|source| Error::CorruptCache {
            path: self.path.display().to_string(),
            source,
        })?;
        tracing::info!(
            "Loaded cache from {} with {} accounts",
            self.path.display(),
            snapshot.len()
        );
        Ok(snapshot)
    }

    /// Persist the snapshot. The content goes to a sibling file first and is then
    /// renamed over the target, so an interrupted write keeps the previous cache.
    pub async fn save(&self, snapshot: &Snapshot) -> Result<()> {
        let content = serde_json::to_string_pretty(snapshot)?;
        let temp_path = self.temp_path();
        let written = match tokio::fs::write(&temp_path, content).await {
            Ok(()) => tokio::fs::rename(&temp_path, &self.path).await,
            Err(e) => Err(e),
        };
        if let Err(e) = written {
            if let Err(remove_error) = tokio::fs::remove_file(&temp_path).await {
                tracing::debug!("Cannot remove {}: {}", temp_path.display(), remove_error);
            }
            return Err(e.into());
        }
        tracing::info!("Saved cache to {}", self.path.display());
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| DEFAULT_CACHE_PATH.into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{ids, posts};
    use crate::post::Account;

    fn store(dir: &tempfile::TempDir) -> CacheStore {
        CacheStore::new(dir.path().join("tweet_cache.json"))
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = store(&dir).load().await.unwrap();
        assert!(snapshot.is_empty());
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);
        let mut snapshot = Snapshot::new();
        snapshot.replace(Account::from("alice"), posts(&["1", "2", "3"]));
        snapshot.replace(Account::from("bob"), vec![]);
        store.save(&snapshot).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(ids(loaded.get(&Account::from("alice"))), ["1", "2", "3"]);
        assert!(loaded.contains(&Account::from("bob")));
        assert!(!dir.path().join("tweet_cache.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_save_load_round_trip_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);
        let content = r#"{
  "alice": [
    {
      "tweet_id": "1",
      "tweet_text": "hello",
      "tweet_url": "https://twitter.com/alice/status/1"
    },
    {
      "tweet_id": "2",
      "tweet_text": "",
      "tweet_url": "https://twitter.com/alice/status/2"
    }
  ],
  "bob": []
}"#;
        std::fs::write(store.path(), content).unwrap();

        let snapshot = store.load().await.unwrap();
        store.save(&snapshot).await.unwrap();
        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), content);
    }

    #[tokio::test]
    async fn test_load_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);
        std::fs::write(store.path(), "{\"alice\": [{\"tweet_id\": ").unwrap();
        let result = store.load().await;
        assert!(matches!(result, Err(Error::CorruptCache { .. })));
    }

    #[tokio::test]
    async fn test_failed_save_removes_temp_file() {
        // The target is a directory, so the rename fails after the temp file is written
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("tweet_cache.json");
        std::fs::create_dir(&target).unwrap();
        std::fs::write(target.join("keep"), "x").unwrap();
        let store = CacheStore::new(&target);

        let mut snapshot = Snapshot::new();
        snapshot.replace(Account::from("alice"), posts(&["1"]));
        assert!(matches!(store.save(&snapshot).await, Err(Error::IOError(_))));
        assert!(!dir.path().join("tweet_cache.json.tmp").exists());
        assert!(target.is_dir());
    }

    #[tokio::test]
    async fn test_save_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);
        let alice = Account::from("alice");
        let mut snapshot = Snapshot::new();
        snapshot.replace(alice.clone(), posts(&["1", "2", "3", "4", "5"]));
        store.save(&snapshot).await.unwrap();
        snapshot.replace(alice.clone(), posts(&["6"]));
        store.save(&snapshot).await.unwrap();
        assert_eq!(ids(store.load().await.unwrap().get(&alice)), ["6"]);
    }
}
