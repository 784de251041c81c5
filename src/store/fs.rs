use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;

use super::{validate_name, ObjectStore};

/// Filesystem-backed object store
///
/// Each object is a single file directly under the configured root directory,
/// named after its item. The root directory stands in for the durable store's
/// bucket/container identifier and is created on open if absent.
#[derive(Debug, Clone)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    /// Open (and if necessary create) the store rooted at `root`
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        tokio::fs::create_dir_all(&root)
            .await
            .with_context(|| format!("failed to create store root at {}", root.display()))?;
        tracing::info!("Object store opened at: {}", root.display());
        Ok(Self { root })
    }

    fn object_path(&self, name: &str) -> Result<PathBuf> {
        validate_name(name)?;
        Ok(self.root.join(name))
    }
}

#[async_trait]
impl ObjectStore for FsStore {
    async fn list(&self) -> Result<Vec<String>> {
        let mut entries = tokio::fs::read_dir(&self.root)
            .await
            .context("failed to read store root")?;

        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await.context("failed to list store root")? {
            let file_type = entry.file_type().await.context("failed to stat store entry")?;
            if file_type.is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        Ok(names)
    }

    async fn read(&self, name: &str) -> Result<Option<Vec<u8>>> {
        let path = self.object_path(name)?;
        match tokio::fs::read(&path).await {
            Ok(payload) => {
                tracing::debug!("Read object: {}", name);
                Ok(Some(payload))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("failed to read object {name:?}")),
        }
    }

    async fn write(&self, name: &str, payload: &[u8]) -> Result<()> {
        let path = self.object_path(name)?;
        tokio::fs::write(&path, payload)
            .await
            .with_context(|| format!("failed to write object {name:?}"))?;
        tracing::debug!("Wrote object: {} ({} bytes)", name, payload.len());
        Ok(())
    }

    async fn delete(&self, name: &str) -> Result<bool> {
        let path = self.object_path(name)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                tracing::debug!("Deleted object: {}", name);
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e).with_context(|| format!("failed to delete object {name:?}")),
        }
    }

    async fn health_check(&self) -> Result<()> {
        let metadata = tokio::fs::metadata(&self.root)
            .await
            .context("store root is unreachable")?;
        if !metadata.is_dir() {
            anyhow::bail!("store root {} is not a directory", self.root.display());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn temp_store() -> (tempfile::TempDir, FsStore) {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let store = FsStore::open(dir.path()).await.expect("failed to open store");
        (dir, store)
    }

    #[tokio::test]
    async fn write_then_read_round_trips() {
        let (_dir, store) = temp_store().await;

        store.write("alpha", b"payload bytes").await.unwrap();
        let payload = store.read("alpha").await.unwrap();
        assert_eq!(payload, Some(b"payload bytes".to_vec()));
    }

    #[tokio::test]
    async fn write_overwrites_existing_object() {
        let (_dir, store) = temp_store().await;

        store.write("alpha", b"first").await.unwrap();
        store.write("alpha", b"second").await.unwrap();
        assert_eq!(store.read("alpha").await.unwrap(), Some(b"second".to_vec()));
    }

    #[tokio::test]
    async fn read_absent_object_is_none() {
        let (_dir, store) = temp_store().await;
        assert_eq!(store.read("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn list_returns_all_written_names() {
        let (_dir, store) = temp_store().await;

        store.write("alpha", b"1").await.unwrap();
        store.write("beta", b"2").await.unwrap();

        let mut names = store.list().await.unwrap();
        names.sort();
        assert_eq!(names, vec!["alpha".to_string(), "beta".to_string()]);
    }

    #[tokio::test]
    async fn delete_removes_object_and_reports_absence() {
        let (_dir, store) = temp_store().await;

        store.write("alpha", b"1").await.unwrap();
        assert!(store.delete("alpha").await.unwrap());
        assert_eq!(store.read("alpha").await.unwrap(), None);

        // Repeating the delete is deterministic, not an error
        assert!(!store.delete("alpha").await.unwrap());
    }

    #[tokio::test]
    async fn traversal_names_are_rejected() {
        let (_dir, store) = temp_store().await;

        assert!(store.write("../escape", b"x").await.is_err());
        assert!(store.read("..").await.is_err());
        assert!(store.delete("a/b").await.is_err());
    }

    #[tokio::test]
    async fn health_check_passes_on_open_store() {
        let (_dir, store) = temp_store().await;
        store.health_check().await.unwrap();
    }
}
