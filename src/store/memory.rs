use std::collections::HashMap;
use std::sync::RwLock;

use anyhow::Result;
use async_trait::async_trait;

use super::ObjectStore;

/// In-memory object store for tests and local runs
///
/// Holds every object in a process-local map; nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    objects: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn list(&self) -> Result<Vec<String>> {
        let objects = self.objects.read().expect("store lock poisoned");
        Ok(objects.keys().cloned().collect())
    }

    async fn read(&self, name: &str) -> Result<Option<Vec<u8>>> {
        let objects = self.objects.read().expect("store lock poisoned");
        Ok(objects.get(name).cloned())
    }

    async fn write(&self, name: &str, payload: &[u8]) -> Result<()> {
        let mut objects = self.objects.write().expect("store lock poisoned");
        objects.insert(name.to_string(), payload.to_vec());
        Ok(())
    }

    async fn delete(&self, name: &str) -> Result<bool> {
        let mut objects = self.objects.write().expect("store lock poisoned");
        Ok(objects.remove(name).is_some())
    }

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }
}
