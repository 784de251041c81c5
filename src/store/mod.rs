pub mod fs;
pub mod memory;

use anyhow::{bail, Result};
use async_trait::async_trait;

pub use fs::FsStore;
pub use memory::MemoryStore;

/// Backend-agnostic object store interface
///
/// Every item is one object: an opaque byte payload stored under a key equal
/// to the item name. Each operation is a single awaited round trip against
/// the backend; there are no retries or cross-key transactions at this layer.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// List all object keys currently present, in store-defined order
    async fn list(&self) -> Result<Vec<String>>;

    /// Read the payload stored under `name`
    ///
    /// Returns `Ok(None)` when no object exists under that name.
    async fn read(&self, name: &str) -> Result<Option<Vec<u8>>>;

    /// Create or overwrite the object stored under `name`
    async fn write(&self, name: &str, payload: &[u8]) -> Result<()>;

    /// Remove the object stored under `name`
    ///
    /// Returns `Ok(false)` when no object existed under that name, so a
    /// repeated delete behaves the same way every time.
    async fn delete(&self, name: &str) -> Result<bool>;

    /// Verify the backend is reachable and usable
    async fn health_check(&self) -> Result<()>;
}

/// Validate an item name before it touches a backend
///
/// Names map onto filesystem paths under the store root, so they must be a
/// single non-empty path segment: separators and dot components would escape
/// the root. Percent-encoded separators in the URL are decoded before this
/// check runs, so `%2F` and `%2E%2E` are caught here too.
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        bail!("item name must not be empty");
    }
    if name == "." || name == ".." || name.contains('/') || name.contains('\\') {
        bail!("item name must be a single path segment, got {name:?}");
    }
    Ok(())
}
