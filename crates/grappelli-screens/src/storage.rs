//! Key-value storage collaborator
//!
//! The screen persists exactly one string (the remembered email) through
//! this interface. Failures are expected to be survivable: callers log
//! and continue, and losing the stored value only costs the user a
//! convenience.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Error from a storage backend.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StorageError {
	#[error("storage backend error: {0}")]
	Backend(String),
}

/// Async key-value store for small string values.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
	/// Load the value stored under `key`, if any.
	async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

	/// Store `value` under `key`, replacing any previous value.
	async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

	/// Remove the value stored under `key`. Removing an absent key is not
	/// an error.
	async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory store for testing and development
///
/// # Examples
///
/// ```
/// use grappelli_screens::storage::{InMemoryStore, KeyValueStore};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let store = InMemoryStore::new();
///     store.set("rememberedEmail", "user@example.com").await.unwrap();
///     let value = store.get("rememberedEmail").await.unwrap();
///     assert_eq!(value.as_deref(), Some("user@example.com"));
/// }
/// ```
#[derive(Clone, Default)]
pub struct InMemoryStore {
	entries: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryStore {
	/// Create a new empty in-memory store
	pub fn new() -> Self {
		Self {
			entries: Arc::new(Mutex::new(HashMap::new())),
		}
	}
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
	async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
		let entries = self.entries.lock().await;
		Ok(entries.get(key).cloned())
	}

	async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
		let mut entries = self.entries.lock().await;
		entries.insert(key.to_string(), value.to_string());
		Ok(())
	}

	async fn remove(&self, key: &str) -> Result<(), StorageError> {
		let mut entries = self.entries.lock().await;
		entries.remove(key);
		Ok(())
	}
}
