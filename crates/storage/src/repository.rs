use async_trait::async_trait;
use lesson_core::model::Goal;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use crate::goal_document::{decode_goals, encode_goals};

/// Key under which the goal list is stored.
pub const GOALS_KEY: &str = "financialGoals";

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("conflict")]
    Conflict,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("unsupported document version {0}")]
    UnsupportedVersion(u32),
}

/// String key-value store, the persistence seam for browser-style local state.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read a value. Missing keys are `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Insert or replace a value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be written.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete a value. Deleting a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Repository contract for the goal list.
#[async_trait]
pub trait GoalRepository: Send + Sync {
    /// Load all goals, newest first. An absent list is empty.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` if the stored list is malformed.
    async fn load_goals(&self) -> Result<Vec<Goal>, StorageError>;

    /// Replace the stored list.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the list cannot be written.
    async fn store_goals(&self, goals: &[Goal]) -> Result<(), StorageError>;

    /// Insert a goal at the head of the list, leaving older entries untouched.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Conflict` if the id is already used.
    async fn insert_goal(&self, goal: &Goal) -> Result<(), StorageError> {
        let mut goals = self.load_goals().await?;
        if goals.iter().any(|existing| existing.id() == goal.id()) {
            return Err(StorageError::Conflict);
        }
        goals.insert(0, goal.clone());
        self.store_goals(&goals).await
    }
}

/// Simple in-memory store for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl KeyValueStore for InMemoryRepository {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.remove(key);
        Ok(())
    }
}

/// Goal list kept as one JSON document under a single key.
#[derive(Clone)]
pub struct KeyValueGoalRepository {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl KeyValueGoalRepository {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_key(store, GOALS_KEY)
    }

    #[must_use]
    pub fn with_key(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }
}

#[async_trait]
impl GoalRepository for KeyValueGoalRepository {
    async fn load_goals(&self) -> Result<Vec<Goal>, StorageError> {
        let Some(raw) = self.store.get(&self.key).await? else {
            return Ok(Vec::new());
        };
        decode_goals(&raw).inspect_err(|err| {
            tracing::warn!(key = %self.key, error = %err, "stored goal list is unreadable");
        })
    }

    async fn store_goals(&self, goals: &[Goal]) -> Result<(), StorageError> {
        let raw = encode_goals(goals)?;
        self.store.set(&self.key, &raw).await
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub kv: Arc<dyn KeyValueStore>,
    pub goals: Arc<dyn GoalRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_store(Arc::new(InMemoryRepository::new()))
    }

    #[must_use]
    pub fn from_store(kv: Arc<dyn KeyValueStore>) -> Self {
        let goals: Arc<dyn GoalRepository> =
            Arc::new(KeyValueGoalRepository::new(Arc::clone(&kv)));
        Self { kv, goals }
    }
}
