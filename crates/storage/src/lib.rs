#![forbid(unsafe_code)]

pub mod goal_document;
pub mod repository;
pub mod sqlite;

pub use repository::{
    GOALS_KEY, GoalRepository, InMemoryRepository, KeyValueGoalRepository, KeyValueStore,
    Storage, StorageError,
};
