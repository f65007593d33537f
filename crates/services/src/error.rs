//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use lesson_core::model::{GoalError, LessonError, LessonId, ParseIdError, RoadmapError};
use storage::repository::StorageError;

/// Errors emitted while assembling a `LessonCatalog`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid lesson {origin}: {source}")]
    Lesson {
        origin: String,
        #[source]
        source: LessonError,
    },
    #[error(transparent)]
    Roadmap(#[from] RoadmapError),
    #[error(transparent)]
    Id(#[from] ParseIdError),
    #[error("roadmap step {step} points at unknown lesson {lesson}")]
    UnknownLesson { step: String, lesson: LessonId },
}

/// Errors emitted by `LessonService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LessonServiceError {
    #[error("lesson not found: {0}")]
    NotFound(String),
}

/// Errors emitted by `GoalService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GoalServiceError {
    #[error(transparent)]
    Goal(#[from] GoalError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
