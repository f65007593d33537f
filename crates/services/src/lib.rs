#![forbid(unsafe_code)]

pub mod catalog;
pub mod content;
pub mod error;
pub mod goal_service;
pub mod lesson_service;
pub mod links;

pub use lesson_core::Clock;

pub use catalog::LessonCatalog;
pub use error::{CatalogError, GoalServiceError, LessonServiceError};
pub use goal_service::GoalService;
pub use lesson_service::{LessonPage, LessonService, NextLink, RoadmapEntry, RoadmapPage};
pub use links::SiteLinks;
