use thiserror::Error;

use crate::calculator::CalculatorError;
use crate::model::{GoalError, LessonError, RoadmapError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Lesson(#[from] LessonError),
    #[error(transparent)]
    Roadmap(#[from] RoadmapError),
    #[error(transparent)]
    Goal(#[from] GoalError),
    #[error(transparent)]
    Calculator(#[from] CalculatorError),
}
