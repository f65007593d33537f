use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::{LessonId, StepId};
use crate::navigation::{LinkStyle, NavigationContext};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RoadmapError {
    #[error("roadmap title cannot be empty")]
    EmptyTitle,

    #[error("duplicate roadmap step: {0}")]
    DuplicateStep(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapStep {
    pub id: StepId,
    pub title: String,
    pub lesson_id: LessonId,
}

impl RoadmapStep {
    /// Link to this step's lesson page at `lesson_path`, carrying the step id
    /// as the `from` token.
    #[must_use]
    pub fn href(&self, lesson_path: &str) -> String {
        NavigationContext::from_token(Some(self.id.as_str())).link(lesson_path, LinkStyle::Query)
    }

    /// Anchor of this step on the roadmap page, matched by fragment links.
    #[must_use]
    pub fn anchor(&self) -> &str {
        self.id.as_str()
    }
}

/// Ordered index of lessons. The only place lesson order is expressed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roadmap {
    pub title: String,
    pub steps: Vec<RoadmapStep>,
}

impl Roadmap {
    /// Check the roadmap is titled and step ids are unique.
    ///
    /// # Errors
    ///
    /// Returns `RoadmapError` for an empty title or a repeated step id.
    pub fn validate(self) -> Result<Self, RoadmapError> {
        if self.title.trim().is_empty() {
            return Err(RoadmapError::EmptyTitle);
        }
        let mut seen = HashSet::new();
        for step in &self.steps {
            if !seen.insert(step.id.as_str()) {
                return Err(RoadmapError::DuplicateStep(step.id.to_string()));
            }
        }
        Ok(self)
    }

    #[must_use]
    pub fn step(&self, id: &str) -> Option<&RoadmapStep> {
        self.steps.iter().find(|step| step.id.as_str() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(id: &str, lesson: &str) -> RoadmapStep {
        RoadmapStep {
            id: id.parse().unwrap(),
            title: id.to_uppercase(),
            lesson_id: lesson.parse().unwrap(),
        }
    }

    #[test]
    fn step_href_carries_step_token() {
        let s = step("step-2", "bond-basics");
        assert_eq!(s.href("/lessons/bond-basics"), "/lessons/bond-basics?from=step-2");
        assert_eq!(
            s.href("lessons/bond-basics.html"),
            "lessons/bond-basics.html?from=step-2"
        );
    }

    #[test]
    fn duplicate_steps_are_rejected() {
        let roadmap = Roadmap {
            title: "Start here".into(),
            steps: vec![step("a", "x"), step("a", "y")],
        };
        assert_eq!(
            roadmap.validate(),
            Err(RoadmapError::DuplicateStep("a".into()))
        );
    }
}
