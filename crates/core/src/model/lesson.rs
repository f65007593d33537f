use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::{LessonId, ParseIdError};
use crate::model::section::{Section, SectionError};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LessonError {
    #[error(transparent)]
    InvalidId(#[from] ParseIdError),

    #[error("lesson title cannot be empty")]
    EmptyTitle,

    #[error("lesson needs at least one section")]
    NoSections,

    #[error("section {index} ({kind}): {source}")]
    InvalidSection {
        index: usize,
        kind: &'static str,
        #[source]
        source: SectionError,
    },
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// Authored form of a lesson, as written in source or in a content file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonDraft {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub sections: Vec<Section>,
}

impl LessonDraft {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            summary: None,
            sections: Vec::new(),
        }
    }

    #[must_use]
    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    #[must_use]
    pub fn section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Validate the draft into an immutable `Lesson`.
    ///
    /// # Errors
    ///
    /// Returns `LessonError` for a bad id, an empty title, no sections, or the
    /// first malformed section.
    pub fn validate(self) -> Result<Lesson, LessonError> {
        let id = LessonId::new(self.id)?;
        let title = self.title.trim().to_owned();
        if title.is_empty() {
            return Err(LessonError::EmptyTitle);
        }
        if self.sections.is_empty() {
            return Err(LessonError::NoSections);
        }
        for (index, section) in self.sections.iter().enumerate() {
            section
                .validate()
                .map_err(|source| LessonError::InvalidSection {
                    index,
                    kind: section.kind(),
                    source,
                })?;
        }

        Ok(Lesson {
            id,
            title,
            summary: self
                .summary
                .map(|s| s.trim().to_owned())
                .filter(|s| !s.is_empty()),
            sections: self.sections,
        })
    }
}

//
// ─── LESSON ────────────────────────────────────────────────────────────────────
//

/// One topic's instructional content. Never mutated after validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lesson {
    id: LessonId,
    title: String,
    summary: Option<String>,
    sections: Vec<Section>,
}

impl Lesson {
    #[must_use]
    pub fn id(&self) -> &LessonId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }
}
