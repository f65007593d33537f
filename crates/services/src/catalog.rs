use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use lesson_core::model::{Lesson, LessonDraft, Roadmap};

use crate::content;
use crate::error::CatalogError;

/// File in a content directory that replaces the built-in roadmap.
pub const ROADMAP_FILE: &str = "roadmap.json";

/// Validated lessons plus the roadmap that orders them.
#[derive(Debug, Clone)]
pub struct LessonCatalog {
    lessons: Vec<Lesson>,
    index: HashMap<String, usize>,
    roadmap: Roadmap,
}

impl LessonCatalog {
    /// Build a catalog, checking that every roadmap step points at a lesson.
    ///
    /// A later lesson with the same id replaces an earlier one in place.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Roadmap` for an invalid roadmap and
    /// `CatalogError::UnknownLesson` for a dangling step.
    pub fn new(lessons: Vec<Lesson>, roadmap: Roadmap) -> Result<Self, CatalogError> {
        let roadmap = roadmap.validate()?;
        let mut catalog = Self {
            lessons: Vec::with_capacity(lessons.len()),
            index: HashMap::new(),
            roadmap,
        };
        for lesson in lessons {
            catalog.upsert(lesson);
        }

        if let Some(step) = catalog
            .roadmap
            .steps
            .iter()
            .find(|step| !catalog.index.contains_key(step.lesson_id.as_str()))
        {
            return Err(CatalogError::UnknownLesson {
                step: step.id.to_string(),
                lesson: step.lesson_id.clone(),
            });
        }
        Ok(catalog)
    }

    /// The lessons compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if built-in content fails validation.
    pub fn builtin() -> Result<Self, CatalogError> {
        let lessons = validate_all(
            content::builtin_lessons()
                .into_iter()
                .map(|draft| (format!("built-in {}", draft.id), draft)),
        )?;
        Self::new(lessons, content::builtin_roadmap()?)
    }

    /// Built-in lessons overlaid with every `*.json` lesson in `dir`.
    ///
    /// Files are read in name order. `roadmap.json`, when present, replaces the
    /// built-in roadmap.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` for unreadable or malformed files, invalid
    /// lessons, or a roadmap step naming an unknown lesson.
    pub fn load_dir(dir: &Path) -> Result<Self, CatalogError> {
        let mut paths = fs::read_dir(dir)
            .map_err(|source| CatalogError::Io {
                path: dir.to_path_buf(),
                source,
            })?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<Result<Vec<PathBuf>, _>>()
            .map_err(|source| CatalogError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
        paths.retain(|path| path.extension().is_some_and(|ext| ext == "json"));
        paths.sort();

        let mut roadmap = None;
        let mut drafts = Vec::new();
        for path in paths {
            if path.file_name().is_some_and(|name| name == ROADMAP_FILE) {
                roadmap = Some(read_json::<Roadmap>(&path)?);
            } else {
                let draft = read_json::<LessonDraft>(&path)?;
                drafts.push((path.display().to_string(), draft));
            }
        }
        let loaded = drafts.len();

        let mut lessons = validate_all(
            content::builtin_lessons()
                .into_iter()
                .map(|draft| (format!("built-in {}", draft.id), draft)),
        )?;
        lessons.extend(validate_all(drafts)?);

        let custom_roadmap = roadmap.is_some();
        let roadmap = match roadmap {
            Some(roadmap) => roadmap,
            None => content::builtin_roadmap()?,
        };
        let catalog = Self::new(lessons, roadmap)?;

        tracing::info!(
            dir = %dir.display(),
            loaded,
            custom_roadmap,
            lessons = catalog.lessons.len(),
            "loaded lesson content"
        );
        Ok(catalog)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Lesson> {
        self.index.get(id).map(|&i| &self.lessons[i])
    }

    /// All lessons, built-ins first, in load order.
    #[must_use]
    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    #[must_use]
    pub fn roadmap(&self) -> &Roadmap {
        &self.roadmap
    }

    fn upsert(&mut self, lesson: Lesson) {
        let id = lesson.id().as_str().to_owned();
        match self.index.get(&id) {
            Some(&i) => self.lessons[i] = lesson,
            None => {
                self.index.insert(id, self.lessons.len());
                self.lessons.push(lesson);
            }
        }
    }
}

fn validate_all(
    drafts: impl IntoIterator<Item = (String, LessonDraft)>,
) -> Result<Vec<Lesson>, CatalogError> {
    drafts
        .into_iter()
        .map(|(origin, draft)| {
            draft
                .validate()
                .map_err(|source| CatalogError::Lesson { origin, source })
        })
        .collect()
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, CatalogError> {
    let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
