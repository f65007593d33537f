use std::sync::Arc;

use lesson_core::model::{Lesson, Roadmap, RoadmapStep};
use lesson_core::navigation::NavigationContext;

use crate::catalog::LessonCatalog;
use crate::error::LessonServiceError;
use crate::links::SiteLinks;

/// Link to the following roadmap step, carrying that step as the token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextLink {
    pub title: String,
    pub href: String,
}

/// Everything the renderer needs for one lesson page.
#[derive(Debug, Clone)]
pub struct LessonPage<'a> {
    pub lesson: &'a Lesson,
    pub nav: NavigationContext,
    /// The roadmap step named by the incoming token, if it is one we know.
    pub step: Option<&'a RoadmapStep>,
    pub return_href: String,
    pub next: Option<NextLink>,
    pub goal_action: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoadmapEntry<'a> {
    pub step: &'a RoadmapStep,
    pub lesson_title: &'a str,
    pub href: String,
    pub current: bool,
}

#[derive(Debug, Clone)]
pub struct RoadmapPage<'a> {
    pub roadmap: &'a Roadmap,
    pub entries: Vec<RoadmapEntry<'a>>,
}

/// Assembles pages from the catalog for a given site layout.
#[derive(Clone)]
pub struct LessonService {
    catalog: Arc<LessonCatalog>,
    links: SiteLinks,
}

impl LessonService {
    #[must_use]
    pub fn new(catalog: Arc<LessonCatalog>, links: SiteLinks) -> Self {
        Self { catalog, links }
    }

    #[must_use]
    pub fn catalog(&self) -> &LessonCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn links(&self) -> &SiteLinks {
        &self.links
    }

    /// Lesson page for `id`, echoing the navigation token into its links.
    ///
    /// # Errors
    ///
    /// Returns `LessonServiceError::NotFound` for an unknown lesson id.
    pub fn page(
        &self,
        id: &str,
        nav: NavigationContext,
    ) -> Result<LessonPage<'_>, LessonServiceError> {
        let lesson = self
            .catalog
            .get(id)
            .ok_or_else(|| LessonServiceError::NotFound(id.to_owned()))?;

        // A token naming a step for another lesson is echoed but places nothing.
        let roadmap = self.catalog.roadmap();
        let position = nav.token().and_then(|token| {
            roadmap
                .steps
                .iter()
                .position(|s| s.id.as_str() == token && &s.lesson_id == lesson.id())
        });
        let step = position.map(|i| &roadmap.steps[i]);
        let next = position
            .and_then(|i| roadmap.steps.get(i + 1))
            .map(|next| NextLink {
                title: next.title.clone(),
                href: next.href(&self.links.sibling_href(&next.lesson_id)),
            });

        Ok(LessonPage {
            lesson,
            return_href: self.links.return_href(&nav),
            nav,
            step,
            next,
            goal_action: self.links.goal_action.as_deref(),
        })
    }

    /// Roadmap page; the step named by the token is marked current.
    #[must_use]
    pub fn roadmap_page(&self, nav: &NavigationContext) -> RoadmapPage<'_> {
        let roadmap = self.catalog.roadmap();
        let entries = roadmap
            .steps
            .iter()
            .map(|step| RoadmapEntry {
                step,
                lesson_title: self
                    .catalog
                    .get(step.lesson_id.as_str())
                    .map_or(step.title.as_str(), Lesson::title),
                href: step.href(&self.links.lesson_href(&step.lesson_id)),
                current: nav.token() == Some(step.id.as_str()),
            })
            .collect();
        RoadmapPage { roadmap, entries }
    }
}
