use lesson_core::model::LessonId;
use lesson_core::navigation::{LinkStyle, NavigationContext};

/// URL layout of the rendered site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteLinks {
    /// Roadmap page as seen from a lesson page.
    pub roadmap: String,
    /// Lesson path prefix as seen from the roadmap page.
    pub lessons_from_roadmap: String,
    /// Lesson path prefix as seen from another lesson page.
    pub lessons_from_lesson: String,
    pub lesson_suffix: String,
    /// Where the goal form posts. `None` disables the form.
    pub goal_action: Option<String>,
    pub return_style: LinkStyle,
}

impl SiteLinks {
    /// Layout used by the HTTP server.
    #[must_use]
    pub fn served() -> Self {
        Self {
            roadmap: "/".into(),
            lessons_from_roadmap: "/lessons/".into(),
            lessons_from_lesson: "/lessons/".into(),
            lesson_suffix: String::new(),
            goal_action: Some("/goals".into()),
            return_style: LinkStyle::Query,
        }
    }

    /// Layout of `build` output: `index.html` next to a `lessons/` directory.
    #[must_use]
    pub fn static_export() -> Self {
        Self {
            roadmap: "../index.html".into(),
            lessons_from_roadmap: "lessons/".into(),
            lessons_from_lesson: String::new(),
            lesson_suffix: ".html".into(),
            goal_action: None,
            return_style: LinkStyle::Query,
        }
    }

    /// Path of a lesson page, linked from the roadmap.
    #[must_use]
    pub fn lesson_href(&self, id: &LessonId) -> String {
        format!("{}{id}{}", self.lessons_from_roadmap, self.lesson_suffix)
    }

    /// Path of a lesson page, linked from another lesson.
    #[must_use]
    pub fn sibling_href(&self, id: &LessonId) -> String {
        format!("{}{id}{}", self.lessons_from_lesson, self.lesson_suffix)
    }

    /// "Back to roadmap" link carrying the learner's token, if any.
    #[must_use]
    pub fn return_href(&self, nav: &NavigationContext) -> String {
        nav.link(&self.roadmap, self.return_style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn served_links() {
        let links = SiteLinks::served();
        let id: LessonId = "bond-basics".parse().unwrap();
        assert_eq!(links.lesson_href(&id), "/lessons/bond-basics");
        assert_eq!(links.sibling_href(&id), "/lessons/bond-basics");
        assert_eq!(
            links.return_href(&NavigationContext::from_token(Some("step-2"))),
            "/?from=step-2"
        );
        assert_eq!(links.return_href(&NavigationContext::none()), "/");
        assert_eq!(links.goal_action.as_deref(), Some("/goals"));
    }

    #[test]
    fn static_links_are_relative() {
        let links = SiteLinks::static_export();
        let id: LessonId = "debt-payoff".parse().unwrap();
        assert_eq!(links.lesson_href(&id), "lessons/debt-payoff.html");
        assert_eq!(links.sibling_href(&id), "debt-payoff.html");
        assert_eq!(links.return_href(&NavigationContext::none()), "../index.html");
        assert_eq!(links.goal_action, None);
    }
}
