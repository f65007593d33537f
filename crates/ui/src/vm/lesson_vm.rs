use services::LessonPage;

use crate::vm::section_vm::{SectionContext, SectionVm, map_section};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NextVm {
    pub title: String,
    pub href: String,
}

/// UI-ready representation of a lesson page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonPageVm {
    pub title: String,
    pub summary: Option<String>,
    pub sections: Vec<SectionVm>,
    pub return_href: String,
    /// Title of the roadmap step the learner came from.
    pub step_title: Option<String>,
    pub next: Option<NextVm>,
}

#[must_use]
pub fn map_lesson_page(page: &LessonPage<'_>) -> LessonPageVm {
    let ctx = SectionContext {
        goal_action: page.goal_action,
        from: page.nav.token(),
        return_href: &page.return_href,
    };

    LessonPageVm {
        title: page.lesson.title().to_owned(),
        summary: page.lesson.summary().map(str::to_owned),
        sections: page
            .lesson
            .sections()
            .iter()
            .map(|section| map_section(section, &ctx))
            .collect(),
        return_href: page.return_href.clone(),
        step_title: page.step.map(|step| step.title.clone()),
        next: page.next.as_ref().map(|next| NextVm {
            title: next.title.clone(),
            href: next.href.clone(),
        }),
    }
}
