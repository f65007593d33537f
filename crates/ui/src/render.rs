//! Whole-page rendering to HTML strings.

use dioxus::prelude::*;
use lesson_core::model::Goal;
use services::{LessonPage, RoadmapPage};

use crate::views::{
    GoalPageView, GoalPageViewProps, LessonView, LessonViewProps, NotFoundView,
    NotFoundViewProps, RoadmapView, RoadmapViewProps,
};
use crate::vm::{GoalFormVm, escape_text, map_goals, map_lesson_page, map_roadmap};

const STYLESHEET: &str = include_str!("lessons.css");

#[must_use]
pub fn render_lesson_page(page: &LessonPage<'_>) -> String {
    let vm = map_lesson_page(page);
    let title = vm.title.clone();
    let body = render_component(LessonView, LessonViewProps { page: vm });
    document(&title, &body)
}

#[must_use]
pub fn render_roadmap_page(page: &RoadmapPage<'_>) -> String {
    let vm = map_roadmap(page);
    let title = vm.title.clone();
    let body = render_component(RoadmapView, RoadmapViewProps { roadmap: vm });
    document(&title, &body)
}

#[must_use]
pub fn render_goal_page(form: GoalFormVm, goals: &[Goal]) -> String {
    let body = render_component(
        GoalPageView,
        GoalPageViewProps {
            form,
            goals: map_goals(goals),
        },
    );
    document("Your goals", &body)
}

#[must_use]
pub fn render_not_found(id: &str, return_href: &str) -> String {
    let body = render_component(
        NotFoundView,
        NotFoundViewProps {
            message: format!("There is no lesson called \u{201c}{id}\u{201d}."),
            return_href: return_href.to_owned(),
        },
    );
    document("Lesson not found", &body)
}

fn render_component<P: Clone + 'static>(root: fn(P) -> Element, props: P) -> String {
    let mut dom = VirtualDom::new_with_props(root, props);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn document(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n<style>{STYLESHEET}</style>\n</head>\n\
         <body>\n<main>{body}</main>\n</body>\n</html>\n",
        escape_text(title),
    )
}
