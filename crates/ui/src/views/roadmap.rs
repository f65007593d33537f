use dioxus::prelude::*;

use crate::vm::RoadmapVm;

#[component]
pub fn RoadmapView(roadmap: RoadmapVm) -> Element {
    rsx! {
        article { class: "roadmap",
            h1 { "{roadmap.title}" }
            ol { class: "steps",
                for step in roadmap.steps.iter() {
                    li {
                        key: "{step.anchor}",
                        id: "{step.anchor}",
                        class: step.css_class(),
                        span { class: "step-number", "{step.number}" }
                        a { href: "{step.href}", "{step.title}" }
                        span { class: "step-lesson", "{step.lesson_title}" }
                        if step.current {
                            strong { class: "here", "You are here" }
                        }
                    }
                }
            }
        }
    }
}
