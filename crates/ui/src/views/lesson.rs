use dioxus::prelude::*;

use crate::views::SectionView;
use crate::vm::LessonPageVm;

#[component]
pub fn LessonView(page: LessonPageVm) -> Element {
    rsx! {
        nav { class: "breadcrumb",
            a { class: "return", href: "{page.return_href}", "\u{2190} Back to roadmap" }
            if let Some(step) = &page.step_title {
                span { class: "step", "{step}" }
            }
        }

        article { class: "lesson",
            header {
                h1 { "{page.title}" }
                if let Some(lead) = &page.summary {
                    p { class: "lead", "{lead}" }
                }
            }

            for (index, block) in page.sections.iter().enumerate() {
                SectionView { key: "{index}", block: block.clone() }
            }
        }

        footer { class: "lesson-footer",
            if let Some(next) = &page.next {
                a { class: "next", href: "{next.href}", "Next: {next.title} \u{2192}" }
            }
            a { class: "return", href: "{page.return_href}", "Return to roadmap" }
        }
    }
}
