use dioxus::prelude::*;

#[component]
pub fn NotFoundView(message: String, return_href: String) -> Element {
    rsx! {
        article { class: "not-found",
            h1 { "Lesson not found" }
            p { "{message}" }
            a { class: "return", href: "{return_href}", "Return to roadmap" }
        }
    }
}
