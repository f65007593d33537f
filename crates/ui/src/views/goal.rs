use dioxus::prelude::*;

use crate::vm::{GoalFormVm, GoalVm};

/// Plain HTML form; works without scripts.
#[component]
pub fn GoalForm(form: GoalFormVm) -> Element {
    rsx! {
        form { class: "goal-form", method: "post", action: "{form.action}",
            if let Some(notice) = &form.notice {
                p { class: "callout callout-{notice.tone}", "{notice.text}" }
            }
            if let Some(from) = &form.from {
                input { r#type: "hidden", name: "from", value: "{from}" }
            }

            label { r#for: "goal-name", "Goal name" }
            input {
                id: "goal-name",
                r#type: "text",
                name: "name",
                value: "{form.name}",
                required: true,
            }

            label { r#for: "goal-target", "Target amount (optional)" }
            input {
                id: "goal-target",
                r#type: "number",
                name: "target_amount",
                min: "0.01",
                step: "0.01",
            }

            label { r#for: "goal-category", "Category (optional)" }
            input {
                id: "goal-category",
                r#type: "text",
                name: "linked_category",
                value: "{form.category}",
            }

            label { r#for: "goal-description", "Notes (optional)" }
            textarea { id: "goal-description", name: "description", rows: "3" }

            button { r#type: "submit", "Save goal" }
        }
    }
}

#[component]
pub fn GoalPageView(form: GoalFormVm, goals: Vec<GoalVm>) -> Element {
    rsx! {
        nav { class: "breadcrumb",
            a { class: "return", href: "{form.return_href}", "\u{2190} Back to roadmap" }
        }
        article { class: "goals",
            h1 { "Your goals" }
            GoalForm { form: form.clone() }

            if goals.is_empty() {
                p { class: "note", "No goals saved yet." }
            } else {
                ul { class: "goal-list",
                    for goal in goals.iter() {
                        li { key: "{goal.id}", class: goal.css_class(),
                            strong { "{goal.name}" }
                            if let Some(target) = &goal.target {
                                span { class: "goal-target", " {target}" }
                            }
                            if let Some(category) = &goal.category {
                                span { class: "goal-category", " ({category})" }
                            }
                            if let Some(description) = &goal.description {
                                p { "{description}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
