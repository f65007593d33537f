use dioxus::prelude::*;

use crate::views::{ChartView, GoalForm};
use crate::vm::{ComparisonVm, GoalPromptVm, SectionVm, SideVm, TableVm};

/// One lesson section. Each `SectionVm` variant has exactly one layout.
#[component]
pub fn SectionView(block: SectionVm) -> Element {
    let kind = block.kind();
    let body = match block {
        SectionVm::Text { heading, html } => rsx! {
            if let Some(heading) = heading {
                h2 { "{heading}" }
            }
            div { class: "prose", dangerous_inner_html: "{html}" }
        },
        SectionVm::Table(data) => rsx! {
            TableBlock { data }
        },
        SectionVm::Comparison(card) => rsx! {
            ComparisonBlock { card }
        },
        SectionVm::Quote { text, attribution } => rsx! {
            blockquote {
                p { "{text}" }
                if let Some(who) = attribution {
                    footer { cite { "{who}" } }
                }
            }
        },
        SectionVm::Chart(chart) => rsx! {
            ChartView { chart }
        },
        SectionVm::Callout { tone, title, html } => rsx! {
            aside { class: "callout callout-{tone}",
                if let Some(title) = title {
                    strong { class: "callout-title", "{title}" }
                }
                div { class: "prose", dangerous_inner_html: "{html}" }
            }
        },
        SectionVm::Accordion(items) => rsx! {
            div { class: "faq",
                for (index, item) in items.into_iter().enumerate() {
                    details { key: "{index}",
                        summary { "{item.question}" }
                        p { "{item.answer}" }
                    }
                }
            }
        },
        SectionVm::GoalPrompt(GoalPromptVm { title, form }) => rsx! {
            h2 { "{title}" }
            match form {
                Some(form) => rsx! {
                    GoalForm { form }
                },
                None => rsx! {
                    p { class: "note",
                        "Goals can be saved when the lessons are served by the lesson server."
                    }
                },
            }
        },
    };

    rsx! {
        section { class: "block block-{kind}", {body} }
    }
}

#[component]
fn TableBlock(data: TableVm) -> Element {
    rsx! {
        table { class: "example",
            if let Some(text) = &data.caption {
                caption { "{text}" }
            }
            thead {
                tr {
                    for column in data.columns.iter() {
                        th { "{column}" }
                    }
                }
            }
            tbody {
                for row in data.rows.iter() {
                    tr {
                        for cell in row.iter() {
                            td { "{cell}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ComparisonBlock(card: ComparisonVm) -> Element {
    rsx! {
        h2 { "{card.title}" }
        div { class: "comparison",
            SideCard { side: card.left.clone() }
            SideCard { side: card.right.clone() }
        }
        if let Some(verdict) = &card.verdict {
            p { class: "verdict", "{verdict}" }
        }
    }
}

#[component]
fn SideCard(side: SideVm) -> Element {
    rsx! {
        div { class: "side",
            h3 { "{side.label}" }
            ul {
                for point in side.points.iter() {
                    li { "{point}" }
                }
            }
        }
    }
}
