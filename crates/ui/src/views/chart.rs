use dioxus::prelude::*;

use crate::vm::{ChartBody, ChartVm};

/// Horizontal bar chart built from plain `div`s, with the figures repeated in
/// a table underneath.
#[component]
pub fn ChartView(chart: ChartVm) -> Element {
    rsx! {
        figure { class: "chart",
            figcaption { "{chart.title}" }
            match &chart.body {
                ChartBody::Bars { bars, summary } => rsx! {
                    div { class: "bars",
                        for bar in bars.iter() {
                            div { class: "bar-row",
                                span { class: "bar-label", "{bar.label}" }
                                div { class: "bar-track",
                                    div { class: "bar", style: "width: {bar.width}" }
                                }
                                span { class: "bar-value", "{bar.value}" }
                            }
                        }
                    }
                    table { class: "chart-data",
                        tbody {
                            for bar in bars.iter() {
                                tr {
                                    th { "{bar.label}" }
                                    td { "{bar.value}" }
                                }
                            }
                        }
                    }
                    if let Some(line) = summary {
                        p { class: "chart-summary", "{line}" }
                    }
                },
                ChartBody::Unavailable(note) => rsx! {
                    p { class: "chart-unavailable", "{note}" }
                },
            }
            if let Some(caption) = &chart.caption {
                p { class: "chart-caption", "{caption}" }
            }
        }
    }
}
