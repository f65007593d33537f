use lesson_core::calculator::{
    self, CurrencyFormat, ProjectionPoint, ScenarioOutcome, format_currency, format_percent,
};
use lesson_core::model::{ChartIllustration, ExampleScenario, Section};

use crate::vm::goal_vm::GoalFormVm;
use crate::vm::markdown_vm::markdown_to_html;

/// Request-scoped values some sections need (the goal form).
#[derive(Clone, Copy, Debug, Default)]
pub struct SectionContext<'a> {
    pub goal_action: Option<&'a str>,
    pub from: Option<&'a str>,
    pub return_href: &'a str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableVm {
    pub caption: Option<String>,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SideVm {
    pub label: String,
    pub points: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComparisonVm {
    pub title: String,
    pub left: SideVm,
    pub right: SideVm,
    pub verdict: Option<String>,
}

/// One horizontal bar. `width` is a CSS percentage of the widest bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BarVm {
    pub label: String,
    pub value: String,
    pub width: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChartBody {
    Bars {
        bars: Vec<BarVm>,
        summary: Option<String>,
    },
    /// The scenario has no finite result; shown as a note instead.
    Unavailable(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartVm {
    pub title: String,
    pub caption: Option<String>,
    pub body: ChartBody,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccordionItemVm {
    pub question: String,
    pub answer: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GoalPromptVm {
    pub title: String,
    /// `None` when goals cannot be saved (static export).
    pub form: Option<GoalFormVm>,
}

/// UI-ready form of a lesson section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SectionVm {
    Text {
        heading: Option<String>,
        html: String,
    },
    Table(TableVm),
    Comparison(ComparisonVm),
    Quote {
        text: String,
        attribution: Option<String>,
    },
    Chart(ChartVm),
    Callout {
        tone: &'static str,
        title: Option<String>,
        html: String,
    },
    Accordion(Vec<AccordionItemVm>),
    GoalPrompt(GoalPromptVm),
}

impl SectionVm {
    /// CSS modifier for the section wrapper.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            SectionVm::Text { .. } => "text",
            SectionVm::Table(_) => "table",
            SectionVm::Comparison(_) => "comparison",
            SectionVm::Quote { .. } => "quote",
            SectionVm::Chart(_) => "chart",
            SectionVm::Callout { .. } => "callout",
            SectionVm::Accordion(_) => "accordion",
            SectionVm::GoalPrompt(_) => "goal-prompt",
        }
    }
}

#[must_use]
pub fn map_section(section: &Section, ctx: &SectionContext<'_>) -> SectionVm {
    match section {
        Section::Text(block) => SectionVm::Text {
            heading: block.heading.clone(),
            html: markdown_to_html(&block.body),
        },
        Section::Table(table) => SectionVm::Table(TableVm {
            caption: table.caption.clone(),
            columns: table.columns.clone(),
            rows: table.rows.clone(),
        }),
        Section::Comparison(card) => SectionVm::Comparison(ComparisonVm {
            title: card.title.clone(),
            left: SideVm {
                label: card.left.label.clone(),
                points: card.left.points.clone(),
            },
            right: SideVm {
                label: card.right.label.clone(),
                points: card.right.points.clone(),
            },
            verdict: card.verdict.clone(),
        }),
        Section::Quote(quote) => SectionVm::Quote {
            text: quote.text.clone(),
            attribution: quote.attribution.clone(),
        },
        Section::Chart(chart) => SectionVm::Chart(map_chart(chart)),
        Section::Callout(callout) => SectionVm::Callout {
            tone: callout.tone.as_str(),
            title: callout.title.clone(),
            html: markdown_to_html(&callout.body),
        },
        Section::Accordion(accordion) => SectionVm::Accordion(
            accordion
                .items
                .iter()
                .map(|item| AccordionItemVm {
                    question: item.question.clone(),
                    answer: item.answer.clone(),
                })
                .collect(),
        ),
        Section::GoalPrompt(prompt) => SectionVm::GoalPrompt(GoalPromptVm {
            title: prompt.title.clone(),
            form: ctx.goal_action.map(|action| GoalFormVm {
                action: action.to_owned(),
                from: ctx.from.map(str::to_owned),
                name: prompt.suggested_name.clone().unwrap_or_default(),
                category: prompt.linked_category.clone().unwrap_or_default(),
                return_href: ctx.return_href.to_owned(),
                notice: None,
            }),
        }),
    }
}

// ─── Charts ────────────────────────────────────────────────────────────────────

#[must_use]
pub fn map_chart(chart: &ChartIllustration) -> ChartVm {
    let body = match calculator::derive(&chart.scenario) {
        Ok(outcome) => chart_body(&chart.scenario, outcome),
        Err(err) => ChartBody::Unavailable(format!("This example cannot be illustrated: {err}.")),
    };
    ChartVm {
        title: chart.title.clone(),
        caption: chart.caption.clone(),
        body,
    }
}

fn chart_body(scenario: &ExampleScenario, outcome: ScenarioOutcome) -> ChartBody {
    let usd = |value: f64| format_currency(value, &CurrencyFormat::USD);

    match (scenario, outcome) {
        (_, ScenarioOutcome::Projection(points)) => projection_body(&points),
        (
            ExampleScenario::LoanPayoff {
                balance,
                monthly_payment,
                ..
            },
            ScenarioOutcome::Payoff(payoff),
        ) => ChartBody::Bars {
            bars: bars(&[
                ("Amount borrowed".to_owned(), *balance),
                ("Interest paid".to_owned(), payoff.total_interest),
                ("Total repaid".to_owned(), balance + payoff.total_interest),
            ]),
            summary: Some(format!(
                "Paying {} a month clears the balance in {} months ({:.1}), with {} of interest.",
                format_currency(*monthly_payment, &CurrencyFormat::USD),
                payoff.whole_months,
                payoff.months,
                usd(payoff.total_interest),
            )),
        },
        (
            ExampleScenario::DelayedStart {
                years, delay_years, ..
            },
            ScenarioOutcome::Delayed(delayed),
        ) => ChartBody::Bars {
            bars: bars(&[
                (format!("Start now ({years} years)"), delayed.start_now),
                (
                    format!(
                        "Start in {delay_years} years ({} years)",
                        years.saturating_sub(*delay_years)
                    ),
                    delayed.start_later,
                ),
            ]),
            summary: Some(format!(
                "Waiting {delay_years} years costs {}.",
                usd(delayed.cost_of_waiting)
            )),
        },
        (
            ExampleScenario::PercentageChange {
                label_from,
                label_to,
                ..
            },
            ScenarioOutcome::Change { from, to, change },
        ) => ChartBody::Bars {
            bars: bars(&[(label_from.clone(), from), (label_to.clone(), to)]),
            summary: Some(match change {
                Some(change) if change >= 0.0 => format!("Change: +{}", format_percent(change, 1)),
                Some(change) => format!("Change: {}", format_percent(change, 1)),
                None => "Change: not defined from a zero starting value".to_owned(),
            }),
        },
        _ => ChartBody::Unavailable("This example cannot be illustrated.".to_owned()),
    }
}

fn projection_body(points: &[ProjectionPoint]) -> ChartBody {
    let labelled: Vec<(String, f64)> = points
        .iter()
        .map(|point| (format!("Year {}", point.year), point.value))
        .collect();
    let summary = match (points.first(), points.last()) {
        (Some(first), Some(last)) if last.year > first.year => Some(format!(
            "{} becomes {} after {} years.",
            format_currency(first.value, &CurrencyFormat::USD),
            format_currency(last.value, &CurrencyFormat::USD),
            last.year - first.year,
        )),
        _ => None,
    };
    ChartBody::Bars {
        bars: bars(&labelled),
        summary,
    }
}

/// Scale bars against the largest value; negative values draw as empty bars.
fn bars(values: &[(String, f64)]) -> Vec<BarVm> {
    let max = values
        .iter()
        .map(|(_, value)| *value)
        .fold(0.0_f64, f64::max);
    values
        .iter()
        .map(|(label, value)| {
            let pct = if max > 0.0 {
                (value.max(0.0) / max * 100.0).clamp(0.0, 100.0)
            } else {
                0.0
            };
            BarVm {
                label: label.clone(),
                value: format_currency(*value, &CurrencyFormat::USD),
                width: format!("{pct:.1}%"),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart(scenario: ExampleScenario) -> ChartVm {
        map_chart(&ChartIllustration {
            title: "t".into(),
            scenario,
            caption: None,
        })
    }

    #[test]
    fn compound_growth_bars_scale_to_final_year() {
        let vm = chart(ExampleScenario::compound_growth(10_000.0, 0.10, 10));
        let ChartBody::Bars { bars, summary } = vm.body else {
            panic!("expected bars");
        };
        assert_eq!(bars.len(), 11);
        assert_eq!(bars[0].value, "$10,000");
        assert_eq!(bars[1].value, "$11,000");
        assert_eq!(bars[10].value, "$25,937");
        assert_eq!(bars[10].width, "100.0%");
        assert_eq!(bars[0].width, "38.6%");
        assert_eq!(
            summary.as_deref(),
            Some("$10,000 becomes $25,937 after 10 years.")
        );
    }

    #[test]
    fn loan_payoff_summary_reports_months() {
        let vm = chart(ExampleScenario::loan_payoff(5_000.0, 0.21, 250.0));
        let ChartBody::Bars { bars, summary } = vm.body else {
            panic!("expected bars");
        };
        assert_eq!(bars[0].value, "$5,000");
        assert!(summary.unwrap().contains("in 25 months"));
    }

    #[test]
    fn non_amortizing_loan_is_a_note() {
        let vm = chart(ExampleScenario::loan_payoff(5_000.0, 0.21, 50.0));
        let ChartBody::Unavailable(note) = vm.body else {
            panic!("expected a note");
        };
        assert!(note.contains("cannot be illustrated"));
    }

    #[test]
    fn overflowing_growth_is_a_note_not_bars() {
        let vm = chart(ExampleScenario::compound_growth(1e306, 1.0, 40));
        let ChartBody::Unavailable(note) = vm.body else {
            panic!("expected a note, got {:?}", vm.body);
        };
        assert!(note.contains("cannot be illustrated"), "{note}");
        assert!(!note.contains("inf") && !note.contains("NaN"), "{note}");
    }

    #[test]
    fn percentage_change_shows_sign() {
        let vm = chart(ExampleScenario::PercentageChange {
            label_from: "Before".into(),
            from: 8_000.0,
            label_to: "After".into(),
            to: 10_000.0,
        });
        let ChartBody::Bars { summary, .. } = vm.body else {
            panic!("expected bars");
        };
        assert_eq!(summary.as_deref(), Some("Change: +25.0%"));
    }

    #[test]
    fn goal_prompt_has_form_only_when_goals_are_accepted() {
        let section = Section::goal_prompt("Save it", Some("Trip"), Some("Travel"));

        let SectionVm::GoalPrompt(prompt) = map_section(&section, &SectionContext::default())
        else {
            panic!("expected goal prompt");
        };
        assert!(prompt.form.is_none());

        let ctx = SectionContext {
            goal_action: Some("/goals"),
            from: Some("step-5"),
            return_href: "/?from=step-5",
        };
        let SectionVm::GoalPrompt(prompt) = map_section(&section, &ctx) else {
            panic!("expected goal prompt");
        };
        let form = prompt.form.unwrap();
        assert_eq!(form.from.as_deref(), Some("step-5"));
        assert_eq!(form.name, "Trip");
        assert_eq!(form.category, "Travel");
    }
}
