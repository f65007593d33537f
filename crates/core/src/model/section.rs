use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::scenario::{ExampleScenario, ScenarioError};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SectionError {
    #[error("text body cannot be empty")]
    EmptyBody,

    #[error("table must declare at least one column")]
    NoColumns,

    #[error("table row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("comparison sides need a label")]
    UnlabelledSide,

    #[error("quote text cannot be empty")]
    EmptyQuote,

    #[error("accordion needs at least one item")]
    EmptyAccordion,

    #[error("goal prompt needs a title")]
    UntitledGoalPrompt,

    #[error("chart scenario: {0}")]
    Scenario(#[from] ScenarioError),
}

//
// ─── SECTION VARIANTS ──────────────────────────────────────────────────────────
//

/// Explanatory prose. `body` is Markdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    pub body: String,
}

/// A worked example laid out as rows of display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleTable {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonSide {
    pub label: String,
    #[serde(default)]
    pub points: Vec<String>,
}

/// Two options side by side ("stocks vs bonds", "needs vs wants").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonCard {
    pub title: String,
    pub left: ComparisonSide,
    pub right: ComparisonSide,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verdict: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteCallout {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribution: Option<String>,
}

/// A static chart whose data points are derived from a scenario at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartIllustration {
    pub title: String,
    pub scenario: ExampleScenario,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalloutTone {
    #[default]
    Info,
    Tip,
    Warning,
}

impl CalloutTone {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CalloutTone::Info => "info",
            CalloutTone::Tip => "tip",
            CalloutTone::Warning => "warning",
        }
    }
}

/// Alert box. `body` is Markdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Callout {
    #[serde(default)]
    pub tone: CalloutTone,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccordionItem {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accordion {
    pub items: Vec<AccordionItem>,
}

/// Invitation to turn the lesson into a savings goal. Rendered as a goal form
/// when the page is served, as plain text otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalPrompt {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_category: Option<String>,
}

//
// ─── SECTION ───────────────────────────────────────────────────────────────────
//

/// One typed content block of a lesson.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Section {
    Text(TextBlock),
    Table(ExampleTable),
    Comparison(ComparisonCard),
    Quote(QuoteCallout),
    Chart(ChartIllustration),
    Callout(Callout),
    Accordion(Accordion),
    GoalPrompt(GoalPrompt),
}

impl Section {
    #[must_use]
    pub fn text(heading: Option<&str>, body: impl Into<String>) -> Self {
        Section::Text(TextBlock {
            heading: heading.map(str::to_owned),
            body: body.into(),
        })
    }

    #[must_use]
    pub fn quote(text: impl Into<String>, attribution: Option<&str>) -> Self {
        Section::Quote(QuoteCallout {
            text: text.into(),
            attribution: attribution.map(str::to_owned),
        })
    }

    #[must_use]
    pub fn callout(tone: CalloutTone, title: Option<&str>, body: impl Into<String>) -> Self {
        Section::Callout(Callout {
            tone,
            title: title.map(str::to_owned),
            body: body.into(),
        })
    }

    #[must_use]
    pub fn chart(
        title: impl Into<String>,
        scenario: ExampleScenario,
        caption: Option<&str>,
    ) -> Self {
        Section::Chart(ChartIllustration {
            title: title.into(),
            scenario,
            caption: caption.map(str::to_owned),
        })
    }

    #[must_use]
    pub fn goal_prompt(
        title: impl Into<String>,
        suggested_name: Option<&str>,
        linked_category: Option<&str>,
    ) -> Self {
        Section::GoalPrompt(GoalPrompt {
            title: title.into(),
            suggested_name: suggested_name.map(str::to_owned),
            linked_category: linked_category.map(str::to_owned),
        })
    }

    /// Build a table from string-like cells.
    #[must_use]
    pub fn table<const N: usize>(
        caption: Option<&str>,
        columns: [&str; N],
        rows: &[[&str; N]],
    ) -> Self {
        Section::Table(ExampleTable {
            caption: caption.map(str::to_owned),
            columns: columns.iter().map(|c| (*c).to_owned()).collect(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|c| (*c).to_owned()).collect())
                .collect(),
        })
    }

    /// Short variant name, used in logs and CSS class names.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Section::Text(_) => "text",
            Section::Table(_) => "table",
            Section::Comparison(_) => "comparison",
            Section::Quote(_) => "quote",
            Section::Chart(_) => "chart",
            Section::Callout(_) => "callout",
            Section::Accordion(_) => "accordion",
            Section::GoalPrompt(_) => "goal_prompt",
        }
    }

    /// Check the structural shape of the block.
    ///
    /// # Errors
    ///
    /// Returns `SectionError` describing the first problem found.
    pub fn validate(&self) -> Result<(), SectionError> {
        match self {
            Section::Text(block) => {
                if block.body.trim().is_empty() {
                    return Err(SectionError::EmptyBody);
                }
            }
            Section::Table(table) => {
                let expected = table.columns.len();
                if expected == 0 {
                    return Err(SectionError::NoColumns);
                }
                if let Some((row, cells)) = table
                    .rows
                    .iter()
                    .enumerate()
                    .find(|(_, cells)| cells.len() != expected)
                {
                    return Err(SectionError::RaggedRow {
                        row,
                        expected,
                        found: cells.len(),
                    });
                }
            }
            Section::Comparison(card) => {
                if card.left.label.trim().is_empty() || card.right.label.trim().is_empty() {
                    return Err(SectionError::UnlabelledSide);
                }
            }
            Section::Quote(quote) => {
                if quote.text.trim().is_empty() {
                    return Err(SectionError::EmptyQuote);
                }
            }
            Section::Callout(callout) => {
                if callout.body.trim().is_empty() {
                    return Err(SectionError::EmptyBody);
                }
            }
            Section::Accordion(accordion) => {
                if accordion.items.is_empty() {
                    return Err(SectionError::EmptyAccordion);
                }
            }
            Section::GoalPrompt(prompt) => {
                if prompt.title.trim().is_empty() {
                    return Err(SectionError::UntitledGoalPrompt);
                }
            }
            Section::Chart(chart) => chart.scenario.validate()?,
        }
        Ok(())
    }
}
