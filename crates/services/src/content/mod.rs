//! Built-in lessons and the default roadmap.
//!
//! Lessons are authored as `LessonDraft`s; the catalog validates them. The
//! figures in tables are formatted with the calculator so they follow the same
//! rules as charts.

mod behavior;
mod growth;
mod statements;

use lesson_core::calculator::format_accounting;
use lesson_core::model::{
    ComparisonCard, ComparisonSide, ExampleTable, LessonDraft, ParseIdError, Roadmap, RoadmapStep,
    Section,
};

/// Every built-in lesson, in roadmap order.
#[must_use]
pub fn builtin_lessons() -> Vec<LessonDraft> {
    vec![
        statements::income_statement(),
        statements::bond_basics(),
        growth::opportunity_cost_of_waiting(),
        growth::retirement_income(),
        growth::debt_payoff(),
        behavior::loss_aversion(),
        behavior::kids_save_spend_share(),
    ]
}

const ROADMAP_STEPS: [(&str, &str, &str); 7] = [
    ("step-1", "Read an income statement", "income-statement"),
    ("step-2", "Understand bonds", "bond-basics"),
    ("step-3", "The cost of waiting", "opportunity-cost-of-waiting"),
    ("step-4", "Plan retirement income", "retirement-income"),
    ("step-5", "Pay down debt", "debt-payoff"),
    ("step-6", "Why losses sting", "loss-aversion"),
    ("step-7", "Teach kids about money", "kids-save-spend-share"),
];

/// The default roadmap over the built-in lessons.
///
/// # Errors
///
/// Returns `ParseIdError` if a step or lesson id is not a slug.
pub fn builtin_roadmap() -> Result<Roadmap, ParseIdError> {
    let steps = ROADMAP_STEPS
        .iter()
        .map(|(id, title, lesson)| -> Result<RoadmapStep, ParseIdError> {
            Ok(RoadmapStep {
                id: id.parse()?,
                title: (*title).to_owned(),
                lesson_id: lesson.parse()?,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Roadmap {
        title: "Personal Finance Roadmap".into(),
        steps,
    })
}

// ─── Helpers ───────────────────────────────────────────────────────────────────

/// Two-column table of labelled amounts in accounting format.
fn amount_table(caption: &str, rows: &[(&str, f64)]) -> Section {
    Section::Table(ExampleTable {
        caption: Some(caption.to_owned()),
        columns: vec!["Line item".into(), "Amount".into()],
        rows: rows
            .iter()
            .map(|(label, amount)| vec![(*label).to_owned(), format_accounting(*amount)])
            .collect(),
    })
}

fn side(label: &str, points: &[&str]) -> ComparisonSide {
    ComparisonSide {
        label: label.to_owned(),
        points: points.iter().map(|p| (*p).to_owned()).collect(),
    }
}

fn comparison(
    title: &str,
    left: ComparisonSide,
    right: ComparisonSide,
    verdict: Option<&str>,
) -> Section {
    Section::Comparison(ComparisonCard {
        title: title.to_owned(),
        left,
        right,
        verdict: verdict.map(str::to_owned),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn builtin_lessons_validate() {
        for draft in builtin_lessons() {
            let id = draft.id.clone();
            draft
                .validate()
                .unwrap_or_else(|err| panic!("{id} is invalid: {err}"));
        }
    }

    #[test]
    fn roadmap_covers_every_builtin_lesson_once() {
        let roadmap = builtin_roadmap().unwrap().validate().unwrap();
        let linked: HashSet<_> = roadmap
            .steps
            .iter()
            .map(|s| s.lesson_id.to_string())
            .collect();
        let lessons: HashSet<_> = builtin_lessons().into_iter().map(|d| d.id).collect();
        assert_eq!(linked, lessons);
        assert_eq!(roadmap.steps.len(), lessons.len());
    }

    #[test]
    fn amount_table_uses_accounting_format() {
        let Section::Table(table) = amount_table("P&L", &[("Costs", -450.0), ("Sales", 1200.0)])
        else {
            panic!("expected a table");
        };
        assert_eq!(table.rows[0][1], "(450)");
        assert_eq!(table.rows[1][1], "1,200");
    }
}
