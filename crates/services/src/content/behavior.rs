use lesson_core::calculator::{CurrencyFormat, format_currency};
use lesson_core::model::{
    Accordion, AccordionItem, CalloutTone, ExampleScenario, ExampleTable, LessonDraft, Section,
};

use super::{comparison, side};

pub(super) fn loss_aversion() -> LessonDraft {
    LessonDraft::new("loss-aversion", "Loss Aversion")
        .summary("Losses feel about twice as strong as gains of the same size.")
        .section(Section::text(
            Some("Why a drop hurts more"),
            "People weigh a loss more heavily than an equal gain. \
             That bias pushes investors to sell after a fall, locking the loss in.",
        ))
        .section(Section::chart(
            "Recovering from a 20% drop",
            ExampleScenario::PercentageChange {
                label_from: "After the drop".into(),
                from: 8_000.0,
                label_to: "Back to the start".into(),
                to: 10_000.0,
            },
            Some("A 20% loss needs a 25% gain to break even."),
        ))
        .section(comparison(
            "Two ways to describe the same choice",
            side("Framed as a gain", &["Keep $50 of $100", "Most people take it"]),
            side("Framed as a loss", &["Lose $50 of $100", "Most people gamble instead"]),
            Some("The outcome is identical; only the wording changed."),
        ))
        .section(Section::quote(
            "Losses loom larger than gains.",
            Some("Kahneman and Tversky"),
        ))
        .section(Section::Accordion(Accordion {
            items: vec![
                AccordionItem {
                    question: "How can I counter it?".into(),
                    answer: "Decide your plan in advance and review it on a schedule, not after headlines.".into(),
                },
                AccordionItem {
                    question: "Is selling after a loss always wrong?".into(),
                    answer: "No, but the reason should be the plan, not the feeling.".into(),
                },
            ],
        }))
}

pub(super) fn kids_save_spend_share() -> LessonDraft {
    let allowance = 10.0;
    let split = [("Save", 0.5), ("Spend", 0.4), ("Share", 0.1)];

    let rows = split
        .iter()
        .map(|(jar, share)| {
            vec![
                (*jar).to_owned(),
                format!("{:.0}%", share * 100.0),
                format_currency(allowance * share, &CurrencyFormat::USD_CENTS),
            ]
        })
        .collect();

    LessonDraft::new("kids-save-spend-share", "Save, Spend, Share")
        .summary("Three jars turn an allowance into a first budget.")
        .section(Section::text(
            None,
            "Give each jar a job. Every time money comes in, it is split between them \
             before anything is bought.",
        ))
        .section(Section::Table(ExampleTable {
            caption: Some(format!(
                "Splitting a {} allowance",
                format_currency(allowance, &CurrencyFormat::USD_CENTS)
            )),
            columns: vec!["Jar".into(), "Share".into(), "Amount".into()],
            rows,
        }))
        .section(comparison(
            "Needs vs wants",
            side("Needs", &["School lunch", "Bus fare"]),
            side("Wants", &["Video game", "Extra snacks"]),
            None,
        ))
        .section(Section::callout(
            CalloutTone::Tip,
            Some("Let them choose"),
            "Small mistakes with a small allowance are cheap lessons.",
        ))
}
