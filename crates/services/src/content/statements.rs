use lesson_core::calculator::{CurrencyFormat, format_currency, format_percent};
use lesson_core::model::{
    Accordion, AccordionItem, CalloutTone, ExampleScenario, ExampleTable, LessonDraft, Section,
};

use super::{amount_table, comparison, side};

pub(super) fn income_statement() -> LessonDraft {
    let revenue = 120_000.0;
    let cost_of_sales = -45_000.0;
    let gross_profit = revenue + cost_of_sales;
    let operating_expenses = -30_000.0;
    let operating_income = gross_profit + operating_expenses;
    let interest = -5_000.0;
    let taxes = -8_000.0;
    let net_income = operating_income + interest + taxes;

    LessonDraft::new("income-statement", "Reading an Income Statement")
        .summary("Follow a year of revenue down to the bottom line.")
        .section(Section::text(
            Some("What it shows"),
            "An income statement covers a **period of time**, usually a quarter or a year. \
             It starts with what the business sold and subtracts what it cost to run.\n\n\
             Read it top to bottom: every subtotal answers a different question.",
        ))
        .section(amount_table(
            "Example Co. for the year",
            &[
                ("Revenue", revenue),
                ("Cost of sales", cost_of_sales),
                ("Gross profit", gross_profit),
                ("Operating expenses", operating_expenses),
                ("Operating income", operating_income),
                ("Interest expense", interest),
                ("Income taxes", taxes),
                ("Net income", net_income),
            ],
        ))
        .section(Section::callout(
            CalloutTone::Tip,
            Some("Parentheses mean negative"),
            "Statements write costs as `(45,000)` rather than `-45,000`.",
        ))
        .section(Section::chart(
            "Revenue growth year over year",
            ExampleScenario::PercentageChange {
                label_from: "Last year".into(),
                from: 100_000.0,
                label_to: "This year".into(),
                to: revenue,
            },
            Some("Growth is measured against last year's figure."),
        ))
        .section(Section::Accordion(Accordion {
            items: vec![
                AccordionItem {
                    question: "Is net income the same as cash?".into(),
                    answer: "No. Sales on credit count as revenue before the cash arrives.".into(),
                },
                AccordionItem {
                    question: "Why look at gross profit?".into(),
                    answer: "It shows how much each sale contributes before overhead.".into(),
                },
            ],
        }))
}

pub(super) fn bond_basics() -> LessonDraft {
    let face = 1_000.0;
    let coupon_rate = 0.05;
    let years = 5;
    let coupon = face * coupon_rate;

    let rows = (1..=years)
        .map(|year| {
            let principal = if year == years { face } else { 0.0 };
            vec![
                format!("Year {year}"),
                format_currency(coupon, &CurrencyFormat::USD),
                format_currency(principal, &CurrencyFormat::USD),
                format_currency(coupon + principal, &CurrencyFormat::USD),
            ]
        })
        .collect();

    LessonDraft::new("bond-basics", "Bond Basics")
        .summary("A bond is a loan you make, paid back with interest.")
        .section(Section::text(
            None,
            "When you buy a bond you lend money to a government or a company. \
             In return you receive regular **coupon** payments and your money back \
             at **maturity**.",
        ))
        .section(Section::Table(ExampleTable {
            caption: Some(format!(
                "{} bond paying {} for {years} years",
                format_currency(face, &CurrencyFormat::USD),
                format_percent(coupon_rate, 1),
            )),
            columns: vec![
                "Year".into(),
                "Coupon".into(),
                "Principal".into(),
                "Total".into(),
            ],
            rows,
        }))
        .section(comparison(
            "Stocks vs bonds",
            side(
                "Stocks",
                &["You own part of a company", "Returns vary widely", "Higher long-run growth"],
            ),
            side(
                "Bonds",
                &["You lend to an issuer", "Payments set in advance", "Lower, steadier returns"],
            ),
            Some("Most portfolios hold some of each."),
        ))
        .section(Section::callout(
            CalloutTone::Warning,
            Some("Prices move when rates move"),
            "If rates rise after you buy, newer bonds pay more and yours sells for less.",
        ))
}
