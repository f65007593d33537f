use lesson_core::calculator::{CurrencyFormat, format_currency, format_percent};
use lesson_core::model::{CalloutTone, ExampleScenario, ExampleTable, LessonDraft, Section};

pub(super) fn opportunity_cost_of_waiting() -> LessonDraft {
    LessonDraft::new("opportunity-cost-of-waiting", "The Opportunity Cost of Waiting")
        .summary("Starting ten years late costs more than ten years of growth.")
        .section(Section::text(
            Some("Time does the heavy lifting"),
            "Compounding means growth earns growth. The earliest years matter most \
             because everything after builds on them.",
        ))
        .section(Section::chart(
            "$10,000 growing at 10% a year",
            ExampleScenario::compound_growth(10_000.0, 0.10, 10),
            Some("After one year: $11,000. After ten: about $25,937."),
        ))
        .section(Section::chart(
            "Start now or in ten years",
            ExampleScenario::DelayedStart {
                principal: 10_000.0,
                annual_rate: 0.07,
                years: 30,
                delay_years: 10,
            },
            Some("Both invest the same amount; only the start date differs."),
        ))
        .section(Section::quote(
            "The best time to plant a tree was twenty years ago. The second best time is now.",
            Some("Proverb"),
        ))
        .section(Section::callout(
            CalloutTone::Tip,
            None,
            "Automatic monthly transfers remove the temptation to wait for a better moment.",
        ))
}

pub(super) fn retirement_income() -> LessonDraft {
    let annual_need = 40_000.0;
    let inflation = 0.03;

    LessonDraft::new("retirement-income", "Planning Retirement Income")
        .summary("Your spending need grows with inflation every year.")
        .section(Section::text(
            None,
            format!(
                "If you need {} a year today, inflation of {} raises that need each year. \
                 Plans that ignore it run short in later decades.",
                format_currency(annual_need, &CurrencyFormat::USD),
                format_percent(inflation, 1),
            ),
        ))
        .section(Section::chart(
            "Annual spending need with 3% inflation",
            ExampleScenario::InflationAdjusted {
                annual_need,
                inflation_rate: inflation,
                years: 25,
            },
            None,
        ))
        .section(Section::callout(
            CalloutTone::Warning,
            Some("Longevity risk"),
            "A plan should last longer than the average life expectancy, not exactly as long.",
        ))
        .section(Section::goal_prompt(
            "Set a retirement savings goal",
            Some("Retirement nest egg"),
            Some("Retirement"),
        ))
}

pub(super) fn debt_payoff() -> LessonDraft {
    let balance = 5_000.0;
    let apr = 0.21;

    LessonDraft::new("debt-payoff", "Paying Off High-Interest Debt")
        .summary("A larger monthly payment shortens the loan and cuts total interest.")
        .section(Section::text(
            Some("How card interest works"),
            "Each month the lender adds interest on the remaining balance. \
             Only the part of your payment above that interest reduces what you owe.",
        ))
        .section(Section::Table(ExampleTable {
            caption: Some("The example balance".into()),
            columns: vec!["Balance".into(), "APR".into(), "Monthly rate".into()],
            rows: vec![vec![
                format_currency(balance, &CurrencyFormat::USD),
                format_percent(apr, 1),
                format_percent(apr / 12.0, 2),
            ]],
        }))
        .section(Section::chart(
            "Paying $250 a month",
            ExampleScenario::loan_payoff(balance, apr, 250.0),
            None,
        ))
        .section(Section::chart(
            "Paying $400 a month",
            ExampleScenario::loan_payoff(balance, apr, 400.0),
            Some("The extra $150 a month saves more than a year of payments."),
        ))
        .section(Section::callout(
            CalloutTone::Warning,
            Some("Minimum payments"),
            "A payment at or below the monthly interest never pays the balance down.",
        ))
        .section(Section::goal_prompt(
            "Make paying this off a goal",
            Some("Pay off credit card"),
            Some("Debt"),
        ))
}
