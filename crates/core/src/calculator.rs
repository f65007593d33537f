//! Illustrative arithmetic shared by every lesson.
//!
//! Everything here is a pure function of its inputs. Outputs are recomputed on
//! each render and never persisted.

use thiserror::Error;

use crate::model::{ExampleScenario, MAX_YEARS};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum CalculatorError {
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    #[error("payment does not cover the monthly interest of {monthly_interest:.2}")]
    PaymentTooLow { monthly_interest: f64 },

    #[error("the figures are too large to show")]
    NonFinite,
}

//
// ─── FORMATTING ────────────────────────────────────────────────────────────────
//

/// Currency display settings. A typed struct so an invalid configuration
/// cannot be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub symbol: &'static str,
    pub decimals: usize,
}

impl CurrencyFormat {
    /// No symbol, whole units. Used for financial-statement tables.
    pub const PLAIN: Self = Self {
        symbol: "",
        decimals: 0,
    };

    pub const USD: Self = Self {
        symbol: "$",
        decimals: 0,
    };

    pub const USD_CENTS: Self = Self {
        symbol: "$",
        decimals: 2,
    };
}

/// Absolute value with thousands grouping, rounded to `decimals`.
#[must_use]
pub fn format_grouped(value: f64, decimals: usize) -> String {
    let raw = format!("{:.*}", decimals, value.abs());
    match raw.split_once('.') {
        Some((int, frac)) => format!("{}.{frac}", group_thousands(int)),
        None => group_thousands(&raw),
    }
}

/// Accounting-style currency: negatives are wrapped in parentheses.
///
/// ```
/// use lesson_core::calculator::{format_currency, CurrencyFormat};
/// assert_eq!(format_currency(-1234.5, &CurrencyFormat::USD_CENTS), "($1,234.50)");
/// ```
#[must_use]
pub fn format_currency(value: f64, format: &CurrencyFormat) -> String {
    let body = format!("{}{}", format.symbol, format_grouped(value, format.decimals));
    if value < 0.0 {
        format!("({body})")
    } else {
        body
    }
}

/// `-450 → "(450)"`, `1234567 → "1,234,567"`.
#[must_use]
pub fn format_accounting(value: f64) -> String {
    format_currency(value, &CurrencyFormat::PLAIN)
}

/// `0.21 → "21.0%"` with one decimal.
#[must_use]
pub fn format_percent(rate: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, rate * 100.0)
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

//
// ─── GROWTH ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionPoint {
    pub year: u32,
    pub value: f64,
}

/// `principal × (1 + rate)^years`
#[must_use]
pub fn compound_value(principal: f64, rate: f64, years: u32) -> f64 {
    principal * (1.0 + rate).powf(f64::from(years))
}

/// One point per year from 0 through `years` inclusive.
#[must_use]
pub fn compound_growth(principal: f64, rate: f64, years: u32) -> Vec<ProjectionPoint> {
    (0..=years)
        .map(|year| ProjectionPoint {
            year,
            value: compound_value(principal, rate, year),
        })
        .collect()
}

/// Yearly spending need grown by inflation.
#[must_use]
pub fn inflation_adjusted(
    annual_need: f64,
    inflation_rate: f64,
    years: u32,
) -> Vec<ProjectionPoint> {
    compound_growth(annual_need, inflation_rate, years)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DelayedStart {
    pub start_now: f64,
    pub start_later: f64,
    pub cost_of_waiting: f64,
}

/// Value at `years` when investing now versus after `delay_years`.
#[must_use]
pub fn delayed_start(principal: f64, rate: f64, years: u32, delay_years: u32) -> DelayedStart {
    let start_now = compound_value(principal, rate, years);
    let start_later = compound_value(principal, rate, years.saturating_sub(delay_years));
    DelayedStart {
        start_now,
        start_later,
        cost_of_waiting: start_now - start_later,
    }
}

/// `(to - from) / |from|`, or `None` when `from` is zero.
#[must_use]
pub fn percentage_change(from: f64, to: f64) -> Option<f64> {
    if from == 0.0 {
        None
    } else {
        Some((to - from) / from.abs())
    }
}

//
// ─── LOANS ─────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanPayoff {
    /// Exact solution of the amortization identity.
    pub months: f64,
    /// `months` rounded up; the last payment is partial.
    pub whole_months: u32,
    pub total_interest: f64,
}

/// Months to pay off `balance` at `apr` with a fixed monthly payment.
///
/// Solves `n = -ln(1 - balance·i / payment) / ln(1 + i)` with `i = apr / 12`.
///
/// # Errors
///
/// `InvalidInput` for non-finite or non-positive inputs (a zero APR is fine),
/// `PaymentTooLow` when the payment never reduces the balance.
pub fn loan_payoff(balance: f64, apr: f64, payment: f64) -> Result<LoanPayoff, CalculatorError> {
    if !balance.is_finite() || balance <= 0.0 {
        return Err(CalculatorError::InvalidInput("balance must be positive"));
    }
    if !payment.is_finite() || payment <= 0.0 {
        return Err(CalculatorError::InvalidInput("payment must be positive"));
    }
    if !apr.is_finite() || apr < 0.0 {
        return Err(CalculatorError::InvalidInput("APR cannot be negative"));
    }

    let monthly_rate = apr / 12.0;
    let months = if monthly_rate == 0.0 {
        balance / payment
    } else {
        let monthly_interest = balance * monthly_rate;
        if monthly_interest >= payment {
            return Err(CalculatorError::PaymentTooLow { monthly_interest });
        }
        -(1.0 - monthly_interest / payment).ln() / (1.0 + monthly_rate).ln()
    };

    Ok(LoanPayoff {
        months,
        whole_months: months.ceil() as u32,
        total_interest: payment * months - balance,
    })
}

//
// ─── SCENARIOS ─────────────────────────────────────────────────────────────────
//

/// Derived numbers for one `ExampleScenario`.
#[derive(Debug, Clone, PartialEq)]
pub enum ScenarioOutcome {
    Projection(Vec<ProjectionPoint>),
    Payoff(LoanPayoff),
    Delayed(DelayedStart),
    Change {
        from: f64,
        to: f64,
        change: Option<f64>,
    },
}

/// Compute the outputs of a scenario.
///
/// # Errors
///
/// Returns `CalculatorError` when the inputs are out of range or any derived
/// figure is not finite.
pub fn derive(scenario: &ExampleScenario) -> Result<ScenarioOutcome, CalculatorError> {
    let outcome = derive_unchecked(scenario)?;
    if outcome.is_finite() {
        Ok(outcome)
    } else {
        Err(CalculatorError::NonFinite)
    }
}

fn derive_unchecked(scenario: &ExampleScenario) -> Result<ScenarioOutcome, CalculatorError> {
    match scenario {
        ExampleScenario::CompoundGrowth {
            principal,
            annual_rate,
            years,
        } => {
            check_growth_inputs(*principal, *annual_rate, *years)?;
            Ok(ScenarioOutcome::Projection(compound_growth(
                *principal,
                *annual_rate,
                *years,
            )))
        }
        ExampleScenario::InflationAdjusted {
            annual_need,
            inflation_rate,
            years,
        } => {
            check_growth_inputs(*annual_need, *inflation_rate, *years)?;
            Ok(ScenarioOutcome::Projection(inflation_adjusted(
                *annual_need,
                *inflation_rate,
                *years,
            )))
        }
        ExampleScenario::LoanPayoff {
            balance,
            apr,
            monthly_payment,
        } => loan_payoff(*balance, *apr, *monthly_payment).map(ScenarioOutcome::Payoff),
        ExampleScenario::DelayedStart {
            principal,
            annual_rate,
            years,
            delay_years,
        } => {
            check_growth_inputs(*principal, *annual_rate, *years)?;
            Ok(ScenarioOutcome::Delayed(delayed_start(
                *principal,
                *annual_rate,
                *years,
                *delay_years,
            )))
        }
        ExampleScenario::PercentageChange { from, to, .. } => {
            if !from.is_finite() || !to.is_finite() {
                return Err(CalculatorError::InvalidInput("values must be finite"));
            }
            Ok(ScenarioOutcome::Change {
                from: *from,
                to: *to,
                change: percentage_change(*from, *to),
            })
        }
    }
}

impl ScenarioOutcome {
    fn is_finite(&self) -> bool {
        match self {
            ScenarioOutcome::Projection(points) => points.iter().all(|p| p.value.is_finite()),
            ScenarioOutcome::Payoff(payoff) => {
                payoff.months.is_finite() && payoff.total_interest.is_finite()
            }
            ScenarioOutcome::Delayed(delayed) => {
                delayed.start_now.is_finite()
                    && delayed.start_later.is_finite()
                    && delayed.cost_of_waiting.is_finite()
            }
            ScenarioOutcome::Change { from, to, change } => {
                from.is_finite() && to.is_finite() && change.is_none_or(f64::is_finite)
            }
        }
    }
}

fn check_growth_inputs(amount: f64, rate: f64, years: u32) -> Result<(), CalculatorError> {
    if years > MAX_YEARS {
        return Err(CalculatorError::InvalidInput("horizon is longer than 100 years"));
    }
    if !amount.is_finite() {
        return Err(CalculatorError::InvalidInput("amount must be finite"));
    }
    if !rate.is_finite() || rate <= -1.0 {
        return Err(CalculatorError::InvalidInput("rate must be greater than -100%"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn accounting_format_examples() {
        assert_eq!(format_accounting(-450.0), "(450)");
        assert_eq!(format_accounting(450.0), "450");
        assert_eq!(format_accounting(1_234_567.0), "1,234,567");
        assert_eq!(format_accounting(-1_000.0), "(1,000)");
        assert_eq!(format_accounting(999.4), "999");
        assert_eq!(format_accounting(0.0), "0");
        assert_eq!(format_accounting(-0.0), "0");
    }

    #[test]
    fn currency_format_with_symbol_and_cents() {
        assert_eq!(format_currency(1234.5, &CurrencyFormat::USD_CENTS), "$1,234.50");
        assert_eq!(format_currency(-25_937.42, &CurrencyFormat::USD), "($25,937)");
        assert_eq!(format_currency(100.0, &CurrencyFormat::USD), "$100");
    }

    #[test]
    fn percent_format() {
        assert_eq!(format_percent(0.21, 1), "21.0%");
        assert_eq!(format_percent(-0.055, 2), "-5.50%");
    }

    #[test]
    fn compound_growth_examples() {
        let points = compound_growth(10_000.0, 0.10, 10);
        assert_eq!(points.len(), 11);
        assert_eq!(points[0], ProjectionPoint { year: 0, value: 10_000.0 });
        assert!(close(points[1].value, 11_000.0));
        assert_eq!(points[10].value.round(), 25_937.0);
    }

    #[test]
    fn inflation_uses_same_formula() {
        assert_eq!(
            inflation_adjusted(40_000.0, 0.03, 25),
            compound_growth(40_000.0, 0.03, 25)
        );
    }

    #[test]
    fn loan_payoff_reference_case() {
        let slow = loan_payoff(5_000.0, 0.21, 250.0).unwrap();
        assert!((24.0..26.0).contains(&slow.months), "months = {}", slow.months);
        assert_eq!(slow.whole_months, 25);
        assert!(close(slow.total_interest, 250.0 * slow.months - 5_000.0));

        let fast = loan_payoff(5_000.0, 0.21, 400.0).unwrap();
        assert!(fast.whole_months < slow.whole_months);
        assert!(fast.total_interest < slow.total_interest);
    }

    #[test]
    fn loan_payoff_zero_apr_is_simple_division() {
        let payoff = loan_payoff(1_200.0, 0.0, 100.0).unwrap();
        assert!(close(payoff.months, 12.0));
        assert_eq!(payoff.whole_months, 12);
        assert!(close(payoff.total_interest, 0.0));
    }

    #[test]
    fn loan_payoff_rejects_payment_below_interest() {
        let err = loan_payoff(10_000.0, 0.24, 150.0).unwrap_err();
        assert!(matches!(
            err,
            CalculatorError::PaymentTooLow { monthly_interest } if monthly_interest > 150.0
        ));
        assert!(matches!(
            loan_payoff(-1.0, 0.1, 10.0),
            Err(CalculatorError::InvalidInput(_))
        ));
    }

    #[test]
    fn delayed_start_cost() {
        let delayed = delayed_start(10_000.0, 0.07, 30, 10);
        assert!(close(delayed.start_now, compound_value(10_000.0, 0.07, 30)));
        assert!(close(delayed.start_later, compound_value(10_000.0, 0.07, 20)));
        assert!(delayed.cost_of_waiting > 0.0);

        let too_late = delayed_start(1_000.0, 0.05, 5, 10);
        assert!(close(too_late.start_later, 1_000.0));
    }

    #[test]
    fn percentage_change_handles_zero_base() {
        assert_eq!(percentage_change(0.0, 10.0), None);
        assert!(close(percentage_change(200.0, 150.0).unwrap(), -0.25));
        assert!(close(percentage_change(-100.0, -50.0).unwrap(), 0.5));
    }

    #[test]
    fn derive_rejects_impossible_growth() {
        let scenario = ExampleScenario::compound_growth(f64::NAN, 0.05, 3);
        assert!(derive(&scenario).is_err());
        let scenario = ExampleScenario::compound_growth(100.0, -1.5, 3);
        assert!(derive(&scenario).is_err());
    }

    #[test]
    fn derive_rejects_overflowing_figures() {
        let growth = ExampleScenario::compound_growth(1e306, 1.0, 40);
        assert_eq!(derive(&growth), Err(CalculatorError::NonFinite));

        let delayed = ExampleScenario::DelayedStart {
            principal: 1e306,
            annual_rate: 1.0,
            years: 40,
            delay_years: 1,
        };
        assert_eq!(derive(&delayed), Err(CalculatorError::NonFinite));

        let change = ExampleScenario::PercentageChange {
            label_from: "a".into(),
            from: -f64::MAX,
            label_to: "b".into(),
            to: f64::MAX,
        };
        assert_eq!(derive(&change), Err(CalculatorError::NonFinite));
    }

    #[test]
    fn derive_rejects_long_horizons() {
        let scenario = ExampleScenario::compound_growth(100.0, 0.05, MAX_YEARS + 1);
        assert!(matches!(
            derive(&scenario),
            Err(CalculatorError::InvalidInput(_))
        ));
        let scenario = ExampleScenario::compound_growth(100.0, 0.05, MAX_YEARS);
        assert!(derive(&scenario).is_ok());
    }

    proptest! {
        #[test]
        fn negatives_are_parenthesized(v in 0.5f64..1e12) {
            prop_assert_eq!(format_accounting(-v), format!("({})", format_accounting(v)));
            prop_assert!(!format_accounting(v).contains('('));
        }

        #[test]
        fn growth_starts_at_principal(p in 0.0f64..1e9, r in -0.5f64..1.0) {
            prop_assert_eq!(compound_value(p, r, 0), p);
        }

        #[test]
        fn higher_payment_pays_off_sooner(
            balance in 100.0f64..100_000.0,
            apr in 0.01f64..0.35,
            extra in 1.0f64..5_000.0,
        ) {
            let base = balance * apr / 12.0 + 10.0;
            let slow = loan_payoff(balance, apr, base).unwrap();
            let fast = loan_payoff(balance, apr, base + extra).unwrap();
            prop_assert!(fast.months < slow.months);
            prop_assert!(fast.total_interest < slow.total_interest);
        }

        #[test]
        fn derive_is_deterministic(p in 1.0f64..1e6, r in 0.0f64..0.2, years in 0u32..60) {
            let scenario = ExampleScenario::compound_growth(p, r, years);
            prop_assert_eq!(derive(&scenario), derive(&scenario));
        }
    }
}
