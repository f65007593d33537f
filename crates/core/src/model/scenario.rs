use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Longest horizon, in years, a scenario may project.
pub const MAX_YEARS: u32 = 100;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScenarioError {
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },

    #[error("horizon of {0} years exceeds the {MAX_YEARS}-year limit")]
    HorizonTooLong(u32),

    #[error("delay of {delay_years} years exceeds the {years}-year horizon")]
    DelayBeyondHorizon { years: u32, delay_years: u32 },
}

/// Hard-coded numeric inputs behind a chart illustration.
///
/// Only inputs are stored; outputs are derived by
/// [`crate::calculator::derive`] every time a page is rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ExampleScenario {
    /// `principal × (1 + annual_rate)^n` for `n` in `0..=years`.
    CompoundGrowth {
        principal: f64,
        annual_rate: f64,
        years: u32,
    },
    /// Same formula applied to a yearly spending need.
    InflationAdjusted {
        annual_need: f64,
        inflation_rate: f64,
        years: u32,
    },
    /// Months to pay off a balance at a fixed monthly payment.
    LoanPayoff {
        balance: f64,
        apr: f64,
        monthly_payment: f64,
    },
    /// Investing now versus after `delay_years`, valued at `years`.
    DelayedStart {
        principal: f64,
        annual_rate: f64,
        years: u32,
        delay_years: u32,
    },
    PercentageChange {
        label_from: String,
        from: f64,
        label_to: String,
        to: f64,
    },
}

impl ExampleScenario {
    #[must_use]
    pub fn compound_growth(principal: f64, annual_rate: f64, years: u32) -> Self {
        Self::CompoundGrowth {
            principal,
            annual_rate,
            years,
        }
    }

    #[must_use]
    pub fn loan_payoff(balance: f64, apr: f64, monthly_payment: f64) -> Self {
        Self::LoanPayoff {
            balance,
            apr,
            monthly_payment,
        }
    }

    /// Check the stored inputs are finite and the horizon is bounded.
    /// Whether the formula itself yields a finite result is left to
    /// [`crate::calculator::derive`].
    ///
    /// # Errors
    ///
    /// Returns `ScenarioError` for the first out-of-range input.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        match self {
            Self::CompoundGrowth {
                principal,
                annual_rate,
                years,
            } => {
                finite("principal", *principal)?;
                finite("annual_rate", *annual_rate)?;
                horizon(*years)
            }
            Self::InflationAdjusted {
                annual_need,
                inflation_rate,
                years,
            } => {
                finite("annual_need", *annual_need)?;
                finite("inflation_rate", *inflation_rate)?;
                horizon(*years)
            }
            Self::LoanPayoff {
                balance,
                apr,
                monthly_payment,
            } => {
                finite("balance", *balance)?;
                finite("apr", *apr)?;
                finite("monthly_payment", *monthly_payment)
            }
            Self::DelayedStart {
                principal,
                annual_rate,
                years,
                delay_years,
            } => {
                finite("principal", *principal)?;
                finite("annual_rate", *annual_rate)?;
                horizon(*years)?;
                if delay_years > years {
                    return Err(ScenarioError::DelayBeyondHorizon {
                        years: *years,
                        delay_years: *delay_years,
                    });
                }
                Ok(())
            }
            Self::PercentageChange { from, to, .. } => {
                finite("from", *from)?;
                finite("to", *to)
            }
        }
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), ScenarioError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ScenarioError::NonFinite { field })
    }
}

fn horizon(years: u32) -> Result<(), ScenarioError> {
    if years > MAX_YEARS {
        Err(ScenarioError::HorizonTooLong(years))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_horizon_is_rejected() {
        let scenario = ExampleScenario::compound_growth(1_000.0, 0.07, 4_000_000_000);
        assert_eq!(
            scenario.validate(),
            Err(ScenarioError::HorizonTooLong(4_000_000_000))
        );
        assert!(ExampleScenario::compound_growth(1_000.0, 0.07, MAX_YEARS)
            .validate()
            .is_ok());
    }

    #[test]
    fn delay_must_fit_inside_horizon() {
        let scenario = ExampleScenario::DelayedStart {
            principal: 10_000.0,
            annual_rate: 0.07,
            years: 10,
            delay_years: 12,
        };
        assert_eq!(
            scenario.validate(),
            Err(ScenarioError::DelayBeyondHorizon {
                years: 10,
                delay_years: 12
            })
        );
    }

    #[test]
    fn non_finite_inputs_name_the_field() {
        let scenario = ExampleScenario::loan_payoff(5_000.0, f64::INFINITY, 250.0);
        assert_eq!(
            scenario.validate(),
            Err(ScenarioError::NonFinite { field: "apr" })
        );
    }
}
