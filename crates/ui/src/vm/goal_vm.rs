use lesson_core::calculator::{CurrencyFormat, format_currency};
use lesson_core::model::Goal;

/// Message shown above the goal form after a submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoticeVm {
    pub tone: &'static str,
    pub text: String,
}

impl NoticeVm {
    #[must_use]
    pub fn saved(name: &str) -> Self {
        Self {
            tone: "tip",
            text: format!("Saved \u{201c}{name}\u{201d} to your goals."),
        }
    }

    #[must_use]
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self {
            tone: "warning",
            text: reason.into(),
        }
    }

    /// Storage failures are not shown in detail.
    #[must_use]
    pub fn save_failed() -> Self {
        Self {
            tone: "warning",
            text: "We couldn't save your goal. Please try again.".to_owned(),
        }
    }
}

/// Goal creation form; posted as `application/x-www-form-urlencoded`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GoalFormVm {
    pub action: String,
    /// Navigation token carried as a hidden field.
    pub from: Option<String>,
    pub name: String,
    pub category: String,
    pub return_href: String,
    pub notice: Option<NoticeVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GoalVm {
    pub id: String,
    pub name: String,
    pub target: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub complete: bool,
}

impl GoalVm {
    #[must_use]
    pub fn css_class(&self) -> &'static str {
        if self.complete { "goal done" } else { "goal" }
    }
}

#[must_use]
pub fn map_goals(goals: &[Goal]) -> Vec<GoalVm> {
    goals
        .iter()
        .map(|goal| GoalVm {
            id: goal.id().to_string(),
            name: goal.name().to_owned(),
            target: goal
                .target_amount()
                .map(|amount| format_currency(amount, &CurrencyFormat::USD_CENTS)),
            category: goal.linked_category().map(str::to_owned),
            description: goal.description().map(str::to_owned),
            complete: goal.is_complete(),
        })
        .collect()
}
