use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::GoalId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GoalError {
    #[error("goal name cannot be empty")]
    EmptyName,

    #[error("target amount must be a positive number")]
    InvalidTargetAmount,
}

/// Form input for a new goal, before an id is assigned.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GoalDraft {
    pub name: String,
    #[serde(default)]
    pub target_amount: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub linked_category: Option<String>,
}

/// Draft that passed validation; `assign_id` turns it into a `Goal`.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedGoal {
    name: String,
    target_amount: Option<f64>,
    description: Option<String>,
    linked_category: Option<String>,
}

impl GoalDraft {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Normalise and check the form input.
    ///
    /// # Errors
    ///
    /// Returns `GoalError` when the name is blank or the target is not a
    /// positive finite number.
    pub fn validate(self) -> Result<ValidatedGoal, GoalError> {
        let name = self.name.trim().to_owned();
        if name.is_empty() {
            return Err(GoalError::EmptyName);
        }
        if let Some(amount) = self.target_amount {
            if !amount.is_finite() || amount <= 0.0 {
                return Err(GoalError::InvalidTargetAmount);
            }
        }

        Ok(ValidatedGoal {
            name,
            target_amount: self.target_amount,
            description: normalize_optional(self.description),
            linked_category: normalize_optional(self.linked_category),
        })
    }
}

impl ValidatedGoal {
    #[must_use]
    pub fn assign_id(self, id: GoalId) -> Goal {
        Goal {
            id,
            name: self.name,
            target_amount: self.target_amount,
            description: self.description,
            linked_category: self.linked_category,
            is_complete: false,
        }
    }
}

/// A user-created savings target. Field names follow the persisted layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    id: GoalId,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    target_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    linked_category: Option<String>,
    #[serde(default)]
    is_complete: bool,
}

impl Goal {
    #[must_use]
    pub fn id(&self) -> &GoalId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn target_amount(&self) -> Option<f64> {
        self.target_amount
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn linked_category(&self) -> Option<&str> {
        self.linked_category.as_deref()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.is_complete
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}
