use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error type for parsing an identifier from a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    kind: &'static str,
    raw: String,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}: {:?}", self.kind, self.raw)
    }
}

impl std::error::Error for ParseIdError {}

/// Slugs are lowercase ASCII letters, digits and single inner dashes.
fn is_slug(s: &str) -> bool {
    !s.is_empty()
        && !s.starts_with('-')
        && !s.ends_with('-')
        && !s.contains("--")
        && s
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

macro_rules! slug_id {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Parse a slug identifier.
            ///
            /// # Errors
            ///
            /// Returns `ParseIdError` when the value is not a slug.
            pub fn new(raw: impl Into<String>) -> Result<Self, ParseIdError> {
                let raw = raw.into();
                if is_slug(&raw) {
                    Ok(Self(raw))
                } else {
                    Err(ParseIdError { kind: $kind, raw })
                }
            }

            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = ParseIdError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

slug_id!(
    /// Identifier of a lesson, used in page paths (`/lessons/{id}`).
    LessonId,
    "LessonId"
);

slug_id!(
    /// Identifier of a roadmap step; doubles as the navigation token.
    StepId,
    "StepId"
);

/// Identifier of a persisted goal.
///
/// Stored as a string to match the persisted layout; freshly created goals
/// carry a numeric value derived from the creation timestamp.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GoalId(String);

impl GoalId {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn from_millis(value: i64) -> Self {
        Self(value.to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for GoalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GoalId({})", self.0)
    }
}

impl fmt::Display for GoalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lesson_id_accepts_slugs() {
        let id: LessonId = "bond-basics".parse().unwrap();
        assert_eq!(id.as_str(), "bond-basics");
        assert_eq!(id.to_string(), "bond-basics");
        assert_eq!(format!("{id:?}"), "LessonId(bond-basics)");
    }

    #[test]
    fn lesson_id_rejects_non_slugs() {
        for raw in ["", "Bond", "bond basics", "-bond", "bond-", "bond--basics", "bönd"] {
            assert!(raw.parse::<LessonId>().is_err(), "{raw:?} should be rejected");
        }
    }

    #[test]
    fn step_id_deserializes_with_validation() {
        let ok: StepId = serde_json::from_str("\"step-3\"").unwrap();
        assert_eq!(ok.as_str(), "step-3");

        let err = serde_json::from_str::<StepId>("\"Step 3\"");
        assert!(err.is_err());
    }

    #[test]
    fn goal_id_serializes_as_plain_string() {
        let id = GoalId::from_millis(1_700_000_000_123);
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"1700000000123\"");
    }
}
