//! On-disk layout of the goal list.
//!
//! Current layout (version 1):
//!
//! ```json
//! {"version": 1, "goals": [{"id": "…", "name": "…", "isComplete": false}]}
//! ```
//!
//! The unversioned layout is a bare JSON array of goals. It is still read and
//! is replaced by the versioned document on the next write.

use lesson_core::model::Goal;
use serde::{Deserialize, Serialize};

use crate::repository::StorageError;

pub const CURRENT_VERSION: u32 = 1;

#[derive(Serialize)]
struct GoalDocumentRef<'a> {
    version: u32,
    goals: &'a [Goal],
}

#[derive(Deserialize)]
struct GoalDocument {
    version: u32,
    #[serde(default)]
    goals: Vec<Goal>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredGoals {
    Versioned(GoalDocument),
    Legacy(Vec<Goal>),
}

/// Decode a stored goal list, accepting the legacy bare-array layout.
///
/// # Errors
///
/// `StorageError::Serialization` for malformed JSON,
/// `StorageError::UnsupportedVersion` for documents newer than this build.
pub fn decode_goals(raw: &str) -> Result<Vec<Goal>, StorageError> {
    let stored: StoredGoals =
        serde_json::from_str(raw).map_err(|err| StorageError::Serialization(err.to_string()))?;
    match stored {
        StoredGoals::Legacy(goals) => Ok(goals),
        StoredGoals::Versioned(doc) if doc.version <= CURRENT_VERSION => Ok(doc.goals),
        StoredGoals::Versioned(doc) => Err(StorageError::UnsupportedVersion(doc.version)),
    }
}

/// Encode goals in the current layout.
///
/// # Errors
///
/// `StorageError::Serialization` if a goal cannot be encoded.
pub fn encode_goals(goals: &[Goal]) -> Result<String, StorageError> {
    serde_json::to_string(&GoalDocumentRef {
        version: CURRENT_VERSION,
        goals,
    })
    .map_err(|err| StorageError::Serialization(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lesson_core::model::{GoalDraft, GoalId};

    fn goal(id: &str, name: &str) -> Goal {
        GoalDraft::named(name)
            .validate()
            .unwrap()
            .assign_id(GoalId::new(id))
    }

    #[test]
    fn encodes_versioned_document() {
        let raw = encode_goals(&[goal("1", "House")]).unwrap();
        assert_eq!(
            raw,
            r#"{"version":1,"goals":[{"id":"1","name":"House","isComplete":false}]}"#
        );
        assert_eq!(decode_goals(&raw).unwrap(), vec![goal("1", "House")]);
    }

    #[test]
    fn reads_legacy_array() {
        let raw = r#"[{"id":"17","name":"Bike","targetAmount":300,"isComplete":false}]"#;
        let goals = decode_goals(raw).unwrap();
        assert_eq!(goals.len(), 1);
        assert_eq!(goals[0].name(), "Bike");
        assert_eq!(goals[0].target_amount(), Some(300.0));
    }

    #[test]
    fn rejects_newer_versions_and_garbage() {
        assert!(matches!(
            decode_goals(r#"{"version":9,"goals":[]}"#),
            Err(StorageError::UnsupportedVersion(9))
        ));
        assert!(matches!(
            decode_goals("{not json"),
            Err(StorageError::Serialization(_))
        ));
    }
}
