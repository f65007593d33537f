use std::collections::HashSet;
use std::sync::Arc;

use rand::Rng;
use tokio::sync::Mutex;

use lesson_core::model::{Goal, GoalDraft, GoalId};
use storage::repository::GoalRepository;

use crate::Clock;
use crate::error::GoalServiceError;

/// Random offsets tried before falling back to a sequential search.
const ID_ATTEMPTS: usize = 16;
const ID_SPREAD: i64 = 1_000;

/// Creates and lists user goals.
#[derive(Clone)]
pub struct GoalService {
    clock: Clock,
    goals: Arc<dyn GoalRepository>,
    write_lock: Arc<Mutex<()>>,
}

impl GoalService {
    #[must_use]
    pub fn new(clock: Clock, goals: Arc<dyn GoalRepository>) -> Self {
        Self {
            clock,
            goals,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Validate the draft and insert it at the head of the stored list.
    ///
    /// Existing entries are never rewritten: if the stored list cannot be
    /// read, creation is abandoned.
    ///
    /// # Errors
    ///
    /// Returns `GoalServiceError::Goal` for invalid input.
    /// Returns `GoalServiceError::Storage` if the list cannot be read or written.
    pub async fn create_goal(&self, draft: GoalDraft) -> Result<Goal, GoalServiceError> {
        let validated = draft.validate()?;

        let _guard = self.write_lock.lock().await;
        let existing = self.goals.load_goals().await.inspect_err(|err| {
            tracing::error!(error = %err, "cannot load goals, creation abandoned");
        })?;

        let id = next_goal_id(self.clock.now_millis(), &existing);
        let goal = validated.assign_id(id);
        self.goals.insert_goal(&goal).await.inspect_err(|err| {
            tracing::error!(goal_id = %goal.id(), error = %err, "cannot save goal");
        })?;

        tracing::info!(goal_id = %goal.id(), total = existing.len() + 1, "goal created");
        Ok(goal)
    }

    /// All stored goals, newest first.
    ///
    /// # Errors
    ///
    /// Returns `GoalServiceError::Storage` if the list cannot be read.
    pub async fn list_goals(&self) -> Result<Vec<Goal>, GoalServiceError> {
        Ok(self.goals.load_goals().await?)
    }
}

fn next_goal_id(base_millis: i64, existing: &[Goal]) -> GoalId {
    pick_goal_id(base_millis, existing, &mut rand::rng())
}

/// `base + rand(0..1000)`, re-rolled until it is not in `existing`.
fn pick_goal_id(base_millis: i64, existing: &[Goal], rng: &mut impl Rng) -> GoalId {
    let taken: HashSet<&str> = existing.iter().map(|goal| goal.id().as_str()).collect();
    let is_free = |candidate: i64| !taken.contains(candidate.to_string().as_str());

    (0..ID_ATTEMPTS)
        .map(|_| base_millis + rng.random_range(0..ID_SPREAD))
        .find(|&candidate| is_free(candidate))
        .or_else(|| (base_millis + ID_SPREAD..).find(|&candidate| is_free(candidate)))
        .map_or_else(|| GoalId::from_millis(base_millis), GoalId::from_millis)
}
