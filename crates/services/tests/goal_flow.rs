use std::collections::HashSet;
use std::sync::Arc;

use lesson_core::model::{Goal, GoalDraft};
use lesson_core::time::fixed_now;
use services::{Clock, GoalService};
use storage::repository::Storage;

fn draft(name: &str, target: f64) -> GoalDraft {
    GoalDraft {
        target_amount: Some(target),
        linked_category: Some("Savings".into()),
        ..GoalDraft::named(name)
    }
}

#[tokio::test]
async fn repeated_creations_prepend_unique_goals() {
    let storage = Storage::sqlite("sqlite:file:memdb_goal_flow?mode=memory&cache=shared")
        .await
        .expect("connect sqlite");
    // Same clock reading for every creation, so only the random offset separates ids.
    let service = GoalService::new(Clock::fixed(fixed_now()), Arc::clone(&storage.goals));

    let mut snapshots: Vec<Vec<Goal>> = Vec::new();
    for n in 1..=20 {
        service
            .create_goal(draft(&format!("Goal {n}"), f64::from(n) * 100.0))
            .await
            .expect("create goal");
        snapshots.push(service.list_goals().await.expect("list goals"));
    }

    let goals = snapshots.last().expect("at least one snapshot");
    assert_eq!(goals.len(), 20);
    assert_eq!(goals[0].name(), "Goal 20");
    assert_eq!(goals[19].name(), "Goal 1");

    let ids: HashSet<_> = goals.iter().map(|g| g.id().as_str()).collect();
    assert_eq!(ids.len(), 20);

    // Each write leaves the earlier list intact behind the new head.
    for pair in snapshots.windows(2) {
        assert_eq!(&pair[1][1..], pair[0].as_slice());
    }
}

#[tokio::test]
async fn concurrent_creations_do_not_lose_inserts() {
    let storage = Storage::in_memory();
    let service = GoalService::new(Clock::default_clock(), Arc::clone(&storage.goals));

    let handles: Vec<_> = (0..16)
        .map(|n| {
            let service = service.clone();
            tokio::spawn(async move { service.create_goal(draft(&format!("G{n}"), 50.0)).await })
        })
        .collect();
    for handle in handles {
        handle.await.expect("join").expect("create goal");
    }

    let goals = service.list_goals().await.expect("list goals");
    assert_eq!(goals.len(), 16);
    let ids: HashSet<_> = goals.iter().map(|g| g.id().as_str()).collect();
    assert_eq!(ids.len(), 16);
}
