use lesson_core::model::{Goal, GoalDraft, GoalId};
use storage::repository::{GOALS_KEY, KeyValueStore, Storage, StorageError};
use storage::sqlite::SqliteRepository;

fn goal(id: &str, name: &str, target: Option<f64>) -> Goal {
    GoalDraft {
        target_amount: target,
        ..GoalDraft::named(name)
    }
    .validate()
    .unwrap()
    .assign_id(GoalId::new(id))
}

#[tokio::test]
async fn sqlite_kv_round_trip_and_overwrite() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_kv_roundtrip?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");
    // Migrations are idempotent.
    repo.migrate().await.expect("migrate again");

    assert_eq!(repo.get("missing").await.unwrap(), None);

    repo.set("theme", "dark").await.unwrap();
    repo.set("theme", "light").await.unwrap();
    assert_eq!(repo.get("theme").await.unwrap().as_deref(), Some("light"));

    repo.remove("theme").await.unwrap();
    assert_eq!(repo.get("theme").await.unwrap(), None);
}

#[tokio::test]
async fn sqlite_goal_list_persists_newest_first() {
    let storage = Storage::sqlite("sqlite:file:memdb_goals?mode=memory&cache=shared")
        .await
        .expect("connect sqlite");

    storage
        .goals
        .insert_goal(&goal("100", "Emergency fund", Some(3000.0)))
        .await
        .unwrap();
    storage
        .goals
        .insert_goal(&goal("200", "Vacation", None))
        .await
        .unwrap();

    let goals = storage.goals.load_goals().await.unwrap();
    assert_eq!(goals.len(), 2);
    assert_eq!(goals[0].id().as_str(), "200");
    assert_eq!(goals[1], goal("100", "Emergency fund", Some(3000.0)));

    let raw = storage.kv.get(GOALS_KEY).await.unwrap().unwrap();
    assert!(raw.contains(r#""version":1"#), "{raw}");
}

#[tokio::test]
async fn sqlite_malformed_goal_list_surfaces_error() {
    let storage = Storage::sqlite("sqlite:file:memdb_goals_bad?mode=memory&cache=shared")
        .await
        .expect("connect sqlite");
    storage.kv.set(GOALS_KEY, "not json").await.unwrap();

    let err = storage.goals.load_goals().await.unwrap_err();
    assert!(matches!(err, StorageError::Serialization(_)));
}
