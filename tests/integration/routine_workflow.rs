//! Routine decoration workflow tests.
//!
//! 1. Create activities
//! 2. Seed routines and their links
//! 3. Attach activities to routines
//! 4. Verify grouping, order and serialized shape

#![allow(clippy::unwrap_used, clippy::expect_used)]

use activity_store::storage::{
    attach_activities_to_routines, NewActivity, RoutineRef, SqliteStorage,
};
use serde::Serialize;
use serial_test::serial;
use tempfile::TempDir;

/// Routine as another module would model it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
struct Routine {
    id: i64,
    name: String,
    is_public: bool,
}

impl RoutineRef for Routine {
    fn routine_id(&self) -> i64 {
        self.id
    }
}

async fn create_test_storage() -> (SqliteStorage, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let storage = SqliteStorage::new(temp_dir.path().join("routines.db"))
        .await
        .expect("Failed to create storage");
    (storage, temp_dir)
}

async fn seed_routine(storage: &SqliteStorage, name: &str) -> Routine {
    let result = sqlx::query(r#"INSERT INTO routines (name, goal, "isPublic") VALUES (?, ?, 1)"#)
        .bind(name)
        .bind("stay fit")
        .execute(&storage.get_pool())
        .await
        .expect("insert routine");
    Routine {
        id: result.last_insert_rowid(),
        name: name.to_string(),
        is_public: true,
    }
}

async fn seed_link(storage: &SqliteStorage, routine_id: i64, activity_id: i64, count: i64) {
    sqlx::query(
        r#"INSERT INTO routine_activities ("routineId", "activityId", duration, count)
           VALUES (?, ?, ?, ?)"#,
    )
    .bind(routine_id)
    .bind(activity_id)
    .bind(15)
    .bind(count)
    .execute(&storage.get_pool())
    .await
    .expect("insert link");
}

#[tokio::test]
#[serial]
async fn test_attach_preserves_order_and_groups() {
    let (storage, _temp_dir) = create_test_storage().await;

    let run = storage
        .create_activity(&NewActivity::new("Run", "Go outside"))
        .await
        .expect("create");
    let swim = storage
        .create_activity(&NewActivity::new("Swim", "Laps"))
        .await
        .expect("create");

    let r1 = seed_routine(&storage, "Morning").await;
    let r2 = seed_routine(&storage, "Rest day").await;
    seed_link(&storage, r1.id, run.id, 1).await;
    seed_link(&storage, r1.id, swim.id, 2).await;

    let decorated = storage
        .attach_activities_to_routines(vec![r1.clone(), r2.clone()])
        .await
        .expect("attach");

    assert_eq!(decorated.len(), 2);
    assert_eq!(decorated[0].routine, r1);
    assert_eq!(decorated[1].routine, r2);

    let mut names: Vec<&str> = decorated[0]
        .activities
        .iter()
        .map(|a| a.name.as_str())
        .collect();
    names.sort_unstable();
    assert_eq!(names, vec!["Run", "Swim"]);
    assert!(decorated[0].activities.iter().all(|a| a.routine_id == r1.id));
    assert!(decorated[1].activities.is_empty());
}

#[tokio::test]
#[serial]
async fn test_attach_empty_input() {
    let (storage, _temp_dir) = create_test_storage().await;
    let decorated = attach_activities_to_routines(&storage, Vec::<Routine>::new())
        .await
        .expect("attach");
    assert!(decorated.is_empty());
}

#[tokio::test]
#[serial]
async fn test_attach_accepts_borrowed_routines() {
    let (storage, _temp_dir) = create_test_storage().await;

    let run = storage
        .create_activity(&NewActivity::new("Run", "Go outside"))
        .await
        .expect("create");
    let routine = seed_routine(&storage, "Morning").await;
    seed_link(&storage, routine.id, run.id, 3).await;

    let routines = vec![routine];
    let decorated = attach_activities_to_routines(&storage, routines.iter().collect::<Vec<_>>())
        .await
        .expect("attach");

    assert_eq!(decorated.len(), 1);
    assert_eq!(decorated[0].activities[0].count, Some(3));
    assert_eq!(decorated[0].activities[0].activity(), run);
}

#[tokio::test]
#[serial]
async fn test_decorated_routine_json_shape() {
    let (storage, _temp_dir) = create_test_storage().await;

    let run = storage
        .create_activity(&NewActivity::new("Run", "Go outside"))
        .await
        .expect("create");
    let routine = seed_routine(&storage, "Morning").await;
    seed_link(&storage, routine.id, run.id, 4).await;

    let decorated = storage
        .attach_activities_to_routines(vec![routine.clone()])
        .await
        .expect("attach");
    let json = serde_json::to_value(&decorated).expect("serialize");

    let entry = &json[0];
    assert_eq!(entry["id"], routine.id);
    assert_eq!(entry["name"], "Morning");
    assert_eq!(entry["isPublic"], true);
    assert_eq!(entry["activities"][0]["name"], "Run");
    assert_eq!(entry["activities"][0]["routineId"], routine.id);
    assert_eq!(entry["activities"][0]["count"], 4);
    assert!(entry["activities"][0]["routineActivityId"].is_i64());
}

#[tokio::test]
#[serial]
async fn test_attach_many_routines() {
    let (storage, _temp_dir) = create_test_storage().await;

    let run = storage
        .create_activity(&NewActivity::new("Run", "Go outside"))
        .await
        .expect("create");

    let mut routines = Vec::new();
    for i in 0..50 {
        let routine = seed_routine(&storage, &format!("Routine {i}")).await;
        if i % 2 == 0 {
            seed_link(&storage, routine.id, run.id, i).await;
        }
        routines.push(routine);
    }

    let decorated = storage
        .attach_activities_to_routines(routines)
        .await
        .expect("attach");

    assert_eq!(decorated.len(), 50);
    for (i, entry) in decorated.iter().enumerate() {
        let expected = usize::from(i % 2 == 0);
        assert_eq!(entry.activities.len(), expected, "routine {i}");
    }
}
