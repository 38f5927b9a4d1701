//! Test utilities and mock factories.
//!
//! This module provides shared testing infrastructure:
//! - Mock implementations for [`ActivityStore`](crate::traits::ActivityStore)
//! - Row fixtures
//!
//! Only compiled for tests (`#[cfg(test)]`).

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::storage::RoutineActivity;
use crate::traits::MockActivityStore;

/// Build a joined row for `routine_id` whose activity id is `id`.
#[must_use]
pub fn routine_row(id: i64, routine_id: i64) -> RoutineActivity {
    RoutineActivity {
        id,
        name: format!("activity-{id}"),
        description: format!("description {id}"),
        duration: Some(10),
        count: Some(1),
        routine_activity_id: id * 100 + routine_id,
        routine_id,
    }
}

/// Create a mock store that fails the test if any query is issued.
#[must_use]
pub fn mock_store_without_queries() -> MockActivityStore {
    let mut mock = MockActivityStore::new();
    mock.expect_get_routine_activities().never();
    mock.expect_get_all_activities().never();
    mock
}

/// Create a mock store that expects exactly one routine lookup for
/// `expected_ids` and answers it with `rows`.
#[must_use]
pub fn mock_store_with_routine_rows(
    expected_ids: Vec<i64>,
    rows: Vec<RoutineActivity>,
) -> MockActivityStore {
    let mut mock = MockActivityStore::new();
    mock.expect_get_routine_activities()
        .withf(move |ids| ids.to_vec() == expected_ids)
        .times(1)
        .returning(move |_| Ok(rows.clone()));
    mock
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::ActivityStore;

    #[test]
    fn test_routine_row() {
        let row = routine_row(3, 7);
        assert_eq!(row.id, 3);
        assert_eq!(row.routine_id, 7);
        assert_eq!(row.routine_activity_id, 307);
    }

    #[tokio::test]
    async fn test_mock_store_with_routine_rows() {
        let mock = mock_store_with_routine_rows(vec![7], vec![routine_row(3, 7)]);
        let rows = mock.get_routine_activities(&[7]).await.unwrap();
        assert_eq!(rows, vec![routine_row(3, 7)]);
    }
}
